//! Article loading: enumerate, validate, slug, sort.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::record::{Article, ArticleData};
use crate::{debug, log};
use crate::schema::content::ARTICLE_DATA;
use crate::slug::SlugPool;
use crate::utils::date::DateTimeUtc;

/// Why a single record was skipped. Advisory only: a bad record never
/// aborts the batch.
#[derive(Debug, Error)]
enum RecordError {
    #[error("unreadable file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("record does not conform to the article schema")]
    Schema,
}

/// Load every article record from `dir`, sorted by date descending.
///
/// Each `*.json` entry gets a slug derived from its filename, unique within
/// this call. Entries that fail to read, parse or validate are skipped with
/// a diagnostic. A missing or empty directory yields an empty vec; the
/// batch as a whole never fails.
pub fn load_articles(dir: &Path) -> Vec<Article> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok()?.file_name().into_string().ok())
        .filter(|name| name.ends_with(".json"))
        .collect();
    // Directory order is platform-dependent; sort for a stable batch order.
    names.sort();

    let mut pool = SlugPool::new();
    let mut articles = Vec::with_capacity(names.len());
    for name in &names {
        match read_record(&dir.join(name)) {
            Ok(data) => {
                // Only accepted records reserve a slug.
                let slug = pool.assign(name.trim_end_matches(".json"));
                articles.push(Article { slug, data });
            }
            Err(err) => log!("skip"; "{name}: {err}"),
        }
    }
    debug!("load"; "accepted {} of {} records", pool.len(), names.len());

    // Most recent first; stable, so equal dates keep batch order.
    articles.sort_by(|a, b| date_key(b).cmp(&date_key(a)));
    articles
}

/// Read one record and check it against the article-data shape.
fn read_record(path: &Path) -> Result<ArticleData, RecordError> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    if !ARTICLE_DATA.check(&value) {
        return Err(RecordError::Schema);
    }
    Ok(serde_json::from_value(value)?)
}

fn date_key(article: &Article) -> Option<DateTimeUtc> {
    DateTimeUtc::parse(&article.data.date)
}
