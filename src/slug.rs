//! URL slug derivation with batch-scoped collision resolution.

use deunicode::deunicode;
use rustc_hash::FxHashSet;

/// Normalize a raw name into a URL-safe slug.
///
/// Unicode is transliterated to ASCII, everything outside `[a-z0-9]` becomes
/// a hyphen, runs of separators collapse and leading/trailing hyphens are
/// trimmed.
pub fn slugify(raw: &str) -> String {
    let ascii = deunicode(raw);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }
    slug
}

/// Batch-scoped accumulator of assigned slugs.
///
/// Uniqueness is local to one pool; the loader creates a fresh pool per
/// `load_articles` call and nothing is remembered across calls.
#[derive(Debug, Default)]
pub struct SlugPool {
    assigned: FxHashSet<String>,
}

impl SlugPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a slug for `raw`, unique within this pool.
    ///
    /// On collision the counter appended is one more than the number of
    /// already-assigned slugs that share the candidate as a *prefix*, not
    /// the number of exact duplicates. A pre-existing `foo-bar` therefore
    /// bumps the counter for a colliding `foo`. Deliberately kept for
    /// compatibility with existing published URLs.
    pub fn assign(&mut self, raw: &str) -> String {
        let mut slug = slugify(raw);
        while self.assigned.contains(&slug) {
            let count = self
                .assigned
                .iter()
                .filter(|s| s.starts_with(&slug))
                .count();
            slug = format!("{slug}-{}", count + 1);
        }
        self.assigned.insert(slug.clone());
        slug
    }

    /// Number of slugs assigned so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("My Talk"), "my-talk");
        assert_eq!(slugify("  Hello,  World!  "), "hello-world");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_slugify_transliterates_unicode() {
        assert_eq!(slugify("Über Café"), "uber-cafe");
        assert_eq!(slugify("naïve résumé"), "naive-resume");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a --- b___c"), "a-b-c");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_assign_unique_for_case_variants() {
        let mut pool = SlugPool::new();
        assert_eq!(pool.assign("My Talk"), "my-talk");
        assert_eq!(pool.assign("my talk"), "my-talk-2");
        // Both earlier slugs share the "my-talk" prefix, so the counter
        // skips ahead.
        assert_eq!(pool.assign("MY TALK"), "my-talk-3");
    }

    #[test]
    fn test_assign_counts_prefix_matches_not_exact() {
        let mut pool = SlugPool::new();
        assert_eq!(pool.assign("foo-bar"), "foo-bar");
        assert_eq!(pool.assign("foo"), "foo");
        // Two assigned slugs start with "foo", so the next collision
        // jumps straight to -3.
        assert_eq!(pool.assign("foo"), "foo-3");
    }

    #[test]
    fn test_pool_tracks_assigned_count() {
        let mut pool = SlugPool::new();
        assert!(pool.is_empty());
        pool.assign("first post");
        pool.assign("second post");
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_pool_is_batch_local() {
        let mut first = SlugPool::new();
        first.assign("post");
        let mut second = SlugPool::new();
        assert_eq!(second.assign("post"), "post");
    }
}
