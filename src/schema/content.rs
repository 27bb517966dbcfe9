//! Compiled validators for the five content record kinds.
//!
//! Each shape mirrors the authored JSON layout field-for-field (camelCase
//! keys). The validators are compiled once and shared; see
//! [`crate::schema::Validator`] for the checking semantics.

use std::sync::LazyLock;

use super::{Field, Shape, Validator};

/// Allowed `font` literals in site metadata.
pub const FONT_OPTIONS: &[&str] = &[
    "monaspace-neon",
    "montserrat",
    "roboto",
    "open-sans",
    "lato",
    "poppins",
    "inter",
    "raleway",
    "nunito",
    "playfair-display",
];

/// Allowed `platform` literals in profile social links.
pub const SOCIAL_PLATFORMS: &[&str] = &[
    "twitter",
    "linkedin",
    "github",
    "youtube",
    "twitch",
    "medium",
    "scholar",
    "huggingface",
    "facebook",
    "instagram",
    "mail",
];

/// Allowed `sectionOrder` literals in site metadata.
pub const SECTION_KINDS: &[&str] = &["profile", "articles", "resume", "talks"];

/// `{label, url}` pair used by article and talk link lists.
fn link_shape() -> Shape {
    Shape::Object(vec![
        Field::required("label", Shape::String),
        Field::required("url", Shape::String),
    ])
}

/// Author-supplied article body, without the assigned slug.
fn article_data_shape() -> Shape {
    Shape::Object(vec![
        Field::required("date", Shape::Date),
        Field::required("title", Shape::String),
        Field::required("flag", Shape::String),
        Field::optional("content", Shape::String),
        Field::optional("authors", Shape::String),
        Field::optional("tags", Shape::array(Shape::String)),
        Field::optional("picture", Shape::String),
        Field::optional("links", Shape::array(link_shape())),
    ])
}

fn metadata_shape() -> Shape {
    Shape::Object(vec![
        Field::required("title", Shape::String),
        Field::optional("logo", Shape::String),
        Field::required("primaryColor", Shape::String),
        Field::required("secondaryColor", Shape::String),
        Field::required("font", Shape::Literal(FONT_OPTIONS)),
        Field::required("sectionOrder", Shape::array(Shape::Literal(SECTION_KINDS))),
    ])
}

fn profile_shape() -> Shape {
    let social = Shape::Object(vec![
        Field::required("platform", Shape::Literal(SOCIAL_PLATFORMS)),
        Field::required("url", Shape::String),
    ]);
    Shape::Object(vec![
        Field::required("title", Shape::String),
        Field::optional("picture", Shape::String),
        Field::optional("bio", Shape::String),
        Field::optional("socialLinks", Shape::array(social)),
    ])
}

fn resume_shape() -> Shape {
    let experience = Shape::Object(vec![
        Field::required("company", Shape::String),
        Field::optional("companyUrl", Shape::String),
        Field::required("position", Shape::String),
        Field::required("startDate", Shape::Date),
        Field::optional("endDate", Shape::Date),
        Field::optional("description", Shape::String),
        Field::required("education", Shape::Bool),
    ]);
    Shape::Object(vec![
        Field::required("centered", Shape::Bool),
        Field::required("experiences", Shape::array(experience)),
    ])
}

fn talk_shape() -> Shape {
    Shape::Object(vec![
        Field::required("title", Shape::String),
        Field::required("description", Shape::String),
        Field::required("date", Shape::Date),
        Field::optional("flag", Shape::String),
        Field::optional("links", Shape::array(link_shape())),
    ])
}

/// Article body as authored (no slug).
pub static ARTICLE_DATA: LazyLock<Validator> =
    LazyLock::new(|| Validator::compile(article_data_shape()));

/// Article body plus the loader-assigned `slug`.
pub static ARTICLE: LazyLock<Validator> = LazyLock::new(|| {
    Validator::compile(Shape::intersect(
        article_data_shape(),
        Shape::Object(vec![Field::required("slug", Shape::String)]),
    ))
});

/// Site-wide metadata record.
pub static METADATA: LazyLock<Validator> = LazyLock::new(|| Validator::compile(metadata_shape()));

/// Profile bio record.
pub static PROFILE: LazyLock<Validator> = LazyLock::new(|| Validator::compile(profile_shape()));

/// Resume record (experiences plus layout flag).
pub static RESUME: LazyLock<Validator> = LazyLock::new(|| Validator::compile(resume_shape()));

/// Collection of talk entries.
pub static TALKS: LazyLock<Validator> =
    LazyLock::new(|| Validator::compile(Shape::array(talk_shape())));
