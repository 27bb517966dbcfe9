//! Typed content records.
//!
//! These are the typed counterparts of the shapes in
//! [`crate::schema::content`]. Records are deserialized only after they pass
//! schema validation, and are never mutated afterwards - an external editor
//! replaces them wholesale.

use serde::{Deserialize, Serialize};

/// A labeled external link used by articles and talks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLink {
    pub label: String,
    pub url: String,
}

/// Author-supplied article body, without the assigned slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
    /// Publication date (`YYYY-MM-DD`), the sort key for article listings.
    pub date: String,
    pub title: String,
    pub flag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ContentLink>>,
}

/// An article as produced by the loader: body plus batch-unique slug.
///
/// `slug` is assigned at load time and is not part of the authored content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    #[serde(flatten)]
    pub data: ArticleData,
}

/// Font families the site metadata may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontOption {
    MonaspaceNeon,
    Montserrat,
    Roboto,
    OpenSans,
    Lato,
    Poppins,
    Inter,
    Raleway,
    Nunito,
    PlayfairDisplay,
}

/// Top-level site sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Profile,
    Articles,
    Resume,
    Talks,
}

/// Site-wide metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub font: FontOption,
    pub section_order: Vec<SectionKind>,
}

/// Social platforms a profile may link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Linkedin,
    Github,
    Youtube,
    Twitch,
    Medium,
    Scholar,
    Huggingface,
    Facebook,
    Instagram,
    Mail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Profile bio record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
}

/// A single resume entry (work or education).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeExperience {
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    pub position: String,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub education: bool,
}

/// Resume record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub centered: bool,
    pub experiences: Vec<ResumeExperience>,
}

/// A single talk entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ContentLink>>,
}
