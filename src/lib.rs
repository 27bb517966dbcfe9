//! Folio - content validation and markdown view-tree rendering for personal sites.
//!
//! The crate covers the non-visual core of a personal site:
//!
//! - [`schema`] checks untyped content records against declarative shapes
//!   before they are trusted.
//! - [`render`] turns a markdown AST into a framework-agnostic view tree.
//! - [`loader`] reads a directory of article records, assigns batch-unique
//!   slugs and returns them sorted by publication date.
//!
//! Presentation (layout, widgets, routing, styling) is a downstream consumer
//! of the validated records and view trees produced here.

pub mod loader;
pub mod logger;
pub mod record;
pub mod render;
pub mod schema;
pub mod slug;
pub mod utils;

pub use loader::load_articles;
pub use record::{Article, ArticleData, Metadata, Profile, Resume, Talk};
pub use render::{MarkdownOptions, MdNode, ViewNode, from_markdown, render};
