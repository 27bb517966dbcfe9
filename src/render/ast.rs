//! Markdown AST node types (mdast-flavored).
//!
//! The AST is the renderer's read-only input. It is normally built from a
//! markdown source via [`crate::render::markdown::from_markdown`], but it is
//! plain data: tests and embedders may construct it directly, and it
//! round-trips through JSON with mdast-style `type` tags.

use serde::{Deserialize, Serialize};

/// Per-column table alignment as declared in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    /// No explicit alignment in the delimiter row.
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// A single markdown AST node.
///
/// Closed tagged union: the renderer matches on it exhaustively, with a
/// default arm that drops kinds it does not present (`html` today). List
/// items, table rows and table cells are nodes of their own, as in mdast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MdNode {
    Root {
        children: Vec<MdNode>,
    },
    Paragraph {
        children: Vec<MdNode>,
    },
    Heading {
        /// 1-6.
        depth: u8,
        children: Vec<MdNode>,
    },
    Text {
        value: String,
    },
    Strong {
        children: Vec<MdNode>,
    },
    Emphasis {
        children: Vec<MdNode>,
    },
    Delete {
        children: Vec<MdNode>,
    },
    Link {
        url: String,
        #[serde(default)]
        title: Option<String>,
        children: Vec<MdNode>,
    },
    Image {
        url: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        alt: String,
    },
    InlineCode {
        value: String,
    },
    InlineMath {
        value: String,
    },
    /// Block math.
    Math {
        value: String,
    },
    /// Fenced or indented code block.
    Code {
        #[serde(default)]
        lang: Option<String>,
        value: String,
    },
    List {
        ordered: bool,
        children: Vec<MdNode>,
    },
    ListItem {
        /// Tri-state: absent for plain items, true/false for checkboxes.
        #[serde(default)]
        checked: Option<bool>,
        children: Vec<MdNode>,
    },
    Table {
        #[serde(default)]
        align: Vec<CellAlign>,
        children: Vec<MdNode>,
    },
    TableRow {
        children: Vec<MdNode>,
    },
    TableCell {
        children: Vec<MdNode>,
    },
    Blockquote {
        children: Vec<MdNode>,
    },
    FootnoteReference {
        identifier: String,
        label: String,
    },
    FootnoteDefinition {
        identifier: String,
        label: String,
        children: Vec<MdNode>,
    },
    ThematicBreak,
    /// Hard line break.
    Break,
    /// Raw HTML, carried in the AST but never rendered.
    Html {
        value: String,
    },
}

impl MdNode {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn paragraph(children: Vec<MdNode>) -> Self {
        Self::Paragraph { children }
    }
}
