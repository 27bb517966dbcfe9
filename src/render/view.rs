//! View tree node types.
//!
//! The renderer's output: plain, serializable nodes carrying only what a
//! presentation layer needs to paint. No view node is mutated after
//! creation.

use serde::{Deserialize, Serialize};

/// Resolved horizontal alignment for a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// One item of a rendered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewListItem {
    /// `Some` in checklist mode (items without an authored state show
    /// unchecked), `None` in plain lists.
    pub checked: Option<bool>,
    pub children: Vec<ViewNode>,
}

/// One cell of a rendered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewCell {
    pub align: Alignment,
    /// Border below this cell; suppressed on the last row.
    pub border_bottom: bool,
    /// Border right of this cell; suppressed on the last column.
    pub border_right: bool,
    pub children: Vec<ViewNode>,
}

/// A single node of the rendered view tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViewNode {
    Document {
        children: Vec<ViewNode>,
    },
    Heading {
        /// 1-6, mapped by the presentation layer to a size/weight tier.
        level: u8,
        children: Vec<ViewNode>,
    },
    Paragraph {
        children: Vec<ViewNode>,
    },
    Text {
        value: String,
    },
    Strong {
        children: Vec<ViewNode>,
    },
    Emphasis {
        children: Vec<ViewNode>,
    },
    Strikethrough {
        children: Vec<ViewNode>,
    },
    Link {
        url: String,
        children: Vec<ViewNode>,
    },
    Image {
        src: String,
        alt: String,
        /// Caption rendered below the image, from the source title.
        caption: Option<String>,
    },
    /// Raw code text and language tag, verbatim for external highlighting.
    CodeBlock {
        lang: String,
        value: String,
    },
    InlineCode {
        value: String,
    },
    /// Raw expression for an external math typesetter.
    MathBlock {
        formula: String,
    },
    MathInline {
        formula: String,
    },
    List {
        ordered: bool,
        /// All-or-nothing: set when any source item carried a checked state.
        checklist: bool,
        items: Vec<ViewListItem>,
    },
    Table {
        /// Column count, derived from the first row.
        columns: usize,
        rows: Vec<Vec<ViewCell>>,
    },
    Blockquote {
        children: Vec<ViewNode>,
    },
    /// Superscript link to the matching definition anchor.
    FootnoteReference {
        identifier: String,
        label: String,
    },
    /// Anchored block labeled by its identifier.
    FootnoteDefinition {
        identifier: String,
        label: String,
        children: Vec<ViewNode>,
    },
    Rule,
    HardBreak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_tree_round_trips_through_json() {
        let tree = ViewNode::Document {
            children: vec![
                ViewNode::Heading {
                    level: 1,
                    children: vec![ViewNode::Text {
                        value: "Title".into(),
                    }],
                },
                ViewNode::CodeBlock {
                    lang: "rust".into(),
                    value: "fn main() {}".into(),
                },
            ],
        };
        let json = serde_json::to_string(&tree).unwrap();
        let back: ViewNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_kind_tags_are_camel_case() {
        let json = serde_json::to_value(ViewNode::HardBreak).unwrap();
        assert_eq!(json["kind"], "hardBreak");
        let json = serde_json::to_value(ViewNode::MathBlock {
            formula: "x".into(),
        })
        .unwrap();
        assert_eq!(json["kind"], "mathBlock");
    }
}
