//! Markdown AST to view tree rendering.
//!
//! [`render`] is a pure, total function over the AST: the same tree always
//! produces the same view tree, and node kinds outside the recognized set
//! are silently omitted so future AST extensions degrade gracefully instead
//! of erroring. The only cross-node decision is the list-level checklist
//! switch, a one-level look-ahead across a list's own items.

pub mod ast;
pub mod markdown;
pub mod view;

pub use ast::{CellAlign, MdNode};
pub use markdown::{MarkdownOptions, from_markdown};
pub use view::{Alignment, ViewCell, ViewListItem, ViewNode};

/// Render a markdown AST into a view tree.
///
/// Accepts a root node; any other node is treated as a one-block document.
pub fn render(root: &MdNode) -> ViewNode {
    let children = match root {
        MdNode::Root { children } => render_blocks(children),
        other => render_blocks(std::slice::from_ref(other)),
    };
    ViewNode::Document { children }
}

fn render_blocks(nodes: &[MdNode]) -> Vec<ViewNode> {
    nodes.iter().filter_map(render_block).collect()
}

/// Render one top-level block. Unrecognized kinds render to nothing.
fn render_block(node: &MdNode) -> Option<ViewNode> {
    match node {
        MdNode::Paragraph { children } => Some(ViewNode::Paragraph {
            children: render_inline_all(children),
        }),
        MdNode::Heading { depth, children } => Some(ViewNode::Heading {
            level: (*depth).clamp(1, 6),
            children: render_inline_all(children),
        }),
        MdNode::Code { lang, value } => Some(ViewNode::CodeBlock {
            lang: lang.clone().unwrap_or_else(|| "text".to_string()),
            value: value.clone(),
        }),
        MdNode::Math { value } => Some(ViewNode::MathBlock {
            formula: value.clone(),
        }),
        MdNode::List { ordered, children } => Some(render_list(*ordered, children)),
        MdNode::Table { align, children } => Some(render_table(align, children)),
        MdNode::Blockquote { children } => Some(ViewNode::Blockquote {
            children: children
                .iter()
                .filter_map(|child| match child {
                    MdNode::Paragraph { children } => Some(ViewNode::Paragraph {
                        children: render_inline_all(children),
                    }),
                    _ => None,
                })
                .collect(),
        }),
        MdNode::FootnoteDefinition {
            identifier,
            label,
            children,
        } => Some(ViewNode::FootnoteDefinition {
            identifier: identifier.clone(),
            label: label.clone(),
            // Definition bodies flatten to their inline content
            children: children
                .iter()
                .flat_map(|child| match child {
                    MdNode::Paragraph { children } => render_inline_all(children),
                    _ => Vec::new(),
                })
                .collect(),
        }),
        MdNode::ThematicBreak => Some(ViewNode::Rule),
        _ => None,
    }
}

/// Checklist mode is all-or-nothing: one authored checkbox switches the
/// whole list, and items without a state show as unchecked.
fn render_list(ordered: bool, children: &[MdNode]) -> ViewNode {
    let checklist = children
        .iter()
        .any(|item| matches!(item, MdNode::ListItem { checked: Some(_), .. }));

    let items = children
        .iter()
        .filter_map(|item| match item {
            MdNode::ListItem { checked, children } => Some(ViewListItem {
                checked: checklist.then(|| checked.unwrap_or(false)),
                children: children
                    .iter()
                    .flat_map(|child| match child {
                        // Loose items wrap content in paragraphs; flatten
                        MdNode::Paragraph { children } => render_inline_all(children),
                        // Tight items carry inline nodes directly
                        other => render_inline(other).into_iter().collect(),
                    })
                    .collect(),
            }),
            _ => None,
        })
        .collect();

    ViewNode::List {
        ordered,
        checklist,
        items,
    }
}

fn render_table(align: &[CellAlign], children: &[MdNode]) -> ViewNode {
    let rows: Vec<&Vec<MdNode>> = children
        .iter()
        .filter_map(|row| match row {
            MdNode::TableRow { children } => Some(children),
            _ => None,
        })
        .collect();

    // Column count comes from the first row
    let columns = rows.first().map_or(0, |cells| cells.len());
    let row_count = rows.len();

    let view_rows = rows
        .iter()
        .enumerate()
        .map(|(row_index, cells)| {
            let cell_count = cells.len();
            cells
                .iter()
                .enumerate()
                .filter_map(|(col, cell)| match cell {
                    MdNode::TableCell { children } => Some(ViewCell {
                        align: resolve_align(align.get(col)),
                        border_bottom: row_index + 1 < row_count,
                        border_right: col + 1 < cell_count,
                        children: render_inline_all(children),
                    }),
                    _ => None,
                })
                .collect()
        })
        .collect();

    ViewNode::Table {
        columns,
        rows: view_rows,
    }
}

/// Missing or undeclared alignment defaults to left.
fn resolve_align(align: Option<&CellAlign>) -> Alignment {
    match align {
        Some(CellAlign::Center) => Alignment::Center,
        Some(CellAlign::Right) => Alignment::Right,
        Some(CellAlign::Left) | Some(CellAlign::None) | None => Alignment::Left,
    }
}

fn render_inline_all(nodes: &[MdNode]) -> Vec<ViewNode> {
    nodes.iter().filter_map(render_inline).collect()
}

/// Render one inline node. Unrecognized kinds render to nothing.
fn render_inline(node: &MdNode) -> Option<ViewNode> {
    match node {
        MdNode::Text { value } => Some(ViewNode::Text {
            value: value.clone(),
        }),
        MdNode::Strong { children } => Some(ViewNode::Strong {
            children: render_inline_all(children),
        }),
        MdNode::Emphasis { children } => Some(ViewNode::Emphasis {
            children: render_inline_all(children),
        }),
        MdNode::Delete { children } => Some(ViewNode::Strikethrough {
            children: render_inline_all(children),
        }),
        MdNode::Link {
            url,
            title,
            children,
        } => {
            // Authoring convention: a link whose text is literally "image"
            // is an image reference, with the title as caption
            let text = direct_text(children);
            if text.eq_ignore_ascii_case("image") {
                Some(ViewNode::Image {
                    src: url.clone(),
                    alt: text,
                    caption: title.clone(),
                })
            } else {
                Some(ViewNode::Link {
                    url: url.clone(),
                    children: render_inline_all(children),
                })
            }
        }
        MdNode::Image { url, title, alt } => Some(ViewNode::Image {
            src: url.clone(),
            alt: alt.clone(),
            caption: title.clone(),
        }),
        MdNode::InlineCode { value } => Some(ViewNode::InlineCode {
            value: value.clone(),
        }),
        MdNode::InlineMath { value } => Some(ViewNode::MathInline {
            formula: value.clone(),
        }),
        MdNode::FootnoteReference { identifier, label } => Some(ViewNode::FootnoteReference {
            identifier: identifier.clone(),
            label: label.clone(),
        }),
        MdNode::Break => Some(ViewNode::HardBreak),
        _ => None,
    }
}

/// Concatenation of the node list's *direct* text children only, matching
/// the image-as-link detection rule.
fn direct_text(children: &[MdNode]) -> String {
    children
        .iter()
        .map(|child| match child {
            MdNode::Text { value } => value.as_str(),
            _ => "",
        })
        .collect()
}
