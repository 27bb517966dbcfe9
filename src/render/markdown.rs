//! Markdown to AST conversion using pulldown-cmark.

use pulldown_cmark::{Alignment, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use super::ast::{CellAlign, MdNode};

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable `$...$` / `$$...$$` math extension
    pub math: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            math: true,
        }
    }

    /// Convert to pulldown-cmark Options
    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.math {
            opts.insert(Options::ENABLE_MATH);
        }
        opts
    }
}

/// Event-stack builder from pulldown-cmark events to [`MdNode`]
struct AstBuilder {
    /// Stack of open container nodes (for nested structures)
    stack: Vec<MdNode>,
    /// Root children (collected when stack is empty)
    root_children: Vec<MdNode>,
}

impl AstBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root_children: Vec::new(),
        }
    }

    /// Convert a markdown string to an AST root node
    fn convert(mut self, markdown: &str, options: &MarkdownOptions) -> MdNode {
        let parser = Parser::new_ext(markdown, options.to_pulldown_options());

        for event in parser {
            self.handle_event(event);
        }

        MdNode::Root {
            children: self.root_children,
        }
    }

    /// Handle a single pulldown-cmark event
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.stack.push(open_node(tag)),
            Event::End(_) => self.end_tag(),
            Event::Text(text) => self.add_text(text.as_ref()),
            Event::Code(code) => self.add_node(MdNode::InlineCode {
                value: code.to_string(),
            }),
            Event::Html(html) | Event::InlineHtml(html) => self.add_node(MdNode::Html {
                value: html.to_string(),
            }),
            Event::SoftBreak => self.add_text("\n"),
            Event::HardBreak => self.add_node(MdNode::Break),
            Event::Rule => self.add_node(MdNode::ThematicBreak),
            Event::FootnoteReference(name) => self.add_node(MdNode::FootnoteReference {
                identifier: name.to_string(),
                label: name.to_string(),
            }),
            Event::TaskListMarker(checked) => self.set_task_marker(checked),
            Event::InlineMath(math) => self.add_node(MdNode::InlineMath {
                value: math.to_string(),
            }),
            Event::DisplayMath(math) => self.add_node(MdNode::Math {
                value: math.to_string(),
            }),
        }
    }

    /// Close the current container and attach it to its parent
    fn end_tag(&mut self) {
        if let Some(mut node) = self.stack.pop() {
            // Unmodeled containers surface as html nodes; drop empty shells
            if matches!(&node, MdNode::Html { value } if value.is_empty()) {
                return;
            }
            // Display math arrives as an inline event; a paragraph holding
            // nothing but display math is the block form
            if let MdNode::Paragraph { children } = &mut node
                && matches!(children.as_slice(), [MdNode::Math { .. }])
                && let Some(math) = children.pop()
            {
                self.add_node(math);
                return;
            }
            self.add_node(node);
        }
    }

    /// Add text content to the current context
    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // Code blocks and image alt text collect raw text instead of
        // child nodes
        if let Some(top) = self.stack.last_mut() {
            match top {
                MdNode::Code { value, .. } | MdNode::Html { value } => {
                    value.push_str(text);
                    return;
                }
                MdNode::Image { alt, .. } => {
                    alt.push_str(text);
                    return;
                }
                _ => {}
            }
        }
        self.add_node(MdNode::Text {
            value: text.to_string(),
        });
    }

    /// Record a checkbox state on the nearest open list item
    fn set_task_marker(&mut self, is_checked: bool) {
        for node in self.stack.iter_mut().rev() {
            if let MdNode::ListItem { checked, .. } = node {
                *checked = Some(is_checked);
                return;
            }
        }
    }

    /// Add a node to the current context (top of stack or root)
    fn add_node(&mut self, node: MdNode) {
        match self.stack.last_mut() {
            Some(parent) => push_child(parent, node),
            None => self.root_children.push(node),
        }
    }
}

/// Open an AST container for a pulldown-cmark start tag
fn open_node(tag: Tag) -> MdNode {
    match tag {
        Tag::Paragraph => MdNode::Paragraph { children: vec![] },
        Tag::Heading { level, .. } => MdNode::Heading {
            depth: heading_depth(level),
            children: vec![],
        },
        Tag::BlockQuote(_) => MdNode::Blockquote { children: vec![] },
        Tag::CodeBlock(kind) => {
            let lang = match kind {
                CodeBlockKind::Indented => None,
                CodeBlockKind::Fenced(lang) if lang.is_empty() => None,
                CodeBlockKind::Fenced(lang) => Some(lang.to_string()),
            };
            MdNode::Code {
                lang,
                value: String::new(),
            }
        }
        Tag::List(start) => MdNode::List {
            ordered: start.is_some(),
            children: vec![],
        },
        Tag::Item => MdNode::ListItem {
            checked: None,
            children: vec![],
        },
        Tag::FootnoteDefinition(name) => MdNode::FootnoteDefinition {
            identifier: name.to_string(),
            label: name.to_string(),
            children: vec![],
        },
        Tag::Table(alignments) => MdNode::Table {
            align: alignments.iter().map(cell_align).collect(),
            children: vec![],
        },
        // The header is just the first row of the AST table
        Tag::TableHead | Tag::TableRow => MdNode::TableRow { children: vec![] },
        Tag::TableCell => MdNode::TableCell { children: vec![] },
        Tag::Emphasis => MdNode::Emphasis { children: vec![] },
        Tag::Strong => MdNode::Strong { children: vec![] },
        Tag::Strikethrough => MdNode::Delete { children: vec![] },
        Tag::Link {
            dest_url, title, ..
        } => MdNode::Link {
            url: dest_url.to_string(),
            title: non_empty(title.as_ref()),
            children: vec![],
        },
        Tag::Image {
            dest_url, title, ..
        } => MdNode::Image {
            url: dest_url.to_string(),
            title: non_empty(title.as_ref()),
            alt: String::new(),
        },
        // Everything else (raw HTML blocks, metadata, definition lists,
        // sub/superscript) collapses into an inert html shell
        _ => MdNode::Html {
            value: String::new(),
        },
    }
}

/// Attach a finished child to its parent container
fn push_child(parent: &mut MdNode, child: MdNode) {
    match parent {
        MdNode::Root { children }
        | MdNode::Paragraph { children }
        | MdNode::Heading { children, .. }
        | MdNode::Strong { children }
        | MdNode::Emphasis { children }
        | MdNode::Delete { children }
        | MdNode::Link { children, .. }
        | MdNode::List { children, .. }
        | MdNode::ListItem { children, .. }
        | MdNode::Table { children, .. }
        | MdNode::TableRow { children }
        | MdNode::TableCell { children }
        | MdNode::Blockquote { children }
        | MdNode::FootnoteDefinition { children, .. } => children.push(child),
        // Text-collecting containers keep only the child's plain text
        MdNode::Code { value, .. } | MdNode::Html { value } => value.push_str(&plain_text(&child)),
        MdNode::Image { alt, .. } => alt.push_str(&plain_text(&child)),
        // Leaves cannot hold children; drop
        _ => {}
    }
}

/// Concatenated text content of a node's subtree
fn plain_text(node: &MdNode) -> String {
    match node {
        MdNode::Text { value } | MdNode::InlineCode { value } | MdNode::Html { value } => {
            value.clone()
        }
        MdNode::Strong { children }
        | MdNode::Emphasis { children }
        | MdNode::Delete { children }
        | MdNode::Link { children, .. } => children.iter().map(plain_text).collect(),
        _ => String::new(),
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn cell_align(alignment: &Alignment) -> CellAlign {
    match alignment {
        Alignment::None => CellAlign::None,
        Alignment::Left => CellAlign::Left,
        Alignment::Center => CellAlign::Center,
        Alignment::Right => CellAlign::Right,
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Parse a markdown string into an AST root node
pub fn from_markdown(markdown: &str, options: &MarkdownOptions) -> MdNode {
    AstBuilder::new().convert(markdown, options)
}
