//! Treeviz formatter for IR nodes
//!
//! Treeviz is a visual representation of the document tree, helpful when
//! debugging a conversion. It encodes node structure as indentation, with
//! 2 white spaces per level of nesting:
//!
//! `<indentation>(per level) <icon><space><label>` (truncated to 30 characters)
//!
//! Example:
//!
//! ```text
//! ⧉ Document (0 metadata, 1 items)
//!   Ψ xDzYt-_1
//!     § h1 Projects
//!     ☰ 2 items
//!       • 1 items
//!         ¶ ☐ write the report
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{DocNode, Document, Inline};

const LABEL_WIDTH: usize = 30;

fn icon(node: &DocNode) -> &'static str {
    match node {
        DocNode::Document(_) => "⧉",
        DocNode::Heading(_) => "§",
        DocNode::Paragraph(_) => "¶",
        DocNode::BlockQuote(_) => "❝",
        DocNode::BulletList(_) | DocNode::OrderedList(_) => "☰",
        DocNode::ListItem(_) => "•",
        DocNode::HorizontalRule => "─",
        DocNode::CodeBlock(_) => "𝒱",
        DocNode::Container(_) => "Ψ",
    }
}

fn label(node: &DocNode) -> String {
    match node {
        DocNode::Document(d) => {
            format!("Document ({} metadata, {} items)", d.metadata.len(), d.children.len())
        }
        DocNode::Heading(h) => format!("h{} {}", h.level, inline_text(&h.content)),
        DocNode::Paragraph(p) => inline_text(&p.content),
        DocNode::BlockQuote(q) => format!("{} items", q.children.len()),
        DocNode::BulletList(l) => format!("{} items", l.items.len()),
        DocNode::OrderedList(l) => format!("{} items (ordered)", l.items.len()),
        DocNode::ListItem(li) => format!("{} items", li.children.len()),
        DocNode::HorizontalRule => "rule".to_string(),
        DocNode::CodeBlock(c) => c.text.lines().next().unwrap_or("").to_string(),
        DocNode::Container(c) => c.id.clone(),
    }
}

/// Flatten inline content to plain text for display.
fn inline_text(content: &[Inline]) -> String {
    let mut out = String::new();
    for inline in content {
        match inline {
            Inline::Text(t) | Inline::Code(t) => out.push_str(t),
            Inline::Link { content, .. } | Inline::Span { content, .. } => {
                out.push_str(&inline_text(content))
            }
            Inline::Emph(content) | Inline::Strong(content) | Inline::Strikeout(content) => {
                out.push_str(&inline_text(content))
            }
            Inline::Note(_) => out.push_str("[note]"),
        }
    }
    out
}

fn truncate(label: &str) -> String {
    let mut chars = label.chars();
    let head: String = chars.by_ref().take(LABEL_WIDTH).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

fn format_node(node: &DocNode, depth: usize, output: &mut String) {
    output.push_str(&"  ".repeat(depth));
    output.push_str(icon(node));
    output.push(' ');
    output.push_str(&truncate(&label(node)));
    output.push('\n');

    let children: &[DocNode] = match node {
        DocNode::Document(d) => &d.children,
        DocNode::Container(c) => &c.children,
        DocNode::BlockQuote(q) => &q.children,
        DocNode::BulletList(l) | DocNode::OrderedList(l) => &l.items,
        DocNode::ListItem(li) => &li.children,
        DocNode::Heading(_)
        | DocNode::Paragraph(_)
        | DocNode::HorizontalRule
        | DocNode::CodeBlock(_) => &[],
    };
    for child in children {
        format_node(child, depth + 1, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "⧉ Document ({} metadata, {} items)\n",
        doc.metadata.len(),
        doc.children.len()
    ));
    for child in &doc.children {
        format_node(child, 1, &mut output);
    }
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
