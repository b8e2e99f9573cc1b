//! Parser for the bike export dialect (attribute-tagged XHTML).
//!
//! Bike exports namespaced XHTML; roxmltree hands us the tree with
//! namespaces already resolved, so matching on local element names is
//! enough. Two details matter here:
//!
//! - Text placement follows the lxml element model the original tooling
//!   relied on: text before the first child element belongs to the parent
//!   (`text`), text after a child element belongs to that child (`tail`).
//! - Whitespace-only text nodes are formatting from pretty-printed exports
//!   and are dropped.
//!
//! `<head>` is skipped; every other unrecognized element is an error.

use crate::error::FormatError;
use crate::formats::bike::nodes::{OutlineNode, OutlineTag, RowType};
use roxmltree::{Node, NodeType};

/// Parse bike source into an outline tree rooted at `<html>`.
pub fn parse_outline(source: &str) -> Result<OutlineNode, FormatError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| FormatError::ParseError(format!("XML parsing error: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() != "html" {
        return Err(FormatError::ParseError(format!(
            "Root element is <{}>, expected <html>",
            root.tag_name().name()
        )));
    }

    parse_element(root)
}

fn parse_element(node: Node) -> Result<OutlineNode, FormatError> {
    let tag = OutlineTag::from_element(node.tag_name().name())?;
    let mut outline = OutlineNode::new(tag);

    for attr in node.attributes() {
        match attr.name() {
            "id" => outline.attrs.id = Some(attr.value().to_string()),
            "data-type" => outline.attrs.row_type = RowType::from_attribute(attr.value())?,
            "data-done" => outline.attrs.done = Some(attr.value().to_string()),
            "href" => outline.attrs.href = Some(attr.value().to_string()),
            other => outline
                .attrs
                .extra
                .push((other.to_string(), attr.value().to_string())),
        }
    }

    for child in node.children() {
        match child.node_type() {
            NodeType::Text => {
                let text = child.text().unwrap_or("");
                if text.trim().is_empty() {
                    continue;
                }
                match outline.children.last_mut() {
                    Some(previous) => append_text(&mut previous.tail, text),
                    None => append_text(&mut outline.text, text),
                }
            }
            NodeType::Element => {
                if child.tag_name().name() == "head" {
                    continue;
                }
                outline.children.push(parse_element(child)?);
            }
            _ => {}
        }
    }

    Ok(outline)
}

fn append_text(slot: &mut Option<String>, text: &str) {
    match slot {
        Some(existing) => existing.push_str(text),
        None => *slot = Some(text.to_string()),
    }
}
