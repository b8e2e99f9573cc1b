//! Outline tree → IR transformer.
//!
//! This is the heart of the crate. The outline is a uniform nested list
//! where structure lives in `data-type` attributes; the IR is a
//! conventional document tree. Converting between the two means
//! re-grouping rows, not just re-tagging them:
//!
//! - Runs of consecutive same-type rows become one container: three
//!   adjacent unordered rows are one bullet list, a run of quote rows is
//!   one block quote. Run detection is `common::cluster`; only
//!   cluster-eligible types ([`RowType::clusters`]) keep their runs,
//!   everything else converts row by row.
//! - Heading level is a running counter across the whole traversal: it
//!   starts at 1, each heading row bumps it (capped at 6), and the bumped
//!   value flows into every later row at any depth. The counter is
//!   threaded explicitly — row conversion takes a level and returns the
//!   next one.
//! - A row's nested list normally converts to flat siblings of the row's
//!   own output. List-type rows (ordered, unordered, task) are the
//!   exception: their sub-list nests inside the row's own list item.

use crate::common::cluster::{cluster_runs, keep_clusters};
use crate::error::FormatError;
use crate::formats::bike::nodes::{OutlineNode, OutlineTag, RowType};
use crate::ir::nodes::{
    BlockQuote, CodeBlock, Container, DocNode, Document, Heading, Inline, List, ListItem,
    Paragraph,
};

pub const BALLOT_BOX: char = '\u{2610}';
pub const BALLOT_BOX_WITH_X: char = '\u{2612}';

/// Convert an outline tree rooted at `<html>` into an IR document.
pub fn to_document(
    outline: &OutlineNode,
    metadata: Vec<(String, String)>,
) -> Result<Document, FormatError> {
    if outline.tag != OutlineTag::Html {
        return Err(FormatError::ParseError(format!(
            "Expected an <html> outline root, got {:?}",
            outline.tag
        )));
    }
    let body = outline
        .find_child(OutlineTag::Body)
        .ok_or_else(|| FormatError::ParseError("<html> has no <body> child".to_string()))?;

    let children = convert_body(body)?;
    Ok(Document { metadata, children })
}

fn convert_body(body: &OutlineNode) -> Result<Vec<DocNode>, FormatError> {
    let list = body
        .find_child(OutlineTag::List)
        .ok_or_else(|| FormatError::ParseError("<body> has no <ul> child".to_string()))?;
    let id = list
        .attrs
        .id
        .clone()
        .ok_or(FormatError::MissingAttribute {
            tag: "ul",
            attribute: "id",
        })?;

    let (children, _level) = convert_list(list, 1)?;
    Ok(vec![DocNode::Container(Container { id, children })])
}

/// Convert a `<ul>`: cluster its rows, then convert cluster by cluster.
///
/// Returns the produced nodes and the heading level to carry forward.
fn convert_list(list: &OutlineNode, level: u8) -> Result<(Vec<DocNode>, u8), FormatError> {
    let rows: Vec<&OutlineNode> = list
        .children
        .iter()
        .filter(|c| c.tag == OutlineTag::Item)
        .collect();

    let clusters = cluster_runs(rows, |row| row.attrs.row_type);
    let clusters = keep_clusters(clusters, |c| c[0].attrs.row_type.clusters());

    let mut level = level;
    let mut contents = Vec::new();

    for cluster in clusters {
        let row_type = cluster[0].attrs.row_type;
        match row_type {
            RowType::Unordered | RowType::Task | RowType::Ordered => {
                let mut items = Vec::new();
                for row in &cluster {
                    let (nodes, next) = convert_row(row, level)?;
                    level = next;
                    items.extend(nodes);
                }
                let list_node = List {
                    items: wrap_in_list_items(items),
                };
                contents.push(if row_type == RowType::Ordered {
                    DocNode::OrderedList(list_node)
                } else {
                    DocNode::BulletList(list_node)
                });
            }
            RowType::Quote => {
                let mut children = Vec::new();
                for row in &cluster {
                    let (nodes, next) = convert_row(row, level)?;
                    level = next;
                    children.extend(nodes);
                }
                contents.push(DocNode::BlockQuote(BlockQuote { children }));
            }
            _ => {
                // Exploded to singletons by the keep filter
                let (nodes, next) = convert_row(cluster[0], level)?;
                level = next;
                contents.extend(nodes);
            }
        }
    }

    Ok((contents, level))
}

/// Convert one `<li>` row, dispatching on its `data-type`.
fn convert_row(row: &OutlineNode, level: u8) -> Result<(Vec<DocNode>, u8), FormatError> {
    let paragraph = row
        .find_child(OutlineTag::Paragraph)
        .ok_or_else(|| FormatError::ParseError("<li> has no <p> child".to_string()))?;

    let row_type = row.attrs.row_type;
    let mut level = level;
    let mut contents: Vec<DocNode> = Vec::new();

    match row_type {
        RowType::Body => {
            contents.push(DocNode::Paragraph(Paragraph {
                content: rich_text(paragraph)?,
            }));
        }
        RowType::Heading => {
            contents.push(DocNode::Heading(Heading {
                level,
                content: rich_text(paragraph)?,
            }));
            if level < 6 {
                level += 1;
            }
        }
        RowType::Hr => {
            // The row's paragraph content is ignored
            contents.push(DocNode::HorizontalRule);
        }
        RowType::Note => {
            let note = Inline::Note(vec![DocNode::Paragraph(Paragraph {
                content: rich_text(paragraph)?,
            })]);
            contents.push(DocNode::Paragraph(Paragraph {
                content: vec![note],
            }));
        }
        RowType::Quote => {
            // Block-quoting is the enclosing cluster's job
            contents.push(DocNode::Paragraph(Paragraph {
                content: rich_text(paragraph)?,
            }));
        }
        RowType::Task => {
            let done = row.attrs.done.as_deref().is_some_and(|d| !d.is_empty());
            let marker = if done { BALLOT_BOX_WITH_X } else { BALLOT_BOX };
            let mut content = vec![Inline::Text(marker.to_string()), Inline::Text(" ".to_string())];
            content.extend(rich_text(paragraph)?);
            contents.push(DocNode::ListItem(ListItem {
                children: vec![DocNode::Paragraph(Paragraph { content })],
            }));
        }
        RowType::Code => {
            contents.push(DocNode::CodeBlock(CodeBlock {
                text: paragraph.text_content(true),
            }));
        }
        RowType::Ordered | RowType::Unordered => {
            // Normally absorbed into a cluster above; handled here so a
            // stray singleton still converts
            contents.push(DocNode::ListItem(ListItem {
                children: vec![DocNode::Paragraph(Paragraph {
                    content: rich_text(paragraph)?,
                })],
            }));
        }
    }

    if let Some(nested) = row.find_child(OutlineTag::List) {
        let (nodes, next) = convert_list(nested, level)?;
        level = next;
        match row_type {
            RowType::Ordered | RowType::Unordered | RowType::Task => {
                // The sub-list nests inside this row's own list item
                if let Some(DocNode::ListItem(item)) = contents.last_mut() {
                    item.children.extend(nodes);
                } else {
                    contents.extend(nodes);
                }
            }
            _ => contents.extend(nodes),
        }
    }

    Ok((contents, level))
}

/// Wrap every node that is not already a list item in one.
fn wrap_in_list_items(nodes: Vec<DocNode>) -> Vec<DocNode> {
    nodes
        .into_iter()
        .map(|node| match node {
            item @ DocNode::ListItem(_) => item,
            other => DocNode::ListItem(ListItem {
                children: vec![other],
            }),
        })
        .collect()
}

/// Map an inline subtree (a `<p>` and its markup) to IR inline content.
///
/// Emits the node's leading text, its children depth-first, then its tail,
/// and wraps the collected parts per tag. The tail rides inside the wrap,
/// matching the element model of the export.
pub fn rich_text(node: &OutlineNode) -> Result<Vec<Inline>, FormatError> {
    let mut parts = Vec::new();
    if let Some(text) = &node.text {
        parts.push(Inline::Text(text.clone()));
    }
    for child in &node.children {
        parts.extend(rich_text(child)?);
    }
    if let Some(tail) = &node.tail {
        parts.push(Inline::Text(tail.clone()));
    }

    match node.tag {
        // The transformer decides whether a paragraph's parts get a
        // Paragraph wrapper; here they flatten into the parent stream
        OutlineTag::Paragraph => Ok(parts),
        OutlineTag::Link => {
            let url = node.attrs.href.clone().ok_or(FormatError::MissingAttribute {
                tag: "a",
                attribute: "href",
            })?;
            Ok(vec![Inline::Link {
                url,
                content: parts,
            }])
        }
        OutlineTag::Span => Ok(vec![Inline::Span {
            attributes: node.attrs.to_pairs(),
            content: parts,
        }]),
        // Code spans carry no nested rich text; re-derive from flat text
        OutlineTag::Code => Ok(vec![Inline::Code(node.text_content(true))]),
        OutlineTag::Strong => Ok(vec![Inline::Strong(parts)]),
        OutlineTag::Emphasis => Ok(vec![Inline::Emph(parts)]),
        OutlineTag::Strikethrough => Ok(vec![Inline::Strikeout(parts)]),
        OutlineTag::Highlight => Ok(vec![Inline::Span {
            attributes: vec![("class".to_string(), "mark".to_string())],
            content: parts,
        }]),
        _ => Ok(vec![Inline::Text(node.text_content(true))]),
    }
}

/// Lossy fallback for contexts that cannot hold nested rich text: the
/// subtree's flattened text inside a single span carrying the node's
/// attributes.
pub fn flattened(node: &OutlineNode) -> Inline {
    Inline::Span {
        attributes: node.attrs.to_pairs(),
        content: vec![Inline::Text(node.text_content(true))],
    }
}
