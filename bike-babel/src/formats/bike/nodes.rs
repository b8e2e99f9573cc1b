//! Outline document model for the bike dialect.
//!
//! A bike document is a nested list: the root `<html>` holds a `<body>`,
//! the body holds one `<ul>`, lists hold `<li>` rows, and every row carries
//! one `<p>` with its text plus, optionally, one nested `<ul>`. A row's
//! semantic role lives in its `data-type` attribute.
//!
//! The tags and row types are closed enums: the parser rejects anything
//! outside the recognized sets, so the transformer can match exhaustively.

use crate::common::ident::generate_unique_id;
use crate::error::FormatError;
use std::collections::HashSet;

/// Recognized outline element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineTag {
    Html,
    Body,
    List,
    Item,
    Paragraph,
    Link,
    Span,
    Code,
    Strong,
    Emphasis,
    Highlight,
    Strikethrough,
    /// A bare text leaf; never produced by the parser (text lives in
    /// `text`/`tail` fields) but usable when building trees by hand.
    Text,
}

impl OutlineTag {
    /// Map an element name from the bike export to its tag.
    pub fn from_element(name: &str) -> Result<Self, FormatError> {
        match name {
            "html" => Ok(OutlineTag::Html),
            "body" => Ok(OutlineTag::Body),
            "ul" => Ok(OutlineTag::List),
            "li" => Ok(OutlineTag::Item),
            "p" => Ok(OutlineTag::Paragraph),
            "a" => Ok(OutlineTag::Link),
            "span" => Ok(OutlineTag::Span),
            "code" => Ok(OutlineTag::Code),
            "strong" => Ok(OutlineTag::Strong),
            "em" => Ok(OutlineTag::Emphasis),
            "mark" => Ok(OutlineTag::Highlight),
            "s" => Ok(OutlineTag::Strikethrough),
            other => Err(FormatError::UnknownTag(other.to_string())),
        }
    }
}

/// The semantic role of a row, from its `data-type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowType {
    #[default]
    Body,
    Heading,
    Hr,
    Note,
    Quote,
    Task,
    Code,
    Ordered,
    Unordered,
}

impl RowType {
    pub fn from_attribute(value: &str) -> Result<Self, FormatError> {
        match value {
            "body" => Ok(RowType::Body),
            "heading" => Ok(RowType::Heading),
            "hr" => Ok(RowType::Hr),
            "note" => Ok(RowType::Note),
            "quote" => Ok(RowType::Quote),
            "task" => Ok(RowType::Task),
            "code" => Ok(RowType::Code),
            "ordered" => Ok(RowType::Ordered),
            "unordered" => Ok(RowType::Unordered),
            other => Err(FormatError::UnknownRowType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RowType::Body => "body",
            RowType::Heading => "heading",
            RowType::Hr => "hr",
            RowType::Note => "note",
            RowType::Quote => "quote",
            RowType::Task => "task",
            RowType::Code => "code",
            RowType::Ordered => "ordered",
            RowType::Unordered => "unordered",
        }
    }

    /// Whether same-type runs of this row type merge into one container
    /// (a list or block quote) instead of converting row by row.
    pub fn clusters(&self) -> bool {
        matches!(
            self,
            RowType::Ordered | RowType::Unordered | RowType::Quote | RowType::Task
        )
    }
}

/// The attributes the conversion actually reads, as a fixed record.
///
/// Anything else (span classes and the like) is preserved verbatim in
/// `extra` so spans survive the round trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowAttrs {
    pub id: Option<String>,
    pub row_type: RowType,
    /// `data-done`: presence (with a non-empty value) marks a task done.
    pub done: Option<String>,
    pub href: Option<String>,
    pub extra: Vec<(String, String)>,
}

impl RowAttrs {
    /// Reassemble the attribute list as key/value pairs, e.g. for spans.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = &self.id {
            pairs.push(("id".to_string(), id.clone()));
        }
        if self.row_type != RowType::Body {
            pairs.push(("data-type".to_string(), self.row_type.as_str().to_string()));
        }
        if let Some(done) = &self.done {
            pairs.push(("data-done".to_string(), done.clone()));
        }
        if let Some(href) = &self.href {
            pairs.push(("href".to_string(), href.clone()));
        }
        pairs.extend(self.extra.iter().cloned());
        pairs
    }
}

/// One node of the outline tree.
///
/// `text` is the node's leading text; `tail` is text that follows the node
/// in its parent's content stream. Child order is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineNode {
    pub tag: OutlineTag,
    pub attrs: RowAttrs,
    pub text: Option<String>,
    pub tail: Option<String>,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(tag: OutlineTag) -> Self {
        OutlineNode {
            tag,
            attrs: RowAttrs::default(),
            text: None,
            tail: None,
            children: Vec::new(),
        }
    }

    /// The flattened text of the whole subtree, in document order.
    ///
    /// Children always contribute their tails; `include_tail` controls
    /// whether this node's own tail is appended.
    pub fn text_content(&self, include_tail: bool) -> String {
        let mut parts = String::new();
        if let Some(text) = &self.text {
            parts.push_str(text);
        }
        for child in &self.children {
            parts.push_str(&child.text_content(true));
        }
        if include_tail {
            if let Some(tail) = &self.tail {
                parts.push_str(tail);
            }
        }
        parts
    }

    /// First child with the given tag.
    pub fn find_child(&self, tag: OutlineTag) -> Option<&OutlineNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Every task row in the subtree, in document order.
    pub fn task_rows(&self) -> Vec<&OutlineNode> {
        let mut rows = Vec::new();
        self.collect_task_rows(&mut rows);
        rows
    }

    fn collect_task_rows<'a>(&'a self, rows: &mut Vec<&'a OutlineNode>) {
        if self.tag == OutlineTag::Item && self.attrs.row_type == RowType::Task {
            rows.push(self);
        }
        for child in &self.children {
            child.collect_task_rows(rows);
        }
    }

    /// Every `id` attribute in the subtree, in document order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, ids: &mut Vec<String>) {
        if let Some(id) = &self.attrs.id {
            ids.push(id.clone());
        }
        for child in &self.children {
            child.collect_ids(ids);
        }
    }

    /// An empty outline skeleton: `html > body > ul`, the root list carrying
    /// a freshly generated id.
    pub fn empty_outline() -> Result<OutlineNode, FormatError> {
        let mut list = OutlineNode::new(OutlineTag::List);
        list.attrs.id = Some(generate_unique_id(8, &HashSet::new(), 100)?);

        let mut body = OutlineNode::new(OutlineTag::Body);
        body.children.push(list);

        let mut html = OutlineNode::new(OutlineTag::Html);
        html.children.push(body);
        Ok(html)
    }
}
