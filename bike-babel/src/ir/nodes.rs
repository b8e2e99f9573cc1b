//! Core data structures for the Intermediate Representation (IR).

use serde::{Deserialize, Serialize};

/// A universal, semantic representation of a document node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocNode {
    Document(Document),
    Heading(Heading),
    Paragraph(Paragraph),
    BlockQuote(BlockQuote),
    BulletList(List),
    OrderedList(List),
    ListItem(ListItem),
    HorizontalRule,
    CodeBlock(CodeBlock),
    Container(Container),
}

/// Represents the root of a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub metadata: Vec<(String, String)>,
    pub children: Vec<DocNode>,
}

/// Represents a heading with a specific level (1-6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub content: Vec<Inline>,
}

/// Represents a paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: Vec<Inline>,
}

/// Represents a quoted block of document content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    pub children: Vec<DocNode>,
}

/// Represents a list of items. Whether the list is bulleted or numbered
/// is carried by the enclosing [`DocNode`] variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub items: Vec<DocNode>,
}

/// Represents an item in a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub children: Vec<DocNode>,
}

/// Represents a block of verbatim text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub text: String,
}

/// A generic grouping node carrying the id of the outline list it wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub children: Vec<DocNode>,
}

/// Represents inline content, such as text, emphasis, links, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Link { url: String, content: Vec<Inline> },
    Span { attributes: Vec<(String, String)>, content: Vec<Inline> },
    Emph(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikeout(Vec<Inline>),
    Code(String),
    /// A footnote: inline position, block content.
    Note(Vec<DocNode>),
}
