//! Error types for format operations

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested operation
    NotSupported(String),
    /// An outline element outside the recognized tag set
    UnknownTag(String),
    /// A row `data-type` outside the recognized set
    UnknownRowType(String),
    /// A required attribute was absent (e.g. a link without `href`)
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },
    /// Identifier generation asked for a zero-length id
    InvalidIdLength(usize),
    /// Unique-identifier generation ran out of retries
    IdSpaceExhausted { tries: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::UnknownTag(tag) => write!(f, "Unknown outline tag <{tag}>"),
            FormatError::UnknownRowType(value) => write!(f, "Unknown row data-type '{value}'"),
            FormatError::MissingAttribute { tag, attribute } => {
                write!(f, "<{tag}> element is missing its '{attribute}' attribute")
            }
            FormatError::InvalidIdLength(length) => {
                write!(f, "Id length must be at least 1, got {length}")
            }
            FormatError::IdSpaceExhausted { tries } => {
                write!(f, "Could not generate a unique id in {tries} tries")
            }
        }
    }
}

impl std::error::Error for FormatError {}
