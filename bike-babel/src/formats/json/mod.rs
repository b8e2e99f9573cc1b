//! JSON format implementation
//!
//! Strategy: serde round-trip of the IR
//!
//! This is the interchange boundary: external converters (pandoc-style
//! pipelines, custom renderers) take the document tree as JSON rather
//! than linking against this crate. Parsing and serialization are both
//! supported, and `parse(serialize(doc))` reproduces `doc` exactly.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for the JSON interchange representation
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON interchange representation of the document IR"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        serde_json::from_str(source)
            .map_err(|e| FormatError::ParseError(format!("JSON parsing error: {e}")))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
