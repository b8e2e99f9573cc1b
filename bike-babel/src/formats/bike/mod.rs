//! Bike outline format implementation
//!
//! Strategy: parse the export dialect into an outline tree, then run the
//! outline → IR transformer.
//!
//! # Overview
//!
//! Bike is a macOS outliner whose native file format is an
//! attribute-tagged XHTML nested list: every row is an `<li>` carrying a
//! `<p>` with its rich text, a `data-type` attribute with its semantic
//! role (heading, quote, task, code, ...) and optionally a nested `<ul>`.
//! Converting it to a conventional document tree is a re-grouping problem,
//! handled in [`to_ir`]; this module wires parser and transformer into the
//! [`Format`] interface.
//!
//! Import only: writing outline files back is the outliner's own job.

pub mod nodes;
pub mod parser;
pub mod to_ir;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;

/// Format implementation for bike outline documents
pub struct BikeFormat;

impl Format for BikeFormat {
    fn name(&self) -> &str {
        "bike"
    }

    fn description(&self) -> &str {
        "Bike outliner documents (attribute-tagged XHTML nested lists)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["bike"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        let outline = parser::parse_outline(source)?;
        crate::to_ir(&outline)
    }
}
