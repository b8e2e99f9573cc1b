//! Format conversion for Bike outline documents
//!
//!     This crate converts documents exported by the Bike outliner (an
//!     attribute-tagged XHTML nested-list dialect) into a structured-document
//!     IR, and exposes that IR through a uniform format interface for handoff
//!     to external converters.
//!
//! Architecture
//!
//!     The outline model is uniform: every row is a list item whose semantic
//!     role (heading, quote, task, code, ...) lives in an attribute. The IR
//!     (./ir/nodes.rs) is a conventional document tree: headings with levels,
//!     bullet and ordered lists, block quotes, code blocks, inline spans.
//!     Getting from one to the other is the interesting part, and it lives in
//!     ./formats/bike/to_ir.rs with its supporting algorithms in ./common:
//!     run clustering (adjacent same-type rows merge into one list or quote
//!     container), heading-level threading, and a final pass merging adjacent
//!     code blocks.
//!
//!     This is a pure lib: no shell assumptions, no std print, no env vars.
//!     Rendering the IR to Markdown, HTML etc. is deliberately left to
//!     external converters; the json format is the interchange surface they
//!     consume.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── bike                # outline model, XML parser, IR transformer
//!     │   ├── json                # IR interchange (serde round-trip)
//!     │   └── treeviz             # visual tree rendering for debugging
//!     ├── common                  # format-agnostic algorithms
//!     ├── ir                      # Intermediate Representation
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # discovery shim (rust does not discover
//!     │                             tests in subdirectories by default)
//!     ├── common/                 # algorithm and IR tests
//!     ├── bike/                   # import tests
//!     └── fixtures/               # .bike documents
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait;
//!     formats have parse() and/or serialize() methods, a name and file
//!     extensions. See the trait def [./format.rs]. The registry
//!     (./registry.rs) handles discovery and extension detection.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;

use formats::bike::nodes::OutlineNode;

/// Converts an outline tree to the Intermediate Representation (IR).
///
/// Runs the full pipeline: the tree transformer followed by the
/// adjacent-code-block merge pass. The input tree is read-only; each call
/// is independent and side-effect-free.
pub fn to_ir(outline: &OutlineNode) -> Result<ir::nodes::Document, FormatError> {
    to_ir_with_metadata(outline, Vec::new())
}

/// Like [`to_ir`], attaching document metadata supplied by the caller.
pub fn to_ir_with_metadata(
    outline: &OutlineNode,
    metadata: Vec<(String, String)>,
) -> Result<ir::nodes::Document, FormatError> {
    let mut doc = formats::bike::to_ir::to_document(outline, metadata)?;
    common::codeblocks::merge_code_blocks(&mut doc);
    Ok(doc)
}
