//! Intermediate Representation (IR) for converted documents.
//!
//! This module defines a format-agnostic representation of a structured
//! document, designed to facilitate conversion to various output formats
//! like Markdown, HTML, etc. via an external converter.

pub mod nodes;
