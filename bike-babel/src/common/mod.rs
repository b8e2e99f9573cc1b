//! Format-agnostic algorithms shared by the conversion pipeline.

pub mod cluster;
pub mod codeblocks;
pub mod ident;
