//! Format implementations.

pub mod bike;
pub mod json;
pub mod treeviz;
