//!
//! The `solc --standard-json` data representation.
//!

pub mod input;
pub mod output;
