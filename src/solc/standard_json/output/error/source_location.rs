//!
//! The `solc --standard-json` output error source location.
//!

use serde::{Deserialize, Serialize};

///
/// The `solc --standard-json` output error source location.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    /// The start location.
    pub start: isize,
    /// The source file path.
    pub file: String,
    /// The end location.
    pub end: isize,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}..{}", self.file, self.start, self.end)
    }
}
