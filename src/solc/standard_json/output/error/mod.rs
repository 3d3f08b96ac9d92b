//!
//! The `solc --standard-json` output error.
//!

pub mod source_location;

use serde::Deserialize;
use serde::Serialize;

use self::source_location::SourceLocation;

///
/// The `solc --standard-json` output error.
///
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The component type.
    #[serde(default)]
    pub component: String,
    /// The error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// The formatted error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_message: Option<String>,
    /// The non-formatted error message.
    pub message: String,
    /// The error severity.
    pub severity: String,
    /// The error location data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
    /// The error type.
    pub r#type: String,
}

impl Error {
    /// The severity which fails the compilation.
    pub const SEVERITY_ERROR: &'static str = "error";

    ///
    /// Whether the message fails the compilation.
    ///
    pub fn is_error(&self) -> bool {
        self.severity == Self::SEVERITY_ERROR
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.formatted_message.as_deref() {
            Some(formatted_message) => write!(f, "{}", formatted_message.trim_end()),
            None => match self.source_location.as_ref() {
                Some(location) => write!(f, "{}: {} --> {}", self.r#type, self.message, location),
                None => write!(f, "{}: {}", self.r#type, self.message),
            },
        }
    }
}
