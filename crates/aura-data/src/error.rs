//! Error types for statement loading.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading statement or ratio payloads.
///
/// Lookups and value access never fail. Loading can, and so can evaluating
/// a frame of aligned series.
#[derive(Debug, Error)]
pub enum DataError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Payload parsed as JSON but had the wrong shape
    #[error("Unexpected {what} payload: expected {expected}, found {found}")]
    UnexpectedPayload {
        /// What was being loaded (e.g. "balance sheet")
        what: String,
        /// Shape that was expected
        expected: &'static str,
        /// Shape that was found
        found: &'static str,
    },
}

impl DataError {
    /// Describe the JSON type of a value for error messages.
    pub const fn json_kind(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}
