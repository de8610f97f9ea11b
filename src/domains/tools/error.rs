//! Tool-specific error types.

use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur during tool invocations.
///
/// Every variant is rendered into an error-flagged tool response at the
/// dispatch boundary; none of them escapes as a protocol fault.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not in the catalog.
    #[error("Unrecognized tool: {0}")]
    Unrecognized(String),

    /// The arguments did not match the tool's parameter shape.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A local I/O failure (e.g. reading the file to upload).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed while building a request or response.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "unrecognized tool" error.
    pub fn unrecognized(name: impl Into<String>) -> Self {
        Self::Unrecognized(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
