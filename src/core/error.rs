//! Error types and handling for the MCP server.
//!
//! Invocation-time failures never leave the dispatch boundary as errors;
//! they are rendered into error-flagged tool responses (`ToolError`). The
//! only fallible path outside an invocation is startup configuration, which
//! is what this type covers.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort server startup.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors (e.g. a missing API key).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("MEDIAFORGE_API_KEY is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: MEDIAFORGE_API_KEY is not set"
        );
    }
}
