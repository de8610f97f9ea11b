//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output; stderr is reserved for
//! logging.

mod stdio;

pub use stdio::StdioTransport;

use thiserror::Error;

/// A specialized Result type for transport operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Errors that can occur in the transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport failed to initialize.
    #[error("Transport initialization failed: {0}")]
    Init(String),

    /// The running service failed.
    #[error("Transport service error: {0}")]
    ServiceError(String),
}

impl TransportError {
    /// Create a new initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }
}
