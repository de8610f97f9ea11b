//! API adapter error types.

use thiserror::Error;

/// Errors raised by calls to the MediaForge API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The remote service answered with a non-success status code.
    /// Carries the status and the raw response body.
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// A network-level failure (DNS, connection refused, timeout) or a
    /// failure decoding the response body as JSON.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
