//! Outbound HTTP adapter for the MediaForge API.
//!
//! This module wraps every call to the remote service: API-key header
//! injection, body encoding, and uniform error mapping on non-success
//! status codes.

mod client;
mod error;

pub use client::{API_KEY_HEADER, ApiClient, Payload};
pub use error::ApiError;
