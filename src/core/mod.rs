//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational pieces used across the server:
//! configuration, error handling, the MCP server handler, and the transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
