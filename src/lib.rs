//! MediaForge MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the MediaForge asset and folder management API as callable tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **api**: The outbound HTTP adapter for the MediaForge API
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be called by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use mediaforge_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
