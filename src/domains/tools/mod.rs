//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool adapts one MediaForge API operation.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Static tool catalog and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, `execute()`, and `to_tool()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the tool to `tool_names()`, `get_all_tools()`, and `dispatch()`
//!    in `registry.rs` - the registry tests enforce that all three agree.

pub mod definitions;
mod error;
mod registry;

pub use error::ToolError;
pub use registry::ToolRegistry;
