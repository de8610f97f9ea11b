//! Common utilities shared across MediaForge tools.
//!
//! Argument parsing, limit validation, and response formatting helpers.

use rmcp::model::{CallToolResult, Content};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::super::error::ToolError;

/// Upper bound accepted for the `limit` parameter of list operations.
pub const MAX_LIST_LIMIT: u32 = 100;

/// Parse a tool's argument object into its typed parameter struct.
pub fn parse_params<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Check a list `limit` against the published 0-100 bound.
///
/// `Some(0)` is valid and must be forwarded as `limit=0`; only values above
/// the bound are rejected.
pub fn validate_limit(limit: Option<u32>) -> Result<Option<u32>, ToolError> {
    match limit {
        Some(value) if value > MAX_LIST_LIMIT => Err(ToolError::invalid_arguments(format!(
            "limit must be between 0 and {MAX_LIST_LIMIT}, got {value}"
        ))),
        other => Ok(other),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render a tool outcome into the response envelope.
///
/// Upstream JSON is pretty-printed into a text content block; any error
/// becomes an error-flagged response carrying the failure message.
pub fn render(result: Result<Value, ToolError>) -> CallToolResult {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => success_result(text),
            Err(e) => error_result(&format!("Failed to serialize response: {e}")),
        },
        Err(e) => error_result(&e.to_string()),
    }
}
