//! Tool Registry - central catalog and dispatch for all tools.
//!
//! This module provides:
//! - The static catalog of tool descriptors returned on `tools/list`
//! - Name-based dispatch of tool invocations
//!
//! The catalog and the dispatch match are kept in lockstep; the tests below
//! fail if a tool is listed but not dispatched or dispatched but not listed.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::warn;

use super::definitions::{
    CreateFolderTool, DeleteAssetTool, ListAssetsTool, ListFoldersTool, RestoreFolderTool,
    TrashFolderTool, UpdateFolderTool, UploadAssetTool, error_result,
};
use super::error::ToolError;
use crate::api::ApiClient;

/// Tool registry - manages all available tools.
///
/// Holds the shared API client injected into every tool invocation. The
/// registry itself is stateless across calls.
#[derive(Clone)]
pub struct ToolRegistry {
    client: Arc<ApiClient>,
}

impl ToolRegistry {
    /// Create a new tool registry around the given API client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Get all tool names handled by `dispatch`.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            UploadAssetTool::NAME,
            ListAssetsTool::NAME,
            DeleteAssetTool::NAME,
            ListFoldersTool::NAME,
            CreateFolderTool::NAME,
            UpdateFolderTool::NAME,
            TrashFolderTool::NAME,
            RestoreFolderTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the advertised catalog.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            UploadAssetTool::to_tool(),
            ListAssetsTool::to_tool(),
            DeleteAssetTool::to_tool(),
            ListFoldersTool::to_tool(),
            CreateFolderTool::to_tool(),
            UpdateFolderTool::to_tool(),
            TrashFolderTool::to_tool(),
            RestoreFolderTool::to_tool(),
        ]
    }

    /// Dispatch a tool invocation to the appropriate handler.
    ///
    /// Every failure - an unrecognized name, malformed arguments, a local
    /// I/O error or an upstream HTTP error - comes back as an error-flagged
    /// result, never as an `Err` that could fault the protocol layer.
    pub async fn dispatch(&self, name: &str, arguments: Value) -> CallToolResult {
        let client = self.client.as_ref();
        match name {
            UploadAssetTool::NAME => UploadAssetTool::run(client, arguments).await,
            ListAssetsTool::NAME => ListAssetsTool::run(client, arguments).await,
            DeleteAssetTool::NAME => DeleteAssetTool::run(client, arguments).await,
            ListFoldersTool::NAME => ListFoldersTool::run(client, arguments).await,
            CreateFolderTool::NAME => CreateFolderTool::run(client, arguments).await,
            UpdateFolderTool::NAME => UpdateFolderTool::run(client, arguments).await,
            TrashFolderTool::NAME => TrashFolderTool::run(client, arguments).await,
            RestoreFolderTool::NAME => RestoreFolderTool::run(client, arguments).await,
            _ => {
                warn!("Unrecognized tool requested: {}", name);
                error_result(&ToolError::unrecognized(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use serde_json::json;

    fn test_registry() -> ToolRegistry {
        // Unroutable base URLs: these tests must never hit the network.
        ToolRegistry::new(Arc::new(ApiClient::new(&ApiConfig {
            api_key: "test-key".to_string(),
            api_base_url: "http://127.0.0.1:1/v1".to_string(),
            upload_base_url: "http://127.0.0.1:1/v1".to_string(),
        })))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"upload_asset"));
        assert!(names.contains(&"list_assets"));
        assert!(names.contains(&"delete_asset"));
        assert!(names.contains(&"list_folders"));
        assert!(names.contains(&"create_folder"));
        assert!(names.contains(&"update_folder"));
        assert!(names.contains(&"trash_folder"));
        assert!(names.contains(&"restore_folder"));
    }

    #[test]
    fn test_catalog_matches_dispatch_names() {
        let names = ToolRegistry::tool_names();
        let catalog: Vec<_> = ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();

        assert_eq!(names.len(), catalog.len());
        for name in names {
            assert!(catalog.iter().any(|c| c.as_str() == name), "missing {name}");
        }
    }

    #[test]
    fn test_catalog_has_descriptions_and_schemas() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert!(
                !tool.input_schema.is_empty(),
                "{} has an empty input schema",
                tool.name
            );
        }
    }

    #[tokio::test]
    async fn test_every_listed_tool_is_dispatchable() {
        let registry = test_registry();
        for name in ToolRegistry::tool_names() {
            let result = registry.dispatch(name, json!({})).await;
            let text = match &result.content[0].raw {
                rmcp::model::RawContent::Text(text) => text.text.clone(),
                other => panic!("expected text content, got {other:?}"),
            };
            // Invalid arguments or a transport failure are acceptable here;
            // an unrecognized-name error means a listed tool has no dispatch arm.
            assert!(
                !text.contains("Unrecognized tool"),
                "{name} is listed but not dispatched: {text}"
            );
        }
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool_is_flagged() {
        let registry = test_registry();
        let result = registry.dispatch("definitely_not_a_tool", json!({})).await;
        assert!(result.is_error.unwrap_or(false));
    }

    #[tokio::test]
    async fn test_dispatch_invalid_arguments_is_flagged() {
        let registry = test_registry();
        // delete_asset requires asset_id; parsing fails before any HTTP call.
        let result = registry.dispatch("delete_asset", json!({})).await;
        assert!(result.is_error.unwrap_or(false));
    }

    #[tokio::test]
    async fn test_dispatch_limit_out_of_bounds_is_flagged() {
        let registry = test_registry();
        let result = registry.dispatch("list_assets", json!({"limit": 101})).await;
        assert!(result.is_error.unwrap_or(false));
    }
}
