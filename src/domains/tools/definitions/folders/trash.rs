//! Folder trash tool.
//!
//! Soft-deletes a folder. The operation is reversible via `restore_folder`;
//! no trashed state is tracked locally.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::super::super::error::ToolError;
use super::super::common::{parse_params, render};
use crate::api::ApiClient;

/// Parameters for the folder trash tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrashFolderParams {
    /// Identifier of the folder to move to trash.
    #[schemars(description = "Identifier of the folder to move to trash")]
    pub folder_id: String,
}

/// Folder trash tool implementation.
#[derive(Debug, Clone)]
pub struct TrashFolderTool;

impl TrashFolderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "trash_folder";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Move a MediaForge folder to trash. The folder can be brought back with restore_folder.";

    /// Run the tool against a raw argument object.
    pub async fn run(client: &ApiClient, arguments: Value) -> CallToolResult {
        render(Self::call(client, arguments).await)
    }

    async fn call(client: &ApiClient, arguments: Value) -> Result<Value, ToolError> {
        let params: TrashFolderParams = parse_params(arguments)?;
        Self::execute(client, params).await
    }

    /// Execute the tool logic.
    pub async fn execute(
        client: &ApiClient,
        params: TrashFolderParams,
    ) -> Result<Value, ToolError> {
        info!("Trashing folder {}", params.folder_id);
        let path = format!("/folders/{}/trash", params.folder_id);
        Ok(client.post(&path, None).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TrashFolderParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_require_folder_id() {
        let result: Result<TrashFolderParams, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
