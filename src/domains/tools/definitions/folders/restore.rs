//! Folder restore tool.
//!
//! Undoes `trash_folder` by bringing a trashed folder back. A stand-alone
//! POST; nothing asserts the folder's trashed state locally first.

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

/// Parameters for the folder restore tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RestoreFolderParams {
    /// Identifier of the folder to restore from trash.
    #[schemars(description = "Identifier of the folder to restore from trash")]
    pub folder_id: String,
}

/// Folder restore tool implementation.
#[derive(Debug, Clone)]
pub struct RestoreFolderTool;

impl RestoreFolderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "restore_folder";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Restore a trashed MediaForge folder.";

    /// Run the tool against a raw argument object.
    pub async fn run(client: &ApiClient, arguments: Value) -> CallToolResult {
        render(Self::call(client, arguments).await)
    }

    async fn call(client: &ApiClient, arguments: Value) -> Result<Value, ToolError> {
        let params: RestoreFolderParams = parse_params(arguments)?;
        Self::execute(client, params).await
    }

    /// Execute the tool logic.
    pub async fn execute(
        client: &ApiClient,
        params: RestoreFolderParams,
    ) -> Result<Value, ToolError> {
        info!("Restoring folder {}", params.folder_id);
        let path = format!("/folders/{}/restore", params.folder_id);
        Ok(client.post(&path, None).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RestoreFolderParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
