//! Folder rename tool.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::super::super::error::ToolError;
use super::super::common::{parse_params, render};
use crate::api::{ApiClient, Payload};

/// Parameters for the folder rename tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateFolderParams {
    /// Identifier of the folder to rename.
    #[schemars(description = "Identifier of the folder to rename")]
    pub folder_id: String,

    /// New name for the folder.
    #[schemars(description = "New name for the folder")]
    pub name: String,
}

#[derive(Debug, Serialize)]
struct UpdateFolderBody<'a> {
    name: &'a str,
}

/// Folder rename tool implementation.
#[derive(Debug, Clone)]
pub struct UpdateFolderTool;

impl UpdateFolderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_folder";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Rename a folder in the MediaForge library.";

    /// Run the tool against a raw argument object.
    pub async fn run(client: &ApiClient, arguments: Value) -> CallToolResult {
        render(Self::call(client, arguments).await)
    }

    async fn call(client: &ApiClient, arguments: Value) -> Result<Value, ToolError> {
        let params: UpdateFolderParams = parse_params(arguments)?;
        Self::execute(client, params).await
    }

    /// Execute the tool logic.
    pub async fn execute(
        client: &ApiClient,
        params: UpdateFolderParams,
    ) -> Result<Value, ToolError> {
        info!("Renaming folder {} to {}", params.folder_id, params.name);

        let path = format!("/folders/{}", params.folder_id);
        let body = UpdateFolderBody { name: &params.name };
        let payload = Payload::Json(serde_json::to_value(&body)?);

        Ok(client.post(&path, Some(payload)).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateFolderParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
