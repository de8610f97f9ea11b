//! Asset deletion tool.

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

/// Parameters for the asset deletion tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteAssetParams {
    /// Identifier of the asset to delete.
    #[schemars(description = "Identifier of the asset to delete")]
    pub asset_id: String,
}

/// Asset deletion tool implementation.
#[derive(Debug, Clone)]
pub struct DeleteAssetTool;

impl DeleteAssetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_asset";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Delete an asset from the MediaForge library. This cannot be undone.";

    /// Run the tool against a raw argument object.
    pub async fn run(client: &ApiClient, arguments: Value) -> CallToolResult {
        render(Self::call(client, arguments).await)
    }

    async fn call(client: &ApiClient, arguments: Value) -> Result<Value, ToolError> {
        let params: DeleteAssetParams = parse_params(arguments)?;
        Self::execute(client, params).await
    }

    /// Execute the tool logic.
    pub async fn execute(
        client: &ApiClient,
        params: DeleteAssetParams,
    ) -> Result<Value, ToolError> {
        info!("Deleting asset {}", params.asset_id);
        let path = format!("/asset/{}/delete", params.asset_id);
        Ok(client.post(&path, None).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteAssetParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
