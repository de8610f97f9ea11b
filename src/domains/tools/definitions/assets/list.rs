//! Asset listing tool.
//!
//! Lists assets in the MediaForge library, with optional filtering and
//! token-based pagination. Only the parameters that were actually supplied
//! are forwarded in the query string.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::super::super::error::ToolError;
use super::super::common::{parse_params, render, validate_limit};
use crate::api::ApiClient;

/// Asset kind filter for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Audio,
    Video,
    Image,
}

/// Parameters for the asset listing tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListAssetsParams {
    /// Only list assets inside this folder.
    #[schemars(description = "Only list assets inside this folder")]
    pub folder_id: Option<String>,

    /// Filter by asset kind.
    #[schemars(description = "Filter by asset kind: audio, video or image")]
    pub file_type: Option<FileType>,

    /// Maximum number of assets to return.
    #[schemars(description = "Maximum number of assets to return (0-100)")]
    #[schemars(range(min = 0, max = 100))]
    pub limit: Option<u32>,

    /// Opaque pagination token from a previous listing.
    #[schemars(description = "Opaque pagination token from a previous listing")]
    pub token: Option<String>,
}

/// Query string for `GET /asset/list`. Omitted fields are never sent.
#[derive(Debug, Serialize)]
struct ListAssetsQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    folder_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_type: Option<FileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
}

/// Asset listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListAssetsTool;

impl ListAssetsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_assets";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List assets in the MediaForge library. Supports filtering by folder and asset kind, and pagination via an opaque token.";

    /// Run the tool against a raw argument object.
    pub async fn run(client: &ApiClient, arguments: Value) -> CallToolResult {
        render(Self::call(client, arguments).await)
    }

    async fn call(client: &ApiClient, arguments: Value) -> Result<Value, ToolError> {
        let params: ListAssetsParams = parse_params(arguments)?;
        Self::execute(client, params).await
    }

    /// Execute the tool logic.
    pub async fn execute(client: &ApiClient, params: ListAssetsParams) -> Result<Value, ToolError> {
        info!("Listing assets");

        let limit = validate_limit(params.limit)?;
        let query = ListAssetsQuery {
            folder_id: params.folder_id.as_deref(),
            file_type: params.file_type,
            limit,
            token: params.token.as_deref(),
        };

        Ok(client.get("/asset/list", &query).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListAssetsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
