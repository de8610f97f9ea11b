//! Folder listing tool.

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

/// Parameters for the folder listing tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListFoldersParams {
    /// Maximum number of folders to return.
    #[schemars(description = "Maximum number of folders to return (0-100)")]
    #[schemars(range(min = 0, max = 100))]
    pub limit: Option<u32>,

    /// Only list folders under this parent folder.
    #[schemars(description = "Only list folders under this parent folder")]
    pub parent_id: Option<String>,

    /// Filter folders by name.
    #[schemars(description = "Filter folders by name")]
    pub name_filter: Option<String>,

    /// When true, list trashed folders instead of active ones.
    #[schemars(description = "When true, list trashed folders instead of active ones")]
    pub is_trash: Option<bool>,

    /// Opaque pagination token from a previous listing.
    #[schemars(description = "Opaque pagination token from a previous listing")]
    pub token: Option<String>,
}

/// Query string for `GET /folders`. Omitted fields are never sent.
#[derive(Debug, Serialize)]
struct ListFoldersQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_filter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_trash: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
}

/// Folder listing tool implementation.
#[derive(Debug, Clone)]
pub struct ListFoldersTool;

impl ListFoldersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_folders";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List folders in the MediaForge library. Supports filtering by parent folder, name and trash state, and pagination via an opaque token.";

    /// Run the tool against a raw argument object.
    pub async fn run(client: &ApiClient, arguments: Value) -> CallToolResult {
        render(Self::call(client, arguments).await)
    }

    async fn call(client: &ApiClient, arguments: Value) -> Result<Value, ToolError> {
        let params: ListFoldersParams = parse_params(arguments)?;
        Self::execute(client, params).await
    }

    /// Execute the tool logic.
    pub async fn execute(
        client: &ApiClient,
        params: ListFoldersParams,
    ) -> Result<Value, ToolError> {
        info!("Listing folders");

        let limit = validate_limit(params.limit)?;
        let query = ListFoldersQuery {
            limit,
            parent_id: params.parent_id.as_deref(),
            name_filter: params.name_filter.as_deref(),
            is_trash: params.is_trash,
            token: params.token.as_deref(),
        };

        Ok(client.get("/folders", &query).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListFoldersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
