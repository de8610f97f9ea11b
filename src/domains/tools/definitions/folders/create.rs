//! Folder creation tool.

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

/// Project type assigned to a folder at creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Video,
    Image,
    Audio,
    #[default]
    Mixed,
}

/// Parameters for the folder creation tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateFolderParams {
    /// Name of the new folder.
    #[schemars(description = "Name of the new folder")]
    pub name: Option<String>,

    /// Project type of the new folder.
    #[schemars(description = "Project type of the folder: video, image, audio or mixed (default)")]
    #[serde(default)]
    pub project_type: ProjectType,

    /// Parent folder to create the new folder under.
    #[schemars(description = "Parent folder to create the new folder under")]
    pub parent_id: Option<String>,
}

/// JSON body for `POST /folders/create`. `name` and `parent_id` are omitted
/// when absent; `project_type` is always sent.
#[derive(Debug, Serialize)]
struct CreateFolderBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    project_type: ProjectType,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<&'a str>,
}

/// Folder creation tool implementation.
#[derive(Debug, Clone)]
pub struct CreateFolderTool;

impl CreateFolderTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_folder";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a folder in the MediaForge library, optionally named, typed and placed under a parent folder.";

    /// Run the tool against a raw argument object.
    pub async fn run(client: &ApiClient, arguments: Value) -> CallToolResult {
        render(Self::call(client, arguments).await)
    }

    async fn call(client: &ApiClient, arguments: Value) -> Result<Value, ToolError> {
        let params: CreateFolderParams = parse_params(arguments)?;
        Self::execute(client, params).await
    }

    /// Execute the tool logic.
    pub async fn execute(
        client: &ApiClient,
        params: CreateFolderParams,
    ) -> Result<Value, ToolError> {
        info!("Creating folder");

        let body = CreateFolderBody {
            name: params.name.as_deref(),
            project_type: params.project_type,
            parent_id: params.parent_id.as_deref(),
        };
        let payload = Payload::Json(serde_json::to_value(&body)?);

        Ok(client.post("/folders/create", Some(payload)).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateFolderParams>(),
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
    use serde_json::json;

    #[test]
    fn test_project_type_defaults_to_mixed() {
        let params: CreateFolderParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.project_type, ProjectType::Mixed);
    }

    #[test]
    fn test_empty_params_build_default_body() {
        let body = CreateFolderBody {
            name: None,
            project_type: ProjectType::default(),
            parent_id: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"project_type": "mixed"})
        );
    }

    #[test]
    fn test_full_params_build_full_body() {
        let body = CreateFolderBody {
            name: Some("interviews"),
            project_type: ProjectType::Video,
            parent_id: Some("fld_root"),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "interviews", "project_type": "video", "parent_id": "fld_root"})
        );
    }

    #[test]
    fn test_project_type_rejects_unknown_value() {
        let result: Result<CreateFolderParams, _> =
            serde_json::from_str(r#"{"project_type": "document"}"#);
        assert!(result.is_err());
    }
}
