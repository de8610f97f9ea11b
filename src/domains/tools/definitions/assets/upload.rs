//! Asset upload tool.
//!
//! Reads a local media file and uploads its raw bytes to the MediaForge
//! upload endpoint, with the supplied MIME type as the content type.

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

/// MIME types accepted by the upload endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum MimeType {
    #[serde(rename = "image/png")]
    ImagePng,
    #[serde(rename = "image/jpeg")]
    ImageJpeg,
    #[serde(rename = "audio/mpeg")]
    AudioMpeg,
    #[serde(rename = "video/mp4")]
    VideoMp4,
    #[serde(rename = "video/webm")]
    VideoWebm,
}

impl MimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImagePng => "image/png",
            Self::ImageJpeg => "image/jpeg",
            Self::AudioMpeg => "audio/mpeg",
            Self::VideoMp4 => "video/mp4",
            Self::VideoWebm => "video/webm",
        }
    }
}

/// Parameters for the asset upload tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UploadAssetParams {
    /// Path to the local media file to upload.
    #[schemars(description = "Path to the local media file to upload")]
    pub file_path: String,

    /// MIME type of the file.
    #[schemars(
        description = "MIME type of the file: image/png, image/jpeg, audio/mpeg, video/mp4 or video/webm"
    )]
    pub mime_type: MimeType,
}

/// Asset upload tool implementation.
#[derive(Debug, Clone)]
pub struct UploadAssetTool;

impl UploadAssetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "upload_asset";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Upload a local media file (image, audio or video) to MediaForge. Reads the file at file_path and uploads its raw bytes with the given MIME type.";

    /// Run the tool against a raw argument object, rendering any failure
    /// into an error-flagged response.
    pub async fn run(client: &ApiClient, arguments: Value) -> CallToolResult {
        render(Self::call(client, arguments).await)
    }

    async fn call(client: &ApiClient, arguments: Value) -> Result<Value, ToolError> {
        let params: UploadAssetParams = parse_params(arguments)?;
        Self::execute(client, params).await
    }

    /// Execute the tool logic.
    pub async fn execute(
        client: &ApiClient,
        params: UploadAssetParams,
    ) -> Result<Value, ToolError> {
        info!(
            "Uploading {} as {}",
            params.file_path,
            params.mime_type.as_str()
        );

        let bytes = tokio::fs::read(&params.file_path).await?;
        let payload = Payload::Raw {
            bytes,
            content_type: params.mime_type.as_str().to_string(),
        };

        Ok(client.upload("/asset", payload).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UploadAssetParams>(),
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
    fn test_params_deserialize() {
        let json = r#"{"file_path": "/tmp/clip.mp4", "mime_type": "video/mp4"}"#;
        let params: UploadAssetParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.file_path, "/tmp/clip.mp4");
        assert_eq!(params.mime_type, MimeType::VideoMp4);
    }

    #[test]
    fn test_params_reject_unknown_mime_type() {
        let json = r#"{"file_path": "/tmp/clip.gif", "mime_type": "image/gif"}"#;
        let result: Result<UploadAssetParams, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_params_require_file_path() {
        let json = r#"{"mime_type": "image/png"}"#;
        let result: Result<UploadAssetParams, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_mime_type_round_trips_as_str() {
        for (mime, expected) in [
            (MimeType::ImagePng, "image/png"),
            (MimeType::ImageJpeg, "image/jpeg"),
            (MimeType::AudioMpeg, "audio/mpeg"),
            (MimeType::VideoMp4, "video/mp4"),
            (MimeType::VideoWebm, "video/webm"),
        ] {
            assert_eq!(mime.as_str(), expected);
            let serialized = serde_json::to_value(mime).unwrap();
            assert_eq!(serialized, serde_json::Value::String(expected.to_string()));
        }
    }
}
