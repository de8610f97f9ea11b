//! The MediaForge API client.
//!
//! A thin adapter over `reqwest`: one outbound call per invocation, the API
//! key attached as a fixed header, and a tagged payload type that decides
//! the content type. No retries and no timeout beyond reqwest's default.

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::ApiError;
use crate::core::config::ApiConfig;

/// Header carrying the API key on every outbound request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Request body for an outbound API call.
///
/// The variant, not a runtime inspection of the value, decides the
/// content-type:
/// - `Raw` sends the supplied content type verbatim (binary uploads),
/// - `Json` serializes the value with `application/json`,
/// - `Text` sends the string as-is with no content-type override.
#[derive(Debug, Clone)]
pub enum Payload {
    Raw { bytes: Vec<u8>, content_type: String },
    Text(String),
    Json(Value),
}

impl Payload {
    fn apply(self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::Raw {
                bytes,
                content_type,
            } => request.header(CONTENT_TYPE, content_type).body(bytes),
            Self::Json(value) => request.json(&value),
            Self::Text(text) => request.body(text),
        }
    }
}

/// Client for the MediaForge HTTP API.
///
/// Holds the immutable startup credential and the two base URLs. Cloning is
/// cheap through the shared inner `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    upload_base: String,
}

impl ApiClient {
    /// Create a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            api_base: config.api_base_url.trim_end_matches('/').to_string(),
            upload_base: config.upload_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a control-plane route with the given query parameters.
    ///
    /// `query` is serialized by reqwest; `Option::None` fields are skipped,
    /// so omitted parameters never appear in the query string.
    pub async fn get<Q>(&self, path: &str, query: &Q) -> Result<Value, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.api_base, path);
        debug!("GET {}", url);
        let request = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query);
        Self::execute(request).await
    }

    /// POST a control-plane route with an optional body.
    pub async fn post(&self, path: &str, payload: Option<Payload>) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.api_base, path);
        self.send_post(url, payload).await
    }

    /// POST to the upload endpoint with the given body.
    pub async fn upload(&self, path: &str, payload: Payload) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.upload_base, path);
        self.send_post(url, Some(payload)).await
    }

    async fn send_post(&self, url: String, payload: Option<Payload>) -> Result<Value, ApiError> {
        debug!("POST {}", url);
        let mut request = self.http.post(&url).header(API_KEY_HEADER, &self.api_key);
        if let Some(payload) = payload {
            request = payload.apply(request);
        }
        Self::execute(request).await
    }

    /// Send the request and parse the JSON response.
    ///
    /// Non-2xx answers become `ApiError::Status` carrying the status code
    /// and the raw body text; JSON decode failures propagate as transport
    /// errors.
    async fn execute(request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            api_key: "test-key".to_string(),
            api_base_url: "http://localhost:9/v1".to_string(),
            upload_base_url: "http://localhost:9/v1".to_string(),
        })
    }

    fn build(request: reqwest::RequestBuilder) -> reqwest::Request {
        request.build().unwrap()
    }

    #[test]
    fn test_raw_payload_sets_content_type_verbatim() {
        let client = test_client();
        let payload = Payload::Raw {
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
            content_type: "image/png".to_string(),
        };
        let request = build(payload.apply(client.http.post("http://localhost:9/v1/asset")));
        assert_eq!(request.headers()[CONTENT_TYPE.as_str()], "image/png");
        assert_eq!(
            request.body().unwrap().as_bytes().unwrap(),
            &[0x89, 0x50, 0x4e, 0x47]
        );
    }

    #[test]
    fn test_json_payload_sets_application_json() {
        let client = test_client();
        let payload = Payload::Json(serde_json::json!({"name": "clips"}));
        let request = build(payload.apply(client.http.post("http://localhost:9/v1/folders")));
        assert_eq!(request.headers()[CONTENT_TYPE.as_str()], "application/json");
        assert_eq!(
            request.body().unwrap().as_bytes().unwrap(),
            br#"{"name":"clips"}"#
        );
    }

    #[test]
    fn test_text_payload_has_no_content_type_override() {
        let client = test_client();
        let payload = Payload::Text("plain".to_string());
        let request = build(payload.apply(client.http.post("http://localhost:9/v1/asset")));
        assert!(!request.headers().contains_key(CONTENT_TYPE.as_str()));
        assert_eq!(request.body().unwrap().as_bytes().unwrap(), b"plain");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(&ApiConfig {
            api_key: "k".to_string(),
            api_base_url: "http://localhost:9/v1/".to_string(),
            upload_base_url: "http://localhost:9/v1/".to_string(),
        });
        assert_eq!(client.api_base, "http://localhost:9/v1");
        assert_eq!(client.upload_base, "http://localhost:9/v1");
    }

    #[test]
    fn test_status_error_display_includes_status_and_body() {
        let err = ApiError::Status {
            status: 404,
            body: r#"{"error":"not found"}"#.to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains(r#"{"error":"not found"}"#));
    }
}
