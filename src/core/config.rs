//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables. The MediaForge API key is required: without it the
//! server refuses to start.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};

/// Default control-plane base URL for the MediaForge API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.mediaforge.com/v1";

/// Default upload base URL for the MediaForge API.
pub const DEFAULT_UPLOAD_BASE_URL: &str = "https://upload.mediaforge.com/v1";

/// Environment variable holding the MediaForge API key.
pub const API_KEY_ENV: &str = "MEDIAFORGE_API_KEY";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// MediaForge API configuration.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the MediaForge API.
///
/// The key is captured once at startup and immutable afterwards; it is
/// injected into the API client rather than read from a global.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// The MediaForge API key, sent as the `x-api-key` header on every call.
    pub api_key: String,

    /// Base URL for control-plane routes (asset listing, folders).
    pub api_base_url: String,

    /// Base URL for the binary upload route.
    pub upload_base_url: String,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("upload_base_url", &self.upload_base_url)
            .finish()
    }
}

impl ApiConfig {
    /// Create an API configuration with the default base URLs.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            upload_base_url: DEFAULT_UPLOAD_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `MEDIAFORGE_API_KEY` is required; its absence is a fatal configuration
    /// error. `MEDIAFORGE_API_BASE_URL` and `MEDIAFORGE_UPLOAD_BASE_URL`
    /// override the fixed defaults, `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`
    /// tune identification and logging.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            Error::config(format!(
                "{API_KEY_ENV} is not set; the server cannot start without a MediaForge API key"
            ))
        })?;

        let mut config = Self {
            server: ServerConfig {
                name: "mediaforge-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            api: ApiConfig::new(api_key),
        };

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base) = std::env::var("MEDIAFORGE_API_BASE_URL") {
            info!("Using API base URL override: {}", base);
            config.api.api_base_url = base;
        }

        if let Ok(base) = std::env::var("MEDIAFORGE_UPLOAD_BASE_URL") {
            info!("Using upload base URL override: {}", base);
            config.api.upload_base_url = base;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_missing_api_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var(API_KEY_ENV);
        }
        let result = Config::from_env();
        let err = result.expect_err("expected a configuration error");
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_ENV, "test_key_12345");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.api_key, "test_key_12345");
        assert_eq!(config.api.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.upload_base_url, DEFAULT_UPLOAD_BASE_URL);
        unsafe {
            std::env::remove_var(API_KEY_ENV);
        }
    }

    #[test]
    fn test_base_url_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var(API_KEY_ENV, "test_key");
            std::env::set_var("MEDIAFORGE_API_BASE_URL", "http://127.0.0.1:9000/v1");
            std::env::set_var("MEDIAFORGE_UPLOAD_BASE_URL", "http://127.0.0.1:9001/v1");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.api.api_base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.api.upload_base_url, "http://127.0.0.1:9001/v1");
        unsafe {
            std::env::remove_var(API_KEY_ENV);
            std::env::remove_var("MEDIAFORGE_API_BASE_URL");
            std::env::remove_var("MEDIAFORGE_UPLOAD_BASE_URL");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let api = ApiConfig::new("super_secret_key");
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
