//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The `ToolRegistry` owns both the advertised catalog and the dispatch
//! match, so `tools/list` and `tools/call` can never drift apart. Unknown
//! tool names come back as error-flagged results rather than protocol
//! errors, so a calling agent can react to them.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::api::ApiClient;
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls through the registry. The API credential lives inside the
/// shared `ApiClient`; no other state survives between invocations.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry handling tool listing and dispatch.
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = Arc::new(ApiClient::new(&config.api));

        Self {
            registry: ToolRegistry::new(client),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes MediaForge asset and folder management. \
                 Upload, list and delete media assets; create, rename, list, \
                 trash and restore folders."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = serde_json::Value::Object(request.arguments.unwrap_or_default());
        Ok(self.registry.dispatch(&request.name, arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ApiConfig, LoggingConfig, ServerConfig};

    fn test_config() -> Config {
        Config {
            server: ServerConfig {
                name: "test-server".to_string(),
                version: "0.0.0".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            api: ApiConfig::new("test-key"),
        }
    }

    #[test]
    fn test_server_metadata() {
        let server = McpServer::new(test_config());
        assert_eq!(server.name(), "test-server");
        assert_eq!(server.version(), "0.0.0");
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let server = McpServer::new(test_config());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }
}
