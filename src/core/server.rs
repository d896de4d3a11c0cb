//! MCP Server implementation and lifecycle management.
//!
//! The server owns the shared ATTOM client and the tool router. The client
//! is constructed exactly once here and injected into every tool route, so
//! credential validation happens before any transport starts and tools
//! never build their own HTTP session.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::property::AttomClient;
use crate::domains::tools::build_tool_router;

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// tool calls to the property lookup tools.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared client for the upstream property API.
    client: Arc<AttomClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails when the ATTOM credentials are missing or unusable; no server
    /// is constructed in that case.
    pub fn new(config: Config) -> crate::core::error::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(AttomClient::new(&config.credentials)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config,
            client,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the shared upstream client.
    pub fn client(&self) -> &Arc<AttomClient> {
        &self.client
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.client.clone());
        registry.call_tool(name, arguments)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Property data lookup server backed by the ATTOM Data API. Use \
                 get_property_info for property details and get_comparables for \
                 comparable sales."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fails_without_api_key() {
        let config = Config::default();
        assert!(McpServer::new(config).is_err());
    }

    #[test]
    fn test_new_with_key_exposes_both_tools() {
        let mut config = Config::default();
        config.credentials.attom_api_key = "test-key".to_string();

        let server = McpServer::new(config).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(server.name(), "property-mcp-server");
    }
}
