//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when the http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::property::AttomClient;

use super::definitions::{ComparablesTool, PropertyInfoTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<AttomClient>,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the given upstream client.
    pub fn new(client: Arc<AttomClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![ComparablesTool::NAME, PropertyInfoTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![ComparablesTool::to_tool(), PropertyInfoTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            ComparablesTool::NAME => ComparablesTool::http_handler(arguments, self.client.clone()),
            PropertyInfoTool::NAME => {
                PropertyInfoTool::http_handler(arguments, self.client.clone())
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;

    fn test_client() -> Arc<AttomClient> {
        let credentials = CredentialsConfig {
            attom_api_key: "test-key".to_string(),
            attom_base_url: "http://localhost:9".to_string(),
        };
        Arc::new(AttomClient::new(&credentials).unwrap())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_client());
        let names = registry.tool_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"get_property_info"));
        assert!(names.contains(&"get_comparables"));
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.as_ref().is_some_and(|d| !d.is_empty()));
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_client());
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_rejects_missing_address() {
        let registry = ToolRegistry::new(test_client());
        let result = registry.call_tool("get_property_info", serde_json::json!({}));
        assert!(result.is_err());
    }
}
