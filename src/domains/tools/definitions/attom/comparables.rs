//! Comparable sales lookup tool.
//!
//! Fetches comparable-sale properties for a street address from the ATTOM
//! Data API. The number of comparables is fixed; callers only supply the
//! address.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domains::property::AttomClient;

use super::common::{COMPARABLE_COUNT, api_error_result, document_result};

/// Parameters for the comparables tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ComparablesParams {
    /// Full property address.
    #[schemars(description = "Full property address (e.g., '123 Main St, City, State ZIP')")]
    pub address: String,
}

/// Comparable sales lookup tool implementation.
#[derive(Debug, Clone)]
pub struct ComparablesTool;

impl ComparablesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_comparables";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch comparable sales for a given address from the ATTOM Data API. Returns the three closest comparables as the upstream JSON document, or a document with 'error', 'message' and optional 'status_code' fields when the lookup fails.";

    pub fn new() -> Self {
        Self
    }

    /// Execute the tool logic.
    pub fn execute(params: &ComparablesParams, client: &AttomClient) -> CallToolResult {
        info!("Fetching comparables for address: {}", params.address);

        match client.comparables(&params.address, COMPARABLE_COUNT) {
            Ok(document) => document_result(&document),
            Err(e) => api_error_result(&e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        client: Arc<AttomClient>,
    ) -> Result<serde_json::Value, String> {
        let address = arguments
            .get("address")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'address' parameter".to_string())?
            .to_string();

        let params = ComparablesParams { address };

        // reqwest::blocking creates its own runtime; run the lookup on a
        // separate OS thread.
        let handle = std::thread::spawn(move || Self::execute(&params, &client));

        let result = handle
            .join()
            .map_err(|_| "Thread panicked during comparables lookup".to_string())?;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ComparablesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the STDIO transport.
    pub fn create_route<S>(client: Arc<AttomClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: ComparablesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // reqwest::blocking creates its own runtime, so the lookup
                // must not run on an async worker thread.
                let result = tokio::task::spawn_blocking(move || Self::execute(&params, &client))
                    .await
                    .map_err(|_| McpError::internal_error("Task panicked".to_string(), None))?;

                Ok(result)
            }
            .boxed()
        })
    }
}

impl Default for ComparablesTool {
    fn default() -> Self {
        Self::new()
    }
}
