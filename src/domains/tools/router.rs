//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; the shared ATTOM client is
//! injected here so tools never construct their own.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::property::AttomClient;

use super::definitions::{ComparablesTool, PropertyInfoTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<AttomClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ComparablesTool::create_route(client.clone()))
        .with_route(PropertyInfoTool::create_route(client))
}
