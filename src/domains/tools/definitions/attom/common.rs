//! Shared helpers for the ATTOM property tools.
//!
//! Both tools return either the upstream JSON document unchanged or the
//! normalized error document built here.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

use crate::domains::property::ApiError;

/// Number of comparable sales requested for every lookup.
pub const COMPARABLE_COUNT: u32 = 3;

/// Render an upstream JSON document as the tool result.
pub fn document_result(document: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(document.to_string())])
}

/// Build the normalized error document for a failed upstream call.
///
/// The `status_code` key is present only when the upstream service answered
/// with an HTTP error status; a request that never completed omits it.
pub fn error_document(error: &ApiError) -> Value {
    let mut document = serde_json::json!({
        "error": true,
        "message": error.message.clone(),
    });
    if let Some(status_code) = error.status_code {
        document["status_code"] = status_code.into();
    }
    document
}

/// Report an upstream failure in-band as a result document.
///
/// The invoking protocol layer expects every tool call to return a value;
/// callers detect failure by the `error` key of the document rather than a
/// separate channel.
pub fn api_error_result(error: &ApiError) -> CallToolResult {
    warn!("{}", error);
    CallToolResult::success(vec![Content::text(error_document(error).to_string())])
}
