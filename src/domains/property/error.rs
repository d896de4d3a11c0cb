//! Property domain error types.

use thiserror::Error;

/// Normalized error for failed ATTOM API calls.
///
/// Carries a human-readable message and, when the upstream service answered
/// with an HTTP error status, the numeric status code. An absent status code
/// means the request never completed (connect failure, timeout, or an
/// unreadable response body).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable failure description.
    pub message: String,

    /// HTTP status code, when the upstream service rejected the request.
    pub status_code: Option<u16>,
}

impl ApiError {
    /// Error for an upstream HTTP error response (status >= 400).
    pub fn upstream(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Error for a request that never completed.
    pub fn request(source: reqwest::Error) -> Self {
        Self {
            message: format!("Request failed: {source}"),
            status_code: None,
        }
    }
}
