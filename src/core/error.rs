//! Error types and handling for the MCP server.
//!
//! Configuration errors are fatal: they are raised at server construction
//! and propagate to the binary entry point, so no server runs without a
//! usable credential set. Upstream API failures use their own
//! [`ApiError`](crate::domains::property::ApiError) type and are normalized
//! into result documents at the tool boundary instead of surfacing here.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for server construction and infrastructure.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
