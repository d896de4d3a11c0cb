//! Property MCP Server Library
//!
//! An MCP (Model Context Protocol) server exposing property-data lookups
//! backed by the ATTOM Data API.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **property**: the upstream ATTOM API client and error normalization
//!   - **tools**: the MCP tools exposed to clients
//!
//! # Example
//!
//! ```rust,no_run
//! use property_mcp_server::{Config, McpServer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Hand the server to a transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
pub use crate::domains::property::{ApiError, AttomClient};
