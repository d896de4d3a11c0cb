//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, execute(), to_tool()
//!    and create_route()
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` and its dispatch arm in `registry.rs`

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
