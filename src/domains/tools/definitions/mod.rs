//! Tool definitions module.
//!
//! Each tool lives in its own file and knows how to produce its metadata,
//! its rmcp route and (with the http feature) its HTTP handler.

pub mod attom;

pub use attom::{ComparablesParams, ComparablesTool, PropertyInfoParams, PropertyInfoTool};
