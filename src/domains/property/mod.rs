//! Property domain - client for the upstream ATTOM Data API.
//!
//! This bounded context owns the HTTP session against the third-party
//! property-data provider and the error normalization applied to its
//! responses. Upstream JSON is passed through without imposing a schema.

mod client;
mod error;

pub use client::AttomClient;
pub use error::ApiError;
