//! MCP tool implementations and their parameter/response types.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.
//! All response structs derive `Serialize` for JSON output.

pub mod library;
pub mod params;
pub mod projection;
pub mod responses;

#[cfg(test)]
pub(crate) mod testing;

pub use params::*;
