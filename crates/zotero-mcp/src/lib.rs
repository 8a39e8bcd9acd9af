//! Zotero MCP Server library.
//!
//! Provides the [`server::ZoteroMcpServer`] MCP server handler and the tool
//! parameter, projection, and response types. Used by the `zotero-mcp` binary
//! and available for integration testing.

pub mod server;
pub mod tools;
