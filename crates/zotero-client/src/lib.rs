//! # Zotero Client
//!
//! Read-only access to a personal Zotero library over the Zotero Web API v3.
//!
//! - [`ClientConfig`] validates credentials before anything touches the network.
//! - [`LibraryApi`] is the operation surface the MCP tools depend on.
//! - [`ZoteroClient`] implements it with `reqwest`, handling auth headers and
//!   pagination.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod records;

pub use api::{ItemQuery, LibraryApi, SortDirection};
pub use client::ZoteroClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use records::{Creator, LibraryRecord, Tag};
