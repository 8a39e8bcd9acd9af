//! MCP ServerHandler implementation for a Zotero library.
//!
//! Exposes five read-only tools over one shared library client:
//!
//! - `get_collections`: List all collections (raw API records)
//! - `get_collection_items`: List items in a collection
//! - `get_item_details`: Get full details for one item
//! - `search_library`: Quick-search the whole library
//! - `get_recent`: List recently added items
//!
//! Every tool returns pretty-printed JSON text. Failures come back as objects
//! with an `error` key, never as protocol errors.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use tracing::info;

use zotero_client::{ClientConfig, ClientResult, LibraryApi, ZoteroClient};

use crate::tools::*;

const INSTRUCTIONS: &str = "Read-only access to the user's personal Zotero library.\n\
     Browse: get_collections → get_collection_items (use a collection key from get_collections)\n\
     Find: search_library for free-text queries, get_recent for newly added papers\n\
     Drill down: get_item_details with an item key from any listing\n\
     Results are JSON. An `error` key means nothing to show; read its `suggestion` before retrying.";

/// Zotero MCP server handler.
#[derive(Debug, Clone)]
pub struct ZoteroMcpServer {
    tool_router: ToolRouter<Self>,
    library: Arc<dyn LibraryApi>,
}

impl ZoteroMcpServer {
    /// Create a server over any library implementation.
    pub fn new(library: Arc<dyn LibraryApi>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            library,
        }
    }

    /// Build the long-lived Zotero client from config and wrap it in a server.
    ///
    /// Fails without network activity when the client cannot be constructed.
    pub fn connect(config: ClientConfig) -> ClientResult<Self> {
        info!(user_id = config.user_id(), base_url = %config.base_url(), "Using Zotero library");
        let client = ZoteroClient::new(config)?;
        info!("Zotero API client initialized");
        Ok(Self::new(Arc::new(client)))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ZoteroMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "zotero-mcp".to_string(),
                title: Some("Zotero MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing a personal Zotero library: collections, items, \
                     search, and recently added papers"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

#[tool_router(router = tool_router)]
impl ZoteroMcpServer {
    /// List all collections in the library.
    #[tool(
        name = "get_collections",
        description = "List all collections in your Zotero library. Returns the raw collection records including each collection's key, name, and parent. Use a key with get_collection_items."
    )]
    pub async fn get_collections(&self) -> String {
        library::get_collections(self.library.as_ref()).await
    }

    /// List the items in one collection.
    #[tool(
        name = "get_collection_items",
        description = "Get all items in a specific collection in your Zotero library. Returns title, authors, date, key, item type, abstract, tags, DOI, URL, and publication title for each item."
    )]
    pub async fn get_collection_items(
        &self,
        Parameters(params): Parameters<CollectionItemsParams>,
    ) -> String {
        library::get_collection_items(self.library.as_ref(), params).await
    }

    /// Get full details for a single item.
    #[tool(
        name = "get_item_details",
        description = "Get detailed information about a specific paper in your Zotero library, including the full abstract, publication, DOI, URL, tags, and collection membership."
    )]
    pub async fn get_item_details(
        &self,
        Parameters(params): Parameters<ItemDetailsParams>,
    ) -> String {
        library::get_item_details(self.library.as_ref(), params).await
    }

    /// Quick-search the entire library.
    #[tool(
        name = "search_library",
        description = "Search your entire Zotero library. Returns title, authors, date, key, item type, and abstract for each match. Follow up with get_item_details for more."
    )]
    pub async fn search_library(
        &self,
        Parameters(params): Parameters<SearchLibraryParams>,
    ) -> String {
        library::search_library(self.library.as_ref(), params).await
    }

    /// List recently added items.
    #[tool(
        name = "get_recent",
        description = "Get recently added papers in your Zotero library, newest first. Optional limit defaults to 10 and is capped at 100."
    )]
    pub async fn get_recent(&self, Parameters(params): Parameters<RecentItemsParams>) -> String {
        library::get_recent(self.library.as_ref(), params).await
    }
}
