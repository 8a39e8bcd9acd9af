//! The read-only library surface consumed by the MCP tools.
//!
//! [`LibraryApi`] is the seam between response shaping and HTTP transport:
//! [`crate::ZoteroClient`] implements it against the Zotero Web API, tests
//! implement it with in-memory stubs.

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::records::LibraryRecord;

/// Sort direction for item listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters for the library-wide `items` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    /// Quick-search text (`q`).
    pub q: Option<String>,
    /// Sort field, e.g. `dateAdded`.
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub limit: Option<u32>,
}

impl ItemQuery {
    /// Full-text quick search.
    pub fn search(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    /// Most recently added items first.
    pub fn recently_added(limit: u32) -> Self {
        Self {
            sort: Some("dateAdded".to_string()),
            direction: Some(SortDirection::Desc),
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Query-string pairs in the order Zotero documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(direction) = self.direction {
            pairs.push(("direction", direction.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Read-only operations against one user's library.
#[async_trait]
pub trait LibraryApi: Send + Sync + std::fmt::Debug {
    /// All collections, as returned by the API (no projection).
    async fn collections(&self) -> ClientResult<Vec<serde_json::Value>>;

    /// All items in one collection.
    async fn collection_items(&self, collection_key: &str) -> ClientResult<Vec<LibraryRecord>>;

    /// A single item. `Ok(None)` when the API answered without a record.
    async fn item(&self, item_key: &str) -> ClientResult<Option<LibraryRecord>>;

    /// Library-wide item listing (search, sorted listings).
    async fn items(&self, query: &ItemQuery) -> ClientResult<Vec<LibraryRecord>>;
}
