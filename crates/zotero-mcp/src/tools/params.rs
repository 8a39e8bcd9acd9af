//! Parameter structs for all MCP tools.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

// ── get_collection_items ──

/// Parameters for the `get_collection_items` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CollectionItemsParams {
    /// Collection key as returned by `get_collections`.
    #[schemars(description = "Collection key (e.g., 'ABCD2345') from get_collections results")]
    pub collection_key: String,
}

// ── get_item_details ──

/// Parameters for the `get_item_details` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ItemDetailsParams {
    /// Item key.
    #[schemars(description = "Item key (e.g., 'BCDE3456') from a listing or search result")]
    pub item_key: String,
}

// ── search_library ──

/// Parameters for the `search_library` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchLibraryParams {
    #[schemars(description = "Search text matched against titles, creators, and years")]
    pub query: String,
}

// ── get_recent ──

/// Parameters for the `get_recent` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct RecentItemsParams {
    /// Number of items to return (default 10, capped at 100).
    ///
    /// Any JSON number is accepted. Fractions are truncated and values below 1
    /// fall back to the default.
    #[schemars(
        with = "Option<i64>",
        description = "Number of items to return (default 10, max 100)"
    )]
    #[serde(default, deserialize_with = "lenient_limit")]
    pub limit: Option<i64>,
}

fn lenient_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))))
}
