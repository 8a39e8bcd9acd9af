//! Read-only library tool implementations.
//!
//! Async functions that take the shared `LibraryApi` handle and tool params,
//! returning JSON strings. Failures never escape: each function classifies the
//! remote result and shapes it into a success payload or an advisory object.

use tracing::{error, info};
use zotero_client::{ItemQuery, LibraryApi};

use super::params::{
    CollectionItemsParams, ItemDetailsParams, RecentItemsParams, SearchLibraryParams,
};
use super::projection::{project, project_all, Projection};
use super::responses::{to_json, Advisory, Fetched};

/// Default number of items returned by `get_recent`.
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// Hard ceiling on `get_recent`, regardless of what the caller asks for.
pub const MAX_RECENT_LIMIT: u32 = 100;

/// Effective `get_recent` limit. Absent, zero or negative falls back to the default.
pub fn effective_recent_limit(requested: Option<i64>) -> u32 {
    match requested {
        Some(limit) if limit > 0 => {
            u32::try_from(limit).map_or(MAX_RECENT_LIMIT, |limit| limit.min(MAX_RECENT_LIMIT))
        }
        _ => DEFAULT_RECENT_LIMIT,
    }
}

pub async fn get_collections(library: &dyn LibraryApi) -> String {
    info!("GET_COLLECTIONS: Starting");

    match Fetched::from_list(library.collections().await) {
        Fetched::Found(collections) => {
            info!(count = collections.len(), "GET_COLLECTIONS: Found collections");
            to_json(&collections)
        }
        Fetched::Empty => {
            info!("GET_COLLECTIONS: Library has no collections");
            Advisory::no_collections().to_json()
        }
        Fetched::NotFound(message) | Fetched::Failed(message) => {
            error!(error = %message, "GET_COLLECTIONS: Failed");
            Advisory::error(message).to_json()
        }
    }
}

pub async fn get_collection_items(
    library: &dyn LibraryApi,
    params: CollectionItemsParams,
) -> String {
    let collection_key = params.collection_key;
    info!(%collection_key, "GET_COLLECTION_ITEMS: Fetching items");

    match Fetched::from_list(library.collection_items(&collection_key).await) {
        Fetched::Found(items) => {
            let formatted = project_all(&items, Projection::ListFull);
            info!(count = formatted.len(), "GET_COLLECTION_ITEMS: Formatted items");
            to_json(&formatted)
        }
        Fetched::Empty => Advisory::empty_collection(&collection_key).to_json(),
        Fetched::NotFound(message) => {
            error!(%collection_key, error = %message, "GET_COLLECTION_ITEMS: Collection not found");
            Advisory::collection_not_found(&collection_key).to_json()
        }
        Fetched::Failed(message) => {
            error!(%collection_key, error = %message, "GET_COLLECTION_ITEMS: Failed");
            Advisory::error(message).to_json()
        }
    }
}

pub async fn get_item_details(library: &dyn LibraryApi, params: ItemDetailsParams) -> String {
    let item_key = params.item_key;
    if item_key.trim().is_empty() {
        return Advisory::item_key_required().to_json();
    }

    match Fetched::from_option(library.item(&item_key).await) {
        Fetched::Found(item) => {
            info!(%item_key, "GET_ITEM_DETAILS: Retrieved item");
            to_json(&project(&item, Projection::Detail))
        }
        Fetched::Empty | Fetched::NotFound(_) => {
            info!(%item_key, "GET_ITEM_DETAILS: Item not found");
            Advisory::item_not_found(&item_key).to_json()
        }
        Fetched::Failed(message) => {
            error!(%item_key, error = %message, "GET_ITEM_DETAILS: Failed");
            Advisory::error(message).to_json()
        }
    }
}

pub async fn search_library(library: &dyn LibraryApi, params: SearchLibraryParams) -> String {
    let query = params.query;
    if query.trim().is_empty() {
        return Advisory::search_query_required().to_json();
    }

    match Fetched::from_list(library.items(&ItemQuery::search(query.as_str())).await) {
        Fetched::Found(items) => {
            info!(count = items.len(), %query, "SEARCH_LIBRARY: Found items");
            to_json(&project_all(&items, Projection::ListBrief))
        }
        Fetched::Empty => {
            info!(%query, "SEARCH_LIBRARY: No results");
            Advisory::no_search_results(&query).to_json()
        }
        Fetched::NotFound(message) | Fetched::Failed(message) => {
            error!(%query, error = %message, "SEARCH_LIBRARY: Failed");
            Advisory::error(message).to_json()
        }
    }
}

pub async fn get_recent(library: &dyn LibraryApi, params: RecentItemsParams) -> String {
    let limit = effective_recent_limit(params.limit);

    match Fetched::from_list(library.items(&ItemQuery::recently_added(limit)).await) {
        Fetched::Found(items) => {
            info!(count = items.len(), limit, "GET_RECENT: Found recent items");
            to_json(&project_all(&items, Projection::Recent))
        }
        Fetched::Empty => Advisory::no_recent_items().to_json(),
        Fetched::NotFound(message) | Fetched::Failed(message) => {
            error!(limit, error = %message, "GET_RECENT: Failed");
            Advisory::error(message).to_json()
        }
    }
}
