//! Result shaping: advisory objects for empty or missing data, error objects
//! for failures, and classification of remote results.
//!
//! Every tool returns JSON text. A non-happy-path result is always an object
//! with an `error` key; successful results never carry one.

use serde::Serialize;
use zotero_client::{ClientError, ClientResult};

const COLLECTIONS_HELP_URL: &str = "https://www.zotero.org/support/collections";

/// Distinguishes an empty collection from one the API could not find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryStatus {
    Empty,
    NotFound,
}

/// Structured error or advisory payload.
///
/// Context fields are omitted from the JSON when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AdvisoryStatus>,
}

impl Advisory {
    /// Bare `{error}` object.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            ..Self::default()
        }
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    pub fn item_key_required() -> Self {
        Self::error("Item key is required")
    }

    pub fn search_query_required() -> Self {
        Self::error("Search query is required")
    }

    pub fn no_collections() -> Self {
        Self {
            help_url: Some(COLLECTIONS_HELP_URL.to_string()),
            ..Self::error("No collections found")
                .with_suggestion("Create a collection in your Zotero library first")
        }
    }

    pub fn empty_collection(collection_key: &str) -> Self {
        Self {
            collection_key: Some(collection_key.to_string()),
            status: Some(AdvisoryStatus::Empty),
            ..Self::error("Collection is empty")
                .with_suggestion("Add some items to this collection in Zotero")
        }
    }

    pub fn collection_not_found(collection_key: &str) -> Self {
        Self {
            collection_key: Some(collection_key.to_string()),
            status: Some(AdvisoryStatus::NotFound),
            ..Self::error("Collection is empty or not accessible")
                .with_suggestion("Verify the collection exists and try adding some items to it")
        }
    }

    pub fn item_not_found(item_key: &str) -> Self {
        Self {
            item_key: Some(item_key.to_string()),
            ..Self::error("Item not found or inaccessible")
                .with_suggestion("Verify the item exists and you have permission to access it")
        }
    }

    pub fn no_search_results(query: &str) -> Self {
        Self {
            query: Some(query.to_string()),
            ..Self::error("No results found").with_suggestion(
                "Try a different search term or verify your library contains matching items",
            )
        }
    }

    pub fn no_recent_items() -> Self {
        Self::error("No recent items found")
            .with_suggestion("Add some items to your Zotero library first")
    }

    pub fn to_json(&self) -> String {
        to_json(self)
    }
}

/// Classified outcome of a remote call.
#[derive(Debug)]
pub enum Fetched<T> {
    /// Non-empty data.
    Found(T),
    /// The call succeeded but returned nothing.
    Empty,
    /// The API reported HTTP 404. Carries the error text for tools that do not
    /// treat 404 specially.
    NotFound(String),
    /// Any other failure.
    Failed(String),
}

impl<T> Fetched<Vec<T>> {
    /// Classify a list result.
    pub fn from_list(result: ClientResult<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Found(items),
            Err(e) => Self::from_error(e),
        }
    }
}

impl<T> Fetched<T> {
    /// Classify a single-record result.
    pub fn from_option(result: ClientResult<Option<T>>) -> Self {
        match result {
            Ok(Some(item)) => Self::Found(item),
            Ok(None) => Self::Empty,
            Err(e) => Self::from_error(e),
        }
    }

    fn from_error(error: ClientError) -> Self {
        if error.is_not_found() {
            Self::NotFound(error.to_string())
        } else {
            Self::Failed(error.to_string())
        }
    }
}

/// Serialize with 2-space pretty printing, falling back to an error object.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| error_json(&e.to_string()))
}

/// Build a bare `{"error": message}` JSON string.
pub fn error_json(message: &str) -> String {
    serde_json::to_string_pretty(&serde_json::json!({ "error": message }))
        .unwrap_or_else(|_| "{\n  \"error\": \"serialization_error\"\n}".to_string())
}
