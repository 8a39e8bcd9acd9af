//! In-memory `LibraryApi` stub that records every call.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use zotero_client::{ClientError, ClientResult, ItemQuery, LibraryApi, LibraryRecord};

/// How the stub fails, rebuilt on each call since `ClientError` is not `Clone`.
#[derive(Debug, Clone)]
pub(crate) enum StubFailure {
    Status(u16, String),
    /// Response body that is not valid JSON.
    Malformed(String),
}

impl StubFailure {
    fn to_error(&self) -> ClientError {
        match self {
            Self::Status(status, message) => ClientError::api_error(*status, message.clone()),
            Self::Malformed(body) => match serde_json::from_str::<serde_json::Value>(body) {
                Err(e) => e.into(),
                Ok(_) => ClientError::config_error("stub body parsed as JSON"),
            },
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct StubLibrary {
    pub collections: Vec<serde_json::Value>,
    pub items: Vec<LibraryRecord>,
    pub item: Option<LibraryRecord>,
    pub failure: Option<StubFailure>,
    pub(crate) calls: AtomicUsize,
    pub(crate) queries: Mutex<Vec<ItemQuery>>,
}

impl StubLibrary {
    pub fn with_items(items: Vec<LibraryRecord>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn failing(failure: StubFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<ItemQuery> {
        self.queries.lock().unwrap().last().cloned()
    }

    fn check(&self) -> ClientResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LibraryApi for StubLibrary {
    async fn collections(&self) -> ClientResult<Vec<serde_json::Value>> {
        self.check()?;
        Ok(self.collections.clone())
    }

    async fn collection_items(&self, _collection_key: &str) -> ClientResult<Vec<LibraryRecord>> {
        self.check()?;
        Ok(self.items.clone())
    }

    async fn item(&self, _item_key: &str) -> ClientResult<Option<LibraryRecord>> {
        self.check()?;
        Ok(self.item.clone())
    }

    async fn items(&self, query: &ItemQuery) -> ClientResult<Vec<LibraryRecord>> {
        self.queries.lock().unwrap().push(query.clone());
        self.check()?;
        Ok(self.items.clone())
    }
}
