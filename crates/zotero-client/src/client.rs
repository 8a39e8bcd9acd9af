//! REST transport for the Zotero Web API v3.
//!
//! One `ZoteroClient` is built at startup and shared for the life of the
//! process. `reqwest::Client` pools connections internally and is safe to use
//! from concurrent tool calls without extra locking.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::api::{ItemQuery, LibraryApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::records::{ItemEnvelope, LibraryRecord};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("zotero-api-key");
const API_VERSION_HEADER: HeaderName = HeaderName::from_static("zotero-api-version");
const TOTAL_RESULTS_HEADER: &str = "total-results";
const API_VERSION: &str = "3";

/// Zotero Web API client scoped to one user library.
#[derive(Debug)]
pub struct ZoteroClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ZoteroClient {
    /// Build the HTTP client with authentication headers baked in.
    ///
    /// Performs no network activity.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut api_key = HeaderValue::from_str(config.api_key()).map_err(|_| {
            ClientError::config_error("ZOTERO_API_KEY contains characters not valid in a header")
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("zotero-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, config })
    }

    async fn get(&self, url: Url) -> ClientResult<Response> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        log_backoff(&response);

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match body.trim() {
            "" => status.canonical_reason().unwrap_or("Request failed").to_string(),
            text => text.to_string(),
        };
        Err(ClientError::api_error(status.as_u16(), message))
    }

    /// Walk a paginated endpoint with `start`/`limit` until `Total-Results`
    /// items have been read or the server returns an empty page.
    async fn get_all<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<Vec<T>> {
        let page_size = self.config.page_size();
        let mut results: Vec<T> = Vec::new();

        loop {
            let mut url = self.config.library_url(segments)?;
            url.query_pairs_mut()
                .append_pair("start", &results.len().to_string())
                .append_pair("limit", &page_size.to_string());

            let response = self.get(url).await?;
            let total = total_results(&response);
            let page: Vec<T> = response.json().await?;
            let fetched = page.len();
            results.extend(page);

            match total {
                Some(total) if fetched > 0 && (results.len() as u64) < total => continue,
                _ => break,
            }
        }

        debug!(count = results.len(), path = ?segments, "Fetched all pages");
        Ok(results)
    }
}

#[async_trait]
impl LibraryApi for ZoteroClient {
    async fn collections(&self) -> ClientResult<Vec<serde_json::Value>> {
        self.get_all(&["collections"]).await
    }

    async fn collection_items(&self, collection_key: &str) -> ClientResult<Vec<LibraryRecord>> {
        let envelopes: Vec<ItemEnvelope> = self
            .get_all(&["collections", collection_key, "items"])
            .await?;
        Ok(envelopes.into_iter().map(ItemEnvelope::into_record).collect())
    }

    async fn item(&self, item_key: &str) -> ClientResult<Option<LibraryRecord>> {
        let url = self.config.library_url(&["items", item_key])?;
        let response = self.get(url).await?;
        let body: serde_json::Value = response.json().await?;
        if body.is_null() {
            return Ok(None);
        }
        let envelope: ItemEnvelope = serde_json::from_value(body)?;
        Ok(Some(envelope.into_record()))
    }

    async fn items(&self, query: &ItemQuery) -> ClientResult<Vec<LibraryRecord>> {
        let mut url = self.config.library_url(&["items"])?;
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query.to_pairs() {
                pairs.append_pair(name, &value);
            }
            if query.limit.is_none() {
                pairs.append_pair("limit", &self.config.search_limit().to_string());
            }
        }

        let response = self.get(url).await?;
        let envelopes: Vec<ItemEnvelope> = response.json().await?;
        Ok(envelopes.into_iter().map(ItemEnvelope::into_record).collect())
    }
}

fn total_results(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(TOTAL_RESULTS_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Zotero asks clients to slow down with `Backoff` or `Retry-After`. Calls are
/// never retried here, so the request is only logged.
fn log_backoff(response: &Response) {
    for header in ["backoff", "retry-after"] {
        if let Some(seconds) = response.headers().get(header).and_then(|v| v.to_str().ok()) {
            warn!(
                header,
                seconds,
                status = response.status().as_u16(),
                "Zotero API requested backoff"
            );
        }
    }
}
