//! Client configuration for a single user's personal Zotero library.
//!
//! Credentials are validated at construction so a misconfigured process fails
//! before any network activity.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Public Zotero Web API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.zotero.org";

/// Largest page the Zotero API will return for a single request.
pub const MAX_PAGE_SIZE: u32 = 100;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SEARCH_LIMIT: u32 = 25;

const MISSING_CREDENTIALS: &str = "Missing ZOTERO_API_KEY or ZOTERO_USER_ID environment variables";

/// Resolved configuration for [`crate::ZoteroClient`].
#[derive(Debug)]
pub struct ClientConfig {
    api_key: SecretString,
    user_id: String,
    base_url: Url,
    timeout: Duration,
    page_size: u32,
    search_limit: u32,
}

impl ClientConfig {
    /// Validate credentials and build a config with default endpoint settings.
    ///
    /// Both values are required; empty or whitespace-only values are treated as
    /// absent.
    pub fn new(api_key: impl Into<String>, user_id: impl Into<String>) -> ClientResult<Self> {
        let api_key = api_key.into();
        let user_id = user_id.into();

        if api_key.trim().is_empty() || user_id.trim().is_empty() {
            return Err(ClientError::config_error(MISSING_CREDENTIALS));
        }

        Ok(Self {
            api_key: SecretString::from(api_key.trim().to_string()),
            user_id: user_id.trim().to_string(),
            base_url: Url::parse(DEFAULT_API_BASE_URL)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: MAX_PAGE_SIZE,
            search_limit: DEFAULT_SEARCH_LIMIT,
        })
    }

    /// Point the client at a different API root (self-hosted proxies, tests).
    pub fn with_base_url(mut self, base_url: &str) -> ClientResult<Self> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::config_error(format!(
                "API base URL '{}' cannot be used as a base",
                base_url
            )));
        }
        self.base_url = parsed;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Page size used when walking paginated endpoints, clamped to `1..=100`.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    /// Maximum results returned by a full-text search, clamped to `1..=100`.
    pub fn with_search_limit(mut self, search_limit: u32) -> Self {
        self.search_limit = search_limit.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn search_limit(&self) -> u32 {
        self.search_limit
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Build `{base}/users/{user_id}/{segments...}`.
    pub fn library_url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::config_error("API base URL cannot be a base"))?
            .pop_if_empty()
            .push("users")
            .push(&self.user_id)
            .extend(segments);
        Ok(url)
    }
}
