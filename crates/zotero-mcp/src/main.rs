//! Zotero MCP Server
//!
//! Model Context Protocol server exposing a personal Zotero library
//! (collections, items, search, recently added) to LLM agents over stdio.

use std::time::Duration;

use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

use zotero_client::config::DEFAULT_API_BASE_URL;
use zotero_client::{ClientConfig, ClientResult};
use zotero_mcp::server::ZoteroMcpServer;

const DEFAULT_LOG_DIRECTIVES: &str = "zotero_mcp=info,zotero_client=info";

#[derive(Parser)]
#[command(name = "zotero-mcp", version, about = "MCP server for your Zotero library")]
struct Cli {
    /// Zotero API key (https://www.zotero.org/settings/keys)
    #[arg(long, env = "ZOTERO_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Numeric Zotero user ID
    #[arg(long, env = "ZOTERO_USER_ID")]
    user_id: Option<String>,

    /// Zotero Web API root
    #[arg(long, env = "ZOTERO_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "ZOTERO_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Page size when listing collections and collection items (1-100)
    #[arg(long, env = "ZOTERO_PAGE_SIZE", default_value_t = 100)]
    page_size: u32,

    /// Maximum number of search results (1-100)
    #[arg(long, env = "ZOTERO_SEARCH_LIMIT", default_value_t = 25)]
    search_limit: u32,
}

impl Cli {
    fn client_config(self) -> ClientResult<ClientConfig> {
        Ok(ClientConfig::new(
            self.api_key.unwrap_or_default(),
            self.user_id.unwrap_or_default(),
        )?
        .with_base_url(&self.api_base_url)?
        .with_timeout(Duration::from_secs(self.timeout_secs))
        .with_page_size(self.page_size)
        .with_search_limit(self.search_limit))
    }
}

/// `RUST_LOG` replaces the default directives entirely. Unset, blank or
/// unparseable values fall back to info for this server and its client.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVES))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads the environment
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    tracing::info!("zotero-mcp starting (stdio transport)");

    let server = cli
        .client_config()
        .and_then(ZoteroMcpServer::connect)
        .inspect_err(|e| tracing::error!(error = %e, "Fatal error during startup"))?;

    let transport = rmcp::transport::io::stdio();
    let service = server.serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
