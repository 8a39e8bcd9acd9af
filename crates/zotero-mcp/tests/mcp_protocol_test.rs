//! MCP protocol integration test.
//!
//! Verifies that the server correctly handles the MCP protocol round-trip:
//! tool discovery via `list_tools` and tool invocation via `call_tool`, backed
//! by an in-memory library.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{CallToolRequestParams, ClientInfo};
use rmcp::service::{RoleClient, RunningService};
use rmcp::{ClientHandler, ServiceExt};
use serde_json::{json, Value};

use zotero_client::{ClientError, ClientResult, Creator, ItemQuery, LibraryApi, LibraryRecord};
use zotero_mcp::server::ZoteroMcpServer;

#[derive(Debug)]
struct FixtureLibrary;

fn fixture_record() -> LibraryRecord {
    LibraryRecord {
        key: Some("ITEM0001".to_string()),
        item_type: Some("book".to_string()),
        title: Some("The Art of Computer Programming".to_string()),
        creators: Some(vec![Creator::new("Donald", "Knuth")]),
        date: Some("1968".to_string()),
        date_added: Some("2024-03-01T12:00:00Z".to_string()),
        ..LibraryRecord::default()
    }
}

#[async_trait]
impl LibraryApi for FixtureLibrary {
    async fn collections(&self) -> ClientResult<Vec<Value>> {
        Ok(vec![json!({ "key": "COLL0001", "data": { "name": "Algorithms" } })])
    }

    async fn collection_items(&self, collection_key: &str) -> ClientResult<Vec<LibraryRecord>> {
        match collection_key {
            "COLL0001" => Ok(vec![fixture_record()]),
            _ => Err(ClientError::api_error(404, "Not found")),
        }
    }

    async fn item(&self, item_key: &str) -> ClientResult<Option<LibraryRecord>> {
        Ok((item_key == "ITEM0001").then(fixture_record))
    }

    async fn items(&self, query: &ItemQuery) -> ClientResult<Vec<LibraryRecord>> {
        match query.q.as_deref() {
            Some("knuth") | None => Ok(vec![fixture_record()]),
            Some(_) => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct DummyClient;

impl ClientHandler for DummyClient {
    fn get_info(&self) -> ClientInfo {
        ClientInfo::default()
    }
}

async fn connect() -> anyhow::Result<(
    RunningService<RoleClient, DummyClient>,
    tokio::task::JoinHandle<anyhow::Result<()>>,
)> {
    let (server_transport, client_transport) = tokio::io::duplex(65536);

    let server = ZoteroMcpServer::new(Arc::new(FixtureLibrary));
    let server_handle = tokio::spawn(async move {
        let service = server.serve(server_transport).await?;
        service.waiting().await?;
        anyhow::Ok(())
    });

    let client = DummyClient.serve(client_transport).await?;
    Ok((client, server_handle))
}

async fn call_tool(
    client: &RunningService<RoleClient, DummyClient>,
    name: &str,
    args: Value,
) -> anyhow::Result<(String, Value)> {
    let result = client
        .call_tool(CallToolRequestParams {
            meta: None,
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
            task: None,
        })
        .await?;

    let text = result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.clone())
        .ok_or_else(|| anyhow::anyhow!("No text content in tool response"))?;

    let parsed: Value = serde_json::from_str(&text)?;
    Ok((text, parsed))
}

#[tokio::test]
async fn test_mcp_protocol_list_tools() -> anyhow::Result<()> {
    let (client, server_handle) = connect().await?;

    let tools = client.list_tools(None).await?;
    let mut tool_names: Vec<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    tool_names.sort_unstable();
    assert_eq!(
        tool_names,
        vec![
            "get_collection_items",
            "get_collections",
            "get_item_details",
            "get_recent",
            "search_library",
        ]
    );

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_call_tools() -> anyhow::Result<()> {
    let (client, server_handle) = connect().await?;

    let (text, collections) = call_tool(&client, "get_collections", json!({})).await?;
    assert_eq!(collections[0]["key"], "COLL0001");
    assert!(text.starts_with("[\n  {"), "expected pretty JSON: {text}");

    let (_, items) = call_tool(
        &client,
        "get_collection_items",
        json!({ "collection_key": "COLL0001" }),
    )
    .await?;
    assert_eq!(items[0]["authors"], "Donald Knuth");
    assert!(items[0]["doi"].is_null());

    let (_, missing) = call_tool(
        &client,
        "get_collection_items",
        json!({ "collection_key": "GONE0000" }),
    )
    .await?;
    assert_eq!(missing["status"], "not_found");

    let (_, details) =
        call_tool(&client, "get_item_details", json!({ "item_key": "ITEM0001" })).await?;
    assert_eq!(details["doi"], "No DOI");
    assert_eq!(details["publicationTitle"], "No publication title");

    let (_, search) = call_tool(&client, "search_library", json!({ "query": "knuth" })).await?;
    assert_eq!(search.as_array().map(Vec::len), Some(1));

    let (_, no_hits) = call_tool(&client, "search_library", json!({ "query": "zzz" })).await?;
    assert_eq!(no_hits["error"], "No results found");

    let (_, recent) = call_tool(&client, "get_recent", json!({})).await?;
    assert_eq!(recent[0]["dateAdded"], "2024-03-01T12:00:00Z");

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_mcp_protocol_get_recent_odd_limits_return_json() -> anyhow::Result<()> {
    let (client, server_handle) = connect().await?;

    for limit in [json!(-5), json!(0), json!(2.5), json!(null), json!(1_000_000)] {
        let (_, recent) = call_tool(&client, "get_recent", json!({ "limit": limit })).await?;
        assert_eq!(recent[0]["key"], "ITEM0001", "limit {limit}");
    }

    client.cancel().await?;
    server_handle.await??;
    Ok(())
}
