//! newsgate server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use newsgate_client::GNewsClient;
use newsgate_core::{AppConfig, CacheStore, NewsService};
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod error;
mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let client = GNewsClient::from_app_config(&config)?;
    let cache = CacheStore::new(config.cache_settings());
    let service = NewsService::new(Arc::new(client), cache);

    tracing::info!(
        base_url = %config.base_url,
        max_retries = config.max_retries,
        cache_ttl_secs = ?config.cache_ttl_secs,
        "Starting newsgate server on stdio transport"
    );

    let handler = handler::NewsGateServer::new(service);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
