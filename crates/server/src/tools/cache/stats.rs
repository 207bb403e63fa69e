//! cache_stats tool implementation.
//!
//! Reports how many entries each cache namespace holds.

use newsgate_core::NewsService;
use rmcp::{ErrorData as McpError, model::CallToolResult};

use crate::tools::json_result;

/// Implementation of the cache_stats tool.
pub async fn stats_impl(service: &NewsService) -> Result<CallToolResult, McpError> {
    let stats = service.cache().stats().await;
    json_result(&stats)
}
