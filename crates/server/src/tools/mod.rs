//! MCP tool implementations.
//!
//! This module contains all tools exposed by the newsgate server.

pub mod cache;
pub mod headlines;
pub mod search;

pub use cache::{CachePurgeParams, purge_impl, stats_impl};
pub use headlines::{HeadlinesParams, headlines_impl};
pub use search::{SearchParams, find_by_author_impl, find_by_title_impl, find_impl};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::error::ToolError;

/// Wrap a serializable value as a pretty-printed JSON text result.
fn json_result<T: Serialize + ?Sized>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| ToolError::Serialize(e.to_string()))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}
