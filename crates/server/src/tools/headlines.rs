//! news_headlines tool implementation.
//!
//! Returns the latest headlines, served from cache when possible.

use newsgate_core::NewsService;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;
use crate::error::ToolError;

/// Input parameters for news_headlines tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HeadlinesParams {
    /// Number of headlines to return (0-10).
    pub article_count: i64,
}

/// Implementation of the news_headlines tool.
pub async fn headlines_impl(service: &NewsService, params: HeadlinesParams) -> Result<CallToolResult, McpError> {
    let articles = service.top_headlines(params.article_count).await.map_err(ToolError::from)?;
    json_result(articles.as_slice())
}
