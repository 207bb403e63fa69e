//! news_find, news_find_by_title and news_find_by_author tool implementations.
//!
//! All three go through the same cached search; they differ only in the
//! filter mode and in the shape of the result.

use newsgate_core::NewsService;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;
use crate::error::ToolError;

/// Input parameters for the search tools.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Keyword, exact title, or exact source name, depending on the tool.
    pub search_param: String,
}

/// Implementation of the news_find_by_title tool. Returns a single article.
pub async fn find_by_title_impl(service: &NewsService, params: SearchParams) -> Result<CallToolResult, McpError> {
    let article = service.find_by_title(&params.search_param).await.map_err(ToolError::from)?;
    json_result(&article)
}

/// Implementation of the news_find_by_author tool.
pub async fn find_by_author_impl(service: &NewsService, params: SearchParams) -> Result<CallToolResult, McpError> {
    let articles = service.find_by_author(&params.search_param).await.map_err(ToolError::from)?;
    json_result(articles.as_slice())
}

/// Implementation of the news_find tool.
pub async fn find_impl(service: &NewsService, params: SearchParams) -> Result<CallToolResult, McpError> {
    let articles = service.find(&params.search_param).await.map_err(ToolError::from)?;
    json_result(articles.as_slice())
}
