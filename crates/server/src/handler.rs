//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::tools::{
    CachePurgeParams, HeadlinesParams, SearchParams, find_by_author_impl, find_by_title_impl, find_impl,
    headlines_impl, purge_impl, stats_impl,
};

use newsgate_core::NewsService;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for newsgate.
#[derive(Clone)]
pub struct NewsGateServer {
    service: NewsService,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl NewsGateServer {
    /// Create a new server handler around a retrieval service.
    pub fn new(service: NewsService) -> Self {
        Self { service, tool_router: Self::tool_router() }
    }

    #[tool(description = "Latest news headlines. article_count must be between 0 and 10. Returns a JSON array of articles.")]
    async fn news_headlines(&self, params: Parameters<HeadlinesParams>) -> Result<CallToolResult, McpError> {
        headlines_impl(&self.service, params.0).await
    }

    #[tool(description = "Find the article whose title is exactly search_param (case-sensitive). Returns one article.")]
    async fn news_find_by_title(&self, params: Parameters<SearchParams>) -> Result<CallToolResult, McpError> {
        find_by_title_impl(&self.service, params.0).await
    }

    #[tool(description = "Find all articles whose source name is exactly search_param, in upstream order.")]
    async fn news_find_by_author(&self, params: Parameters<SearchParams>) -> Result<CallToolResult, McpError> {
        find_by_author_impl(&self.service, params.0).await
    }

    #[tool(description = "Keyword search passed through to the news API without extra filtering.")]
    async fn news_find(&self, params: Parameters<SearchParams>) -> Result<CallToolResult, McpError> {
        find_impl(&self.service, params.0).await
    }

    #[tool(description = "Number of cached entries per namespace (topHeadlines, searchResults).")]
    async fn cache_stats(&self) -> Result<CallToolResult, McpError> {
        stats_impl(&self.service).await
    }

    #[tool(description = "Drop cached results. Optional namespace: topHeadlines or searchResults; omit for both.")]
    async fn cache_purge(&self, params: Parameters<CachePurgeParams>) -> Result<CallToolResult, McpError> {
        purge_impl(&self.service, params.0).await
    }
}

impl ServerHandler for NewsGateServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "newsgate".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
