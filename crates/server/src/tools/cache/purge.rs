//! cache_purge tool implementation.
//!
//! Drops cached results for one namespace or for all of them.

use newsgate_core::{NamespaceId, NewsService};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::tools::json_result;

/// Parameters for the cache_purge tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeParams {
    /// Namespace to purge: "topHeadlines" or "searchResults". Omit to purge both.
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Output from the cache_purge tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeOutput {
    /// Number of entries removed.
    pub deleted: u64,
}

/// Implementation of the cache_purge tool.
pub async fn purge_impl(service: &NewsService, params: CachePurgeParams) -> Result<CallToolResult, McpError> {
    let namespace = params
        .namespace
        .as_deref()
        .map(str::parse::<NamespaceId>)
        .transpose()
        .map_err(ToolError::from)?;

    let deleted = service.cache().purge(namespace).await;
    tracing::info!(namespace = ?namespace, deleted, "cache purged");

    json_result(&CachePurgeOutput { deleted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::{article, result_text, service};

    fn deleted(result: &CallToolResult) -> u64 {
        let output: CachePurgeOutput = serde_json::from_str(&result_text(result)).unwrap();
        output.deleted
    }

    #[tokio::test]
    async fn test_purge_single_namespace() {
        let (svc, upstream) = service(vec![article("A", "X")]);
        svc.top_headlines(1).await.unwrap();
        svc.find("A").await.unwrap();

        let params = CachePurgeParams { namespace: Some("topHeadlines".into()) };
        let result = purge_impl(&svc, params).await.unwrap();
        assert_eq!(deleted(&result), 1);

        svc.find("A").await.unwrap();
        svc.top_headlines(1).await.unwrap();
        assert_eq!(upstream.calls.load(std::sync::atomic::Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_purge_all() {
        let (svc, _) = service(vec![article("A", "X")]);
        svc.top_headlines(1).await.unwrap();
        svc.find_by_author("X").await.unwrap();

        let result = purge_impl(&svc, CachePurgeParams::default()).await.unwrap();
        assert_eq!(deleted(&result), 2);
    }

    #[tokio::test]
    async fn test_purge_unknown_namespace() {
        let (svc, _) = service(Vec::new());
        let params = CachePurgeParams { namespace: Some("articles".into()) };

        let err = purge_impl(&svc, params).await.unwrap_err();
        assert_eq!(err.code.0, -32602);
    }
}
