//! Retrieval service: validate, look up, fetch on miss, filter, cache.

use std::sync::Arc;

use crate::cache::{Articles, CacheStore, SearchKey};
use crate::{Article, Error, NewsUpstream, SearchMode, filter, validate};

/// Headline and search retrieval over a cached upstream.
///
/// Cheap to clone; clones share the same cache and upstream client.
#[derive(Clone)]
pub struct NewsService {
    upstream: Arc<dyn NewsUpstream>,
    cache: CacheStore,
}

impl NewsService {
    pub fn new(upstream: Arc<dyn NewsUpstream>, cache: CacheStore) -> Self {
        Self { upstream, cache }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Latest headlines, at most `n` of them (`n` in `0..=10`).
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an out-of-range count, `UpstreamFailure` when the
    /// upstream call fails on a cache miss.
    pub async fn top_headlines(&self, n: i64) -> Result<Articles, Error> {
        let count = validate::check_count(n)?;
        let upstream = Arc::clone(&self.upstream);

        self.cache
            .top_headlines
            .get_or_compute(count, || async move {
                let envelope = upstream.fetch_top_headlines(count).await?;
                Ok(Arc::new(envelope.articles))
            })
            .await
    }

    /// Search upstream and filter the results according to `mode`.
    ///
    /// Only filtered, non-empty results are cached; a `NotFound` outcome is
    /// recomputed on the next call.
    pub async fn search(&self, search_param: &str, mode: SearchMode) -> Result<Articles, Error> {
        let key = SearchKey::new(search_param, mode);
        let upstream = Arc::clone(&self.upstream);

        self.cache
            .search_results
            .get_or_compute(key, || async move {
                let envelope = upstream.fetch_search(search_param, mode).await?;
                let articles = filter::apply(&envelope, search_param, mode)?;
                tracing::debug!(
                    search_param,
                    %mode,
                    upstream_count = envelope.articles.len(),
                    kept = articles.len(),
                    "search results filtered"
                );
                Ok(Arc::new(articles))
            })
            .await
    }

    /// The first article whose title equals `title` exactly.
    pub async fn find_by_title(&self, title: &str) -> Result<Article, Error> {
        let articles = self.search(title, SearchMode::ByTitle).await?;
        articles
            .first()
            .cloned()
            .ok_or_else(|| Error::NotFound("search parameter does not match any found article's title".into()))
    }

    /// Every article published by `author`, in upstream order.
    pub async fn find_by_author(&self, author: &str) -> Result<Articles, Error> {
        self.search(author, SearchMode::ByAuthor).await
    }

    /// Upstream keyword search without client-side filtering.
    pub async fn find(&self, keyword: &str) -> Result<Articles, Error> {
        self.search(keyword, SearchMode::Regular).await
    }
}
