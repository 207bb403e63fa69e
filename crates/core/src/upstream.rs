//! Seam between the retrieval service and the news API.

use async_trait::async_trait;

use crate::{Error, NewsEnvelope, SearchMode};

/// A source of raw, unfiltered news envelopes.
///
/// Implementations own transport concerns (timeouts, retries, rate limits)
/// and report anything that went wrong as `Error::UpstreamFailure`.
#[async_trait]
pub trait NewsUpstream: Send + Sync {
    /// Latest headlines, at most `max` of them.
    async fn fetch_top_headlines(&self, max: u8) -> Result<NewsEnvelope, Error>;

    /// Keyword search. `mode` may only be used as a server-side hint; results
    /// are filtered again by the caller.
    async fn fetch_search(&self, search_param: &str, mode: SearchMode) -> Result<NewsEnvelope, Error>;
}
