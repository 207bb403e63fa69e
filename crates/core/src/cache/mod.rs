//! In-memory result cache for headlines and searches.
//!
//! Backed by moka. Each operation owns a typed [`Namespace`], so a headline
//! count can never collide with a search key. Values are the filtered
//! article lists exactly as returned to callers.

pub mod namespace;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use namespace::{CacheSettings, Namespace};

use crate::{Article, Error, SearchMode};

/// Cached article list, shared between the cache and its readers.
pub type Articles = Arc<Vec<Article>>;

/// Key of the "searchResults" namespace. Compared verbatim, no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub query: String,
    pub mode: SearchMode,
}

impl SearchKey {
    pub fn new(query: impl Into<String>, mode: SearchMode) -> Self {
        Self { query: query.into(), mode }
    }
}

/// Names of the cache namespaces, as exposed to admin tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamespaceId {
    #[serde(rename = "topHeadlines")]
    TopHeadlines,
    #[serde(rename = "searchResults")]
    SearchResults,
}

impl NamespaceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamespaceId::TopHeadlines => "topHeadlines",
            NamespaceId::SearchResults => "searchResults",
        }
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamespaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topHeadlines" => Ok(NamespaceId::TopHeadlines),
            "searchResults" => Ok(NamespaceId::SearchResults),
            other => Err(Error::InvalidInput(format!(
                "unknown cache namespace: {other} (expected topHeadlines or searchResults)"
            ))),
        }
    }
}

/// Entry counts per namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub top_headlines: u64,
    pub search_results: u64,
}

/// The process-wide result cache.
#[derive(Debug, Clone)]
pub struct CacheStore {
    pub top_headlines: Namespace<u8, Articles>,
    pub search_results: Namespace<SearchKey, Articles>,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(CacheSettings::default())
    }
}

impl CacheStore {
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            top_headlines: Namespace::new(NamespaceId::TopHeadlines.as_str(), settings),
            search_results: Namespace::new(NamespaceId::SearchResults.as_str(), settings),
        }
    }

    pub async fn stats(&self) -> CacheStats {
        CacheStats { top_headlines: self.top_headlines.len().await, search_results: self.search_results.len().await }
    }

    /// Drop the entries of one namespace, or of all of them when `namespace` is `None`.
    ///
    /// Returns the number of entries removed.
    pub async fn purge(&self, namespace: Option<NamespaceId>) -> u64 {
        match namespace {
            Some(NamespaceId::TopHeadlines) => self.top_headlines.purge().await,
            Some(NamespaceId::SearchResults) => self.search_results.purge().await,
            None => self.top_headlines.purge().await + self.search_results.purge().await,
        }
    }
}
