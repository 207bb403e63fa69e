//! News records as returned by the upstream API.
//!
//! Field names follow the upstream JSON envelope (camelCase), so the same
//! types are used for deserializing upstream responses and for serializing
//! tool output.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Publisher of an article. The name doubles as the author-search key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

/// A single news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    pub published_at: DateTime<Utc>,
    pub source: Source,
}

/// Response envelope shared by the headlines and search endpoints.
///
/// `articles` keeps upstream order; the title filter relies on it for
/// first-match semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEnvelope {
    #[serde(default)]
    pub total_articles: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Selects the filter applied to search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchMode {
    /// Trust upstream matching, no client-side filter.
    Regular,
    /// Exact, case-sensitive title match; first hit only.
    ByTitle,
    /// Exact source-name match; every hit in upstream order.
    ByAuthor,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Regular => "REGULAR",
            SearchMode::ByTitle => "BY_TITLE",
            SearchMode::ByAuthor => "BY_AUTHOR",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
