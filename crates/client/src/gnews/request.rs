//! GNews API request parameters.

use newsgate_core::SearchMode;
use serde::Serialize;

/// Query parameters for `/top-headlines`.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct HeadlinesRequest {
    /// Number of articles to return (0-10 on the free tier).
    pub max: u8,

    /// Article language (ISO 639-1, e.g., "en").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Country of publication (ISO 3166-1 alpha-2, e.g., "us").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Query parameters for `/search`.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Search expression. Always a quoted phrase.
    pub q: String,

    /// Fields upstream should match against. Only `title` is ever sent.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_fields: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl SearchRequest {
    /// Phrase search for `search_param`, with a title hint in title mode.
    pub fn new(search_param: &str, mode: SearchMode) -> Self {
        Self {
            q: format!("\"{search_param}\""),
            in_fields: (mode == SearchMode::ByTitle).then(|| "title".to_string()),
            ..Default::default()
        }
    }
}
