//! Per-mode filtering of upstream search results.
//!
//! Upstream matching is fuzzy (and `in=title` is only a hint), so title and
//! author searches are re-checked here with exact string equality. Regular
//! searches pass through untouched.

use crate::{Article, Error, NewsEnvelope, SearchMode};

const TITLE_NOT_FOUND: &str = "search parameter does not match any found article's title";
const AUTHOR_NOT_FOUND: &str = "search parameter does not match any found article's author";
const NO_MATCH: &str = "search parameter does not match any found article";

/// Apply the policy for `mode` to an upstream envelope.
///
/// The envelope is only read; the returned articles are clones in upstream order.
///
/// # Errors
///
/// Returns `Error::NotFound` with a mode-specific message when nothing survives the filter.
pub fn apply(envelope: &NewsEnvelope, search_param: &str, mode: SearchMode) -> Result<Vec<Article>, Error> {
    match mode {
        SearchMode::ByTitle => by_title(envelope, search_param).map(|article| vec![article]),
        SearchMode::ByAuthor => by_author(envelope, search_param),
        SearchMode::Regular => regular(envelope),
    }
}

/// First article whose title equals `title` exactly.
pub fn by_title(envelope: &NewsEnvelope, title: &str) -> Result<Article, Error> {
    envelope
        .articles
        .iter()
        .find(|a| a.title == title)
        .cloned()
        .ok_or_else(|| Error::NotFound(TITLE_NOT_FOUND.into()))
}

/// Every article whose source name equals `author` exactly.
pub fn by_author(envelope: &NewsEnvelope, author: &str) -> Result<Vec<Article>, Error> {
    let matches: Vec<Article> = envelope
        .articles
        .iter()
        .filter(|a| a.source.name == author)
        .cloned()
        .collect();

    if matches.is_empty() {
        return Err(Error::NotFound(AUTHOR_NOT_FOUND.into()));
    }
    Ok(matches)
}

/// Upstream results unchanged, provided there are any.
pub fn regular(envelope: &NewsEnvelope) -> Result<Vec<Article>, Error> {
    if envelope.articles.is_empty() {
        return Err(Error::NotFound(NO_MATCH.into()));
    }
    Ok(envelope.articles.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use chrono::{TimeZone, Utc};

    fn article(title: &str, source: &str) -> Article {
        Article {
            title: title.into(),
            description: format!("{title} description"),
            content: String::new(),
            url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
            image: String::new(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            source: Source { name: source.into(), url: "https://example.com".into() },
        }
    }

    fn envelope(articles: Vec<Article>) -> NewsEnvelope {
        NewsEnvelope { total_articles: articles.len() as u64, articles }
    }

    #[test]
    fn test_by_title_exact_match() {
        let env = envelope(vec![article("A", "X"), article("B", "Y")]);
        let result = apply(&env, "A", SearchMode::ByTitle).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "A");
    }

    #[test]
    fn test_by_title_returns_first_of_duplicates() {
        let env = envelope(vec![article("Same", "First"), article("Same", "Second")]);
        let result = apply(&env, "Same", SearchMode::ByTitle).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].source.name, "First");
    }

    #[test]
    fn test_by_title_no_match() {
        let env = envelope(vec![article("A", "X"), article("B", "Y")]);
        let err = apply(&env, "C", SearchMode::ByTitle).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref msg) if msg.ends_with("title")));
    }

    #[test]
    fn test_by_title_is_case_sensitive_and_not_substring() {
        let env = envelope(vec![article("Breaking News", "X")]);
        assert!(apply(&env, "breaking news", SearchMode::ByTitle).is_err());
        assert!(apply(&env, "Breaking", SearchMode::ByTitle).is_err());
        assert!(apply(&env, "Breaking News ", SearchMode::ByTitle).is_err());
    }

    #[test]
    fn test_by_author_preserves_order() {
        let env = envelope(vec![article("one", "X"), article("two", "Y"), article("three", "X")]);
        let result = apply(&env, "X", SearchMode::ByAuthor).unwrap();
        let titles: Vec<&str> = result.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "three"]);
    }

    #[test]
    fn test_by_author_no_match() {
        let env = envelope(vec![article("one", "X")]);
        let err = apply(&env, "x", SearchMode::ByAuthor).unwrap_err();
        assert!(matches!(err, Error::NotFound(ref msg) if msg.ends_with("author")));
    }

    #[test]
    fn test_regular_passes_through() {
        let env = envelope(vec![article("one", "X"), article("two", "Y")]);
        let result = apply(&env, "anything", SearchMode::Regular).unwrap();
        assert_eq!(result, env.articles);
    }

    #[test]
    fn test_regular_empty_is_not_found() {
        let err = apply(&NewsEnvelope::default(), "anything", SearchMode::Regular).unwrap_err();
        assert_eq!(err, Error::NotFound(NO_MATCH.into()));
    }

    #[test]
    fn test_filter_leaves_envelope_untouched() {
        let env = envelope(vec![article("one", "X"), article("two", "Y")]);
        let before = env.clone();
        let _ = apply(&env, "X", SearchMode::ByAuthor);
        let _ = apply(&env, "two", SearchMode::ByTitle);
        assert_eq!(env, before);
    }
}
