//! GNews API client error types.

use std::sync::Arc;

/// Errors from the GNews API client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GNewsError {
    /// No API token configured.
    #[error("missing API key: NEWSGATE_API_TOKEN not set")]
    MissingApiKey,

    /// Base URL or request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed (invalid or expired token).
    #[error("authentication failed: {}", .message.as_deref().unwrap_or("invalid API token"))]
    AuthError { message: Option<String> },

    /// Rate limited by GNews.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// Other non-success HTTP response.
    #[error("HTTP error: {status}{}", .message.as_ref().map(|m| format!(" ({m})")).unwrap_or_default())]
    HttpError { status: u16, message: Option<String> },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body is not a valid news envelope.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GNewsError {
    /// Whether another attempt may succeed.
    ///
    /// Timeouts, transport failures, 429 and 5xx are transient. Malformed
    /// bodies and other 4xx responses fail the same way every time.
    pub fn is_retryable(&self) -> bool {
        match self {
            GNewsError::Timeout | GNewsError::Network(_) | GNewsError::RateLimited => true,
            GNewsError::HttpError { status, .. } => *status >= 500,
            GNewsError::MissingApiKey
            | GNewsError::InvalidRequest(_)
            | GNewsError::AuthError { .. }
            | GNewsError::Parse(_) => false,
        }
    }
}

impl From<reqwest::Error> for GNewsError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API token.
        if err.is_timeout() { GNewsError::Timeout } else { GNewsError::Network(Arc::new(err.without_url())) }
    }
}

impl From<GNewsError> for newsgate_core::Error {
    fn from(err: GNewsError) -> Self {
        newsgate_core::Error::UpstreamFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GNewsError::MissingApiKey;
        assert!(err.to_string().contains("API key"));

        let err = GNewsError::HttpError { status: 400, message: Some("bad query".into()) };
        assert_eq!(err.to_string(), "HTTP error: 400 (bad query)");

        let err = GNewsError::HttpError { status: 502, message: None };
        assert_eq!(err.to_string(), "HTTP error: 502");

        let err = GNewsError::AuthError { message: None };
        assert_eq!(err.to_string(), "authentication failed: invalid API token");
    }

    #[test]
    fn test_retry_classification() {
        assert!(GNewsError::Timeout.is_retryable());
        assert!(GNewsError::RateLimited.is_retryable());
        assert!(GNewsError::HttpError { status: 500, message: None }.is_retryable());
        assert!(GNewsError::HttpError { status: 503, message: None }.is_retryable());

        assert!(!GNewsError::HttpError { status: 400, message: None }.is_retryable());
        assert!(!GNewsError::HttpError { status: 404, message: None }.is_retryable());
        assert!(!GNewsError::AuthError { message: None }.is_retryable());
        assert!(!GNewsError::Parse("expected value".into()).is_retryable());
        assert!(!GNewsError::MissingApiKey.is_retryable());
    }

    #[test]
    fn test_into_core_error() {
        let err: newsgate_core::Error = GNewsError::Timeout.into();
        assert_eq!(err, newsgate_core::Error::UpstreamFailure("request timeout".into()));
        assert_eq!(err.kind(), newsgate_core::ErrorKind::UpstreamFailure);
    }
}
