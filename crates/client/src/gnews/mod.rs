//! GNews API client.
//!
//! Provides the upstream implementation of [`NewsUpstream`] over the GNews v4
//! REST API.
//!
//! ### Behavior
//!
//! - **Endpoints**: `{base}/top-headlines` and `{base}/search`
//! - **Authentication**: `token` query parameter.
//! - **Search**: the search parameter is sent as a quoted phrase; title mode
//!   adds `in=title` as a hint only.
//! - **Resilience**:
//!   - Per-attempt timeout on the underlying HTTP client.
//!   - Retries timeouts, transport errors, 429 and 5xx with exponential backoff.
//!   - Never retries auth failures, other 4xx, or malformed bodies.
//!   - Optional minimum spacing between requests.

pub mod error;
pub mod request;
pub mod response;
pub mod retry;

pub use error::GNewsError;
pub use request::{HeadlinesRequest, SearchRequest};
pub use retry::RetryPolicy;

use async_trait::async_trait;
use newsgate_core::{AppConfig, NewsEnvelope, NewsUpstream, SearchMode};
use reqwest::header;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use url::Url;

/// Default base URL for the GNews API.
const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Default per-attempt timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "newsgate/0.1";

/// GNews client configuration.
#[derive(Debug, Clone)]
pub struct GNewsConfig {
    /// API token.
    pub api_key: String,
    /// Base URL (default: https://gnews.io/api/v4).
    pub base_url: String,
    /// Per-attempt timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string (default: newsgate/0.x).
    pub user_agent: String,
    /// Language filter applied to every request.
    pub lang: Option<String>,
    /// Country filter applied to every request.
    pub country: Option<String>,
    /// Retry behavior for transient failures.
    pub retry: RetryPolicy,
    /// Minimum spacing between requests (zero disables).
    pub min_request_interval: Duration,
}

impl Default for GNewsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            lang: None,
            country: None,
            retry: RetryPolicy::default(),
            min_request_interval: Duration::ZERO,
        }
    }
}

impl GNewsConfig {
    /// Build client configuration from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, GNewsError> {
        let api_key = config.require_api_token().map_err(|_| GNewsError::MissingApiKey)?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            lang: config.lang.clone(),
            country: config.country.clone(),
            retry: RetryPolicy {
                max_retries: config.max_retries,
                initial_backoff: config.retry_backoff(),
                max_backoff: config.retry_max_backoff(),
            },
            min_request_interval: config.min_request_interval(),
        })
    }
}

/// Rate limiter to enforce request intervals.
#[derive(Debug)]
struct RateLimiter {
    last_request: Mutex<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Mutex::new(Instant::now().checked_sub(min_interval).unwrap_or_else(Instant::now)),
            min_interval,
        }
    }

    /// Acquire permission to make a request, waiting if necessary.
    async fn acquire(&self) {
        if self.min_interval.is_zero() {
            return;
        }
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();
        if elapsed < self.min_interval {
            tokio::time::sleep(self.min_interval - elapsed).await;
        }
        *last = Instant::now();
    }
}

/// GNews API client.
#[derive(Debug, Clone)]
pub struct GNewsClient {
    http: reqwest::Client,
    config: GNewsConfig,
    base_url: Url,
    rate_limiter: Arc<RateLimiter>,
}

impl GNewsClient {
    /// Create a new GNews client with the given configuration.
    pub fn new(config: GNewsConfig) -> Result<Self, GNewsError> {
        if config.api_key.is_empty() {
            return Err(GNewsError::MissingApiKey);
        }

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| GNewsError::InvalidRequest(format!("invalid base URL {}: {e}", config.base_url)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(GNewsError::from)?;

        let rate_limiter = Arc::new(RateLimiter::new(config.min_request_interval));

        Ok(Self { http, config, base_url, rate_limiter })
    }

    /// Create a new GNews client from the application config.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, GNewsError> {
        Self::new(GNewsConfig::from_app_config(config)?)
    }

    pub fn config(&self) -> &GNewsConfig {
        &self.config
    }

    /// Latest headlines.
    pub async fn top_headlines(&self, max: u8) -> Result<NewsEnvelope, GNewsError> {
        let req = HeadlinesRequest { max, lang: self.config.lang.clone(), country: self.config.country.clone() };
        let request = self.build_request("top-headlines", &req)?;
        self.execute(request).await
    }

    /// Phrase search; `mode` only decides whether the title hint is sent.
    pub async fn search(&self, search_param: &str, mode: SearchMode) -> Result<NewsEnvelope, GNewsError> {
        let req = SearchRequest {
            lang: self.config.lang.clone(),
            country: self.config.country.clone(),
            ..SearchRequest::new(search_param, mode)
        };
        let request = self.build_request("search", &req)?;
        self.execute(request).await
    }

    /// Build a GET request for `endpoint` carrying `params` and the token.
    fn build_request<P: Serialize>(&self, endpoint: &str, params: &P) -> Result<reqwest::Request, GNewsError> {
        let url = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), endpoint);

        self.http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(params)
            .query(&[("token", self.config.api_key.as_str())])
            .build()
            .map_err(|e| GNewsError::InvalidRequest(e.without_url().to_string()))
    }

    /// Send `request`, retrying transient failures per the retry policy.
    async fn execute(&self, request: reqwest::Request) -> Result<NewsEnvelope, GNewsError> {
        let policy = self.config.retry;
        let mut retry = 0;

        loop {
            let attempt = request
                .try_clone()
                .ok_or_else(|| GNewsError::InvalidRequest("request body is not cloneable".into()))?;

            match self.send_once(attempt).await {
                Ok(envelope) => return Ok(envelope),
                Err(err) if err.is_retryable() && retry < policy.max_retries => {
                    let delay = policy.backoff(retry);
                    retry += 1;
                    tracing::warn!(
                        endpoint = request.url().path(),
                        error = %err,
                        attempt = retry,
                        max_attempts = policy.max_attempts(),
                        delay_ms = delay.as_millis() as u64,
                        "upstream request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    tracing::debug!(endpoint = request.url().path(), error = %err, retry, "upstream request failed");
                    return Err(err);
                }
            }
        }
    }

    /// One attempt: rate limit, send, classify status, decode.
    async fn send_once(&self, request: reqwest::Request) -> Result<NewsEnvelope, GNewsError> {
        self.rate_limiter.acquire().await;

        let start = Instant::now();
        let path = request.url().path().to_string();

        let http_response = self.http.execute(request).await?;

        let status = http_response.status();
        tracing::debug!("GNews response status: {} for {}", status, path);

        if !status.is_success() {
            let body = http_response.bytes().await.unwrap_or_default();
            let message = response::error_message(&body);

            return Err(match status.as_u16() {
                401 | 403 => GNewsError::AuthError { message },
                429 => GNewsError::RateLimited,
                code => GNewsError::HttpError { status: code, message },
            });
        }

        let bytes = http_response.bytes().await?;
        let envelope = response::parse_envelope(&bytes)?;

        tracing::debug!("{} completed in {:?}, {} articles", path, start.elapsed(), envelope.articles.len());

        Ok(envelope)
    }
}

#[async_trait]
impl NewsUpstream for GNewsClient {
    async fn fetch_top_headlines(&self, max: u8) -> Result<NewsEnvelope, newsgate_core::Error> {
        Ok(self.top_headlines(max).await?)
    }

    async fn fetch_search(&self, search_param: &str, mode: SearchMode) -> Result<NewsEnvelope, newsgate_core::Error> {
        Ok(self.search(search_param, mode).await?)
    }
}
