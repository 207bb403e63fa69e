//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (NEWSGATE_*)
//! 2. TOML config file (if NEWSGATE_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cache::CacheSettings;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (NEWSGATE_*)
/// 2. TOML config file (if NEWSGATE_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// GNews API token, sent as the `token` query parameter.
    ///
    /// Set via NEWSGATE_API_TOKEN environment variable.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Base URL of the upstream API, without trailing slash.
    ///
    /// Set via NEWSGATE_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent string for upstream requests.
    ///
    /// Set via NEWSGATE_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-attempt upstream timeout in milliseconds.
    ///
    /// Set via NEWSGATE_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after the first attempt for transient upstream failures.
    ///
    /// Set via NEWSGATE_MAX_RETRIES environment variable.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff before the first retry; doubles on each further retry.
    ///
    /// Set via NEWSGATE_RETRY_BACKOFF_MS environment variable.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Upper bound for a single backoff.
    ///
    /// Set via NEWSGATE_RETRY_MAX_BACKOFF_MS environment variable.
    #[serde(default = "default_retry_max_backoff_ms")]
    pub retry_max_backoff_ms: u64,

    /// Minimum spacing between upstream requests (0 disables).
    ///
    /// Set via NEWSGATE_MIN_REQUEST_INTERVAL_MS environment variable.
    #[serde(default)]
    pub min_request_interval_ms: u64,

    /// Article language filter forwarded upstream (e.g. "en").
    ///
    /// Set via NEWSGATE_LANG environment variable.
    #[serde(default)]
    pub lang: Option<String>,

    /// Country filter forwarded upstream (e.g. "us").
    ///
    /// Set via NEWSGATE_COUNTRY environment variable.
    #[serde(default)]
    pub country: Option<String>,

    /// Cache entry lifetime in seconds. Unset means entries never expire.
    ///
    /// Set via NEWSGATE_CACHE_TTL_SECS environment variable.
    #[serde(default)]
    pub cache_ttl_secs: Option<u64>,

    /// Maximum entries per cache namespace. Unset means unbounded.
    ///
    /// Set via NEWSGATE_CACHE_MAX_ENTRIES environment variable.
    #[serde(default)]
    pub cache_max_entries: Option<u64>,
}

fn default_base_url() -> String {
    "https://gnews.io/api/v4".into()
}

fn default_user_agent() -> String {
    "newsgate/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    250
}

fn default_retry_max_backoff_ms() -> u64 {
    4_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            retry_max_backoff_ms: default_retry_max_backoff_ms(),
            min_request_interval_ms: 0,
            lang: None,
            country: None,
            cache_ttl_secs: None,
            cache_max_entries: None,
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn retry_max_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_max_backoff_ms)
    }

    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    /// Cache expiry and capacity settings.
    pub fn cache_settings(&self) -> CacheSettings {
        CacheSettings {
            time_to_live: self.cache_ttl_secs.map(Duration::from_secs),
            max_entries: self.cache_max_entries,
        }
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `NEWSGATE_`
    /// 2. TOML file from `NEWSGATE_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("NEWSGATE_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("NEWSGATE_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into()),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Return the API token, which every upstream call needs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the token is not set.
    pub fn require_api_token(&self) -> Result<&str, ConfigError> {
        self.api_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "api_token".into(),
                hint: "Set NEWSGATE_API_TOKEN environment variable".into(),
            })
    }
}
