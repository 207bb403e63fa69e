//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field: field.into(), reason: reason.into() }
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// The API token is checked separately by `require_api_token`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `base_url` is not an http(s) URL
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `max_retries` exceeds 10
    /// - `retry_max_backoff_ms` is below `retry_backoff_ms`
    /// - `user_agent` is empty
    /// - `cache_ttl_secs` or `cache_max_entries` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(invalid("base_url", "must start with http:// or https://"));
        }
        if self.base_url.ends_with('/') {
            return Err(invalid("base_url", "must not end with '/'"));
        }

        if self.timeout_ms < 100 {
            return Err(invalid("timeout_ms", "must be at least 100ms"));
        }
        if self.timeout_ms > 300_000 {
            return Err(invalid("timeout_ms", "must not exceed 5 minutes (300000ms)"));
        }

        if self.max_retries > 10 {
            return Err(invalid("max_retries", "must not exceed 10"));
        }
        if self.retry_max_backoff_ms < self.retry_backoff_ms {
            return Err(invalid("retry_max_backoff_ms", "must not be less than retry_backoff_ms"));
        }

        if self.user_agent.is_empty() {
            return Err(invalid("user_agent", "must not be empty"));
        }

        if self.cache_ttl_secs == Some(0) {
            return Err(invalid("cache_ttl_secs", "must be greater than 0 when set"));
        }
        if self.cache_max_entries == Some(0) {
            return Err(invalid("cache_max_entries", "must be greater than 0 when set"));
        }

        if self.cache_ttl_secs.is_none() && self.cache_max_entries.is_none() {
            tracing::debug!("cache has no ttl and no capacity bound; entries live for the process lifetime");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_field(config: AppConfig) -> String {
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_base_url() {
        assert_eq!(invalid_field(AppConfig { base_url: "gnews.io/api/v4".into(), ..Default::default() }), "base_url");
        assert_eq!(
            invalid_field(AppConfig { base_url: "https://gnews.io/api/v4/".into(), ..Default::default() }),
            "base_url"
        );

        let config = AppConfig { base_url: "http://127.0.0.1:8080".into(), ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_bounds() {
        assert_eq!(invalid_field(AppConfig { timeout_ms: 50, ..Default::default() }), "timeout_ms");
        assert_eq!(invalid_field(AppConfig { timeout_ms: 301_000, ..Default::default() }), "timeout_ms");

        let config = AppConfig { timeout_ms: 100, ..Default::default() };
        assert!(config.validate().is_ok());
        let config = AppConfig { timeout_ms: 300_000, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_retry_settings() {
        assert_eq!(invalid_field(AppConfig { max_retries: 11, ..Default::default() }), "max_retries");
        assert_eq!(
            invalid_field(AppConfig { retry_backoff_ms: 500, retry_max_backoff_ms: 100, ..Default::default() }),
            "retry_max_backoff_ms"
        );

        let config = AppConfig { max_retries: 0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_user_agent() {
        assert_eq!(invalid_field(AppConfig { user_agent: String::new(), ..Default::default() }), "user_agent");
    }

    #[test]
    fn test_validate_cache_settings() {
        assert_eq!(invalid_field(AppConfig { cache_ttl_secs: Some(0), ..Default::default() }), "cache_ttl_secs");
        assert_eq!(
            invalid_field(AppConfig { cache_max_entries: Some(0), ..Default::default() }),
            "cache_max_entries"
        );

        let config = AppConfig { cache_ttl_secs: Some(1), cache_max_entries: Some(1), ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
