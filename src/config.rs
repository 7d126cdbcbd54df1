// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Values are read once at startup. A `.env` file is honored for local
//! development.

use std::env;
use std::time::Duration;

/// Default REST API base URL when `EXPO_PUBLIC_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Default number of retries for read queries.
pub const DEFAULT_QUERY_RETRY: u32 = 2;

/// Default freshness window for read queries (5 minutes).
pub const DEFAULT_QUERY_STALE_SECS: u64 = 5 * 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ConnectHealth REST API (no trailing slash)
    pub api_url: String,
    /// Retries applied to read queries (mutations never retry)
    pub query_retry: u32,
    /// How long a fetched list is served without hitting the network
    pub query_stale_time: Duration,
    /// Transport timeout; `None` leaves reqwest's defaults in place
    pub http_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            query_retry: DEFAULT_QUERY_RETRY,
            query_stale_time: Duration::from_secs(DEFAULT_QUERY_STALE_SECS),
            http_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url = env::var("EXPO_PUBLIC_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let query_retry = match env::var("CONNECTHEALTH_QUERY_RETRY") {
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("CONNECTHEALTH_QUERY_RETRY"))?,
            Err(_) => DEFAULT_QUERY_RETRY,
        };

        let stale_secs: u64 = match env::var("CONNECTHEALTH_QUERY_STALE_SECS") {
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("CONNECTHEALTH_QUERY_STALE_SECS"))?,
            Err(_) => DEFAULT_QUERY_STALE_SECS,
        };

        let http_timeout = match env::var("CONNECTHEALTH_HTTP_TIMEOUT_SECS") {
            Ok(v) => Some(Duration::from_secs(v.trim().parse().map_err(|_| {
                ConfigError::Invalid("CONNECTHEALTH_HTTP_TIMEOUT_SECS")
            })?)),
            Err(_) => None,
        };

        Self {
            api_url,
            query_retry,
            query_stale_time: Duration::from_secs(stale_secs),
            http_timeout,
        }
        .validated()
    }

    /// Config pointing at an explicit base URL, other values defaulted.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
        .validated()
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let url = self.api_url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid("EXPO_PUBLIC_API_URL"));
        }
        self.api_url = url.to_string();
        Ok(self)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
