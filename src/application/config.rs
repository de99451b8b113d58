use crate::constants::{DEFAULT_BASE_URL, MIN_REQUEST_INTERVAL_MS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Authentication credentials for the Skrybe API
pub struct Credentials {
    /// API key sent as the `api_key` field of every request
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL the endpoint paths are appended to
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for request pacing
pub struct RateLimiterConfig {
    /// Minimum milliseconds between the start of two dispatches
    pub min_interval_ms: u64,
}

impl RateLimiterConfig {
    /// Minimum interval as a duration, never zero
    #[must_use]
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms.max(1))
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: MIN_REQUEST_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the Skrybe API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Pacing configuration
    pub rate_limiter: RateLimiterConfig,
}

impl Config {
    /// Creates a configuration for the production host
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a configuration for a custom host
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
            },
            rate_limiter: RateLimiterConfig::default(),
        }
    }

    /// Sets the minimum interval between dispatches
    #[must_use]
    pub fn with_min_interval_ms(mut self, min_interval_ms: u64) -> Self {
        self.rate_limiter.min_interval_ms = min_interval_ms;
        self
    }

    /// Builds a configuration from the environment and an optional `.env` file
    ///
    /// Reads `SKRYBE_API_KEY`, `SKRYBE_BASE_URL` and
    /// `SKRYBE_MIN_REQUEST_INTERVAL_MS`. A blank base URL falls back to the
    /// production host.
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("SKRYBE_API_KEY", String::new());
        if api_key.is_empty() {
            error!("SKRYBE_API_KEY not found in environment variables or .env file");
        }

        let base_url = get_env_or_none::<String>("SKRYBE_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));

        Config::with_base_url(api_key, base_url).with_min_interval_ms(get_env_or_default(
            "SKRYBE_MIN_REQUEST_INTERVAL_MS",
            MIN_REQUEST_INTERVAL_MS,
        ))
    }

    /// Full URL of `endpoint` on the configured host
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}
