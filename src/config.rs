//! Configuration management for taskboard.
//!
//! Configuration can be set via environment variables:
//! - `TASKBOARD_API_URL` - Optional. Backend base URL. Defaults to `http://localhost:8000`.
//! - `TASKBOARD_PROFILE_PATH` - Optional. Profile endpoint path. Defaults to `/userstats`.
//! - `TASKBOARD_FETCH_TIMEOUT_SECS` - Optional. Per-request timeout. Defaults to `30`.
//! - `TASKBOARD_FETCH_RETRIES` - Optional. Retries for transient fetch failures. Defaults to `0`.

use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::profile::RetryConfig;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_PROFILE_PATH: &str = "/userstats";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Taskboard configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL
    pub api_url: Url,

    /// Path of the profile endpoint, relative to `api_url`
    pub profile_path: String,

    /// Timeout applied to each profile request
    pub fetch_timeout: Duration,

    /// Retry policy for transient fetch failures
    pub retry: RetryConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("TASKBOARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url).map_err(|e| {
            ConfigError::InvalidValue("TASKBOARD_API_URL".to_string(), format!("{}", e))
        })?;

        let profile_path =
            lookup("TASKBOARD_PROFILE_PATH").unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string());

        let timeout_secs: u64 = lookup("TASKBOARD_FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("TASKBOARD_FETCH_TIMEOUT_SECS".to_string(), format!("{}", e))
            })?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "TASKBOARD_FETCH_TIMEOUT_SECS".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let max_retries = lookup("TASKBOARD_FETCH_RETRIES")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("TASKBOARD_FETCH_RETRIES".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            api_url,
            profile_path,
            fetch_timeout: Duration::from_secs(timeout_secs),
            retry: RetryConfig {
                max_retries,
                ..RetryConfig::default()
            },
        })
    }

    /// Create a config pointing at `api_url` with default values (useful for testing).
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            profile_path: DEFAULT_PROFILE_PATH.to_string(),
            fetch_timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }

    /// Full URL of the profile endpoint.
    pub fn profile_url(&self) -> Result<Url, ConfigError> {
        self.api_url
            .join(&self.profile_path)
            .map_err(|e| ConfigError::InvalidValue("TASKBOARD_PROFILE_PATH".to_string(), format!("{}", e)))
    }
}
