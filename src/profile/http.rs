//! HTTP profile source with optional retry for transient errors.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::error::{ProfileFetchError, RetryConfig};
use super::{Profile, ProfileSource};
use crate::config::Config;

/// Fetches the profile with a single `GET` against the configured endpoint.
pub struct HttpProfileSource {
    client: Client,
    url: Url,
    retry_config: RetryConfig,
}

impl HttpProfileSource {
    /// Create a source from the application config.
    pub fn from_config(config: &Config) -> Result<Self, ProfileFetchError> {
        let url = config
            .profile_url()
            .map_err(|e| ProfileFetchError::network(e.to_string()))?;
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| ProfileFetchError::network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url,
            retry_config: config.retry.clone(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Execute a single request without retry.
    async fn execute_request(&self) -> Result<Profile, ProfileFetchError> {
        let response = match self.client.get(self.url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                if e.is_timeout() {
                    return Err(ProfileFetchError::network(format!("Request timeout: {}", e)));
                } else if e.is_connect() {
                    return Err(ProfileFetchError::network(format!("Connection failed: {}", e)));
                } else {
                    return Err(ProfileFetchError::network(format!("Request failed: {}", e)));
                }
            }
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProfileFetchError::network(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(ProfileFetchError::from_status(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            ProfileFetchError::parse(format!("Failed to parse profile: {}, body: {}", e, body))
        })
    }

    /// Execute the request, retrying transient failures per the retry config.
    async fn execute_with_retry(&self) -> Result<Profile, ProfileFetchError> {
        let mut attempt = 0;
        loop {
            match self.execute_request().await {
                Ok(profile) => {
                    if attempt > 0 {
                        tracing::info!("Profile request succeeded after {} retries", attempt);
                    }
                    return Ok(profile);
                }
                Err(error) => {
                    if !self.retry_config.should_retry(&error, attempt) {
                        return Err(error);
                    }
                    let delay = self.retry_config.delay_for(attempt);
                    tracing::warn!(
                        "Profile request attempt {} failed with {}, retrying in {:?}: {}",
                        attempt + 1,
                        error.kind,
                        delay,
                        error.message
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn fetch(&self) -> Result<Profile, ProfileFetchError> {
        tracing::debug!("Fetching profile from {}", self.url);
        self.execute_with_retry().await
    }
}
