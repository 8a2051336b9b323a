//! Profile fetch error types with retry classification.

use std::time::Duration;

/// Error from loading the user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFetchError {
    /// The kind of error
    pub kind: ProfileFetchErrorKind,
    /// HTTP status code, if applicable
    pub status_code: Option<u16>,
    /// Error message
    pub message: String,
}

impl ProfileFetchError {
    /// Create a network error (connection refused, timeout, ...).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ProfileFetchErrorKind::Network,
            status_code: None,
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ProfileFetchErrorKind::Parse,
            status_code: None,
            message: message.into(),
        }
    }

    /// Create an error from a non-success HTTP status.
    pub fn from_status(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: classify_http_status(status_code),
            status_code: Some(status_code),
            message: message.into(),
        }
    }

    /// Check if this error is transient and may be retried.
    pub fn is_transient(&self) -> bool {
        self.kind.is_transient()
    }
}

impl std::fmt::Display for ProfileFetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} (HTTP {}): {}", self.kind, code, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for ProfileFetchError {}

/// Classification of profile fetch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFetchErrorKind {
    /// Connection failed or timed out - transient
    Network,
    /// Rate limited (429) - transient
    RateLimited,
    /// Server error (5xx) - transient
    ServerError,
    /// Client error (4xx other than 429) - permanent
    ClientError,
    /// Body did not decode into a profile - permanent
    Parse,
}

impl ProfileFetchErrorKind {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ProfileFetchErrorKind::Network
                | ProfileFetchErrorKind::RateLimited
                | ProfileFetchErrorKind::ServerError
        )
    }
}

impl std::fmt::Display for ProfileFetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileFetchErrorKind::Network => write!(f, "Network error"),
            ProfileFetchErrorKind::RateLimited => write!(f, "Rate limited"),
            ProfileFetchErrorKind::ServerError => write!(f, "Server error"),
            ProfileFetchErrorKind::ClientError => write!(f, "Client error"),
            ProfileFetchErrorKind::Parse => write!(f, "Parse error"),
        }
    }
}

/// Parse HTTP status code into error kind.
pub fn classify_http_status(status: u16) -> ProfileFetchErrorKind {
    match status {
        429 => ProfileFetchErrorKind::RateLimited,
        400..=499 => ProfileFetchErrorKind::ClientError,
        _ => ProfileFetchErrorKind::ServerError,
    }
}

/// Bounded retry policy for the profile fetch.
///
/// The default performs no retries, so a single failed request moves the loader to `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the first request
    pub max_retries: u32,
    /// Delay before the first retry; doubled on every further attempt
    pub base_delay: Duration,
    /// Upper bound for a single delay
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryConfig {
    /// Check if `error` should be retried after `attempt` previous retries.
    pub fn should_retry(&self, error: &ProfileFetchError, attempt: u32) -> bool {
        error.is_transient() && attempt < self.max_retries
    }

    /// Exponential backoff: `base_delay * 2^attempt`, capped at `max_delay`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let multiplier = 2u32.saturating_pow(attempt);
        self.base_delay
            .saturating_mul(multiplier)
            .min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_classification() {
        assert_eq!(classify_http_status(429), ProfileFetchErrorKind::RateLimited);
        assert_eq!(classify_http_status(500), ProfileFetchErrorKind::ServerError);
        assert_eq!(classify_http_status(503), ProfileFetchErrorKind::ServerError);
        assert_eq!(classify_http_status(404), ProfileFetchErrorKind::ClientError);
        assert_eq!(classify_http_status(401), ProfileFetchErrorKind::ClientError);
    }

    #[test]
    fn test_transient_classification() {
        assert!(ProfileFetchError::network("refused").is_transient());
        assert!(ProfileFetchError::from_status(502, "bad gateway").is_transient());
        assert!(!ProfileFetchError::from_status(404, "missing").is_transient());
        assert!(!ProfileFetchError::parse("bad json").is_transient());
    }

    #[test]
    fn test_display_includes_status() {
        let err = ProfileFetchError::from_status(500, "boom");
        assert_eq!(err.to_string(), "Server error (HTTP 500): boom");
        let err = ProfileFetchError::network("refused");
        assert_eq!(err.to_string(), "Network error: refused");
    }

    #[test]
    fn test_default_policy_never_retries() {
        let policy = RetryConfig::default();
        assert!(!policy.should_retry(&ProfileFetchError::network("x"), 0));
    }

    #[test]
    fn test_backoff_grows_and_is_capped() {
        let policy = RetryConfig {
            max_retries: 10,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(1),
        };
        assert_eq!(policy.delay_for(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for(2), Duration::from_millis(400));
        assert_eq!(policy.delay_for(8), Duration::from_secs(1));
        assert!(policy.should_retry(&ProfileFetchError::network("x"), 9));
        assert!(!policy.should_retry(&ProfileFetchError::network("x"), 10));
    }
}
