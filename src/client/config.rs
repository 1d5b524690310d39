//! Client configuration.
//!
//! Provides configuration options for the SwiftDil HTTP client. The base URL
//! and bearer token are always supplied explicitly at construction time;
//! [`ClientConfig::from_env`] exists for processes that keep them in the
//! environment, but the lookup happens here and nowhere else.

use std::time::Duration;

use super::error::ApiError;

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "SWIFTDIL_URL";

/// Environment variable holding the bearer token.
pub const ENV_TOKEN: &str = "SWIFTDIL_TOKEN";

/// Default request timeout in seconds.
///
/// The whole exchange (connect, send, receive) must complete within this
/// bound; exceeding it fails the call as a network error. There is no retry.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,

    /// Opaque bearer token sent in the `Authorization` header of every
    /// request. Immutable for the lifetime of a client instance.
    pub token: String,

    /// Whole-exchange timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL and bearer token.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("swiftdil-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Reads the base URL and token from `SWIFTDIL_URL` and `SWIFTDIL_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] if either variable is unset.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| ApiError::InvalidConfig(format!("{ENV_BASE_URL} is not set")))?;
        let token = std::env::var(ENV_TOKEN)
            .map_err(|_| ApiError::InvalidConfig(format!("{ENV_TOKEN} is not set")))?;
        Ok(Self::new(base_url, token))
    }

    /// Sets the whole-exchange timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or not http(s), or the
    /// token is empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.base_url.is_empty() {
            return Err(ApiError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.token.is_empty() {
            return Err(ApiError::InvalidConfig("token cannot be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = ClientConfig::new("https://api.swiftdil.example/v1", "t0k");
        assert_eq!(config.base_url, "https://api.swiftdil.example/v1");
        assert_eq!(config.token, "t0k");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://api.swiftdil.example/v1", "t0k")
            .with_timeout(Duration::from_secs(10))
            .with_user_agent("my-app/1.0");

        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "my-app/1.0");
    }

    #[test]
    fn test_config_validate_valid() {
        let config = ClientConfig::new("https://api.swiftdil.example/v1", "t0k");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_url() {
        let config = ClientConfig::new("", "t0k");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_invalid_scheme() {
        let config = ClientConfig::new("ftp://api.swiftdil.example", "t0k");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_empty_token() {
        let config = ClientConfig::new("https://api.swiftdil.example/v1", "");
        assert!(config.validate().is_err());
    }
}
