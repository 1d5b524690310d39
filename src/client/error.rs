//! Client error types.
//!
//! Every public operation returns [`ApiResult`]; a failure is always one of
//! the [`ApiError`] variants below, built at the single point where the
//! exchange outcome is known. The error carries whatever the exchange
//! actually produced — status code and raw body when the remote answered,
//! a transport message when it did not — and never data invented on the
//! failure path.

/// Result alias returned by every API operation.
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The exchange never completed: DNS, connect or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The remote rejected the request with a status of 400 or above.
    ///
    /// The raw body is preserved when present; the service often emits a
    /// structured JSON error document worth surfacing to the caller.
    #[error("HTTP status {status}")]
    HttpStatus {
        /// Status code returned by the remote.
        status: u16,
        /// Raw response body, if the remote sent one.
        body: Option<String>,
    },

    /// The remote answered 2xx but the body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Returns the HTTP status code, when the remote produced one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body carried by the error, if any.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Returns `true` if the exchange never completed.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        // Timeouts are not a distinct kind: the exchange did not complete.
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
        assert!(err.is_network());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_error_display_http_status() {
        let err = ApiError::HttpStatus {
            status: 404,
            body: Some(r#"{"error":"not found"}"#.to_string()),
        };
        assert_eq!(err.to_string(), "HTTP status 404");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.raw_body(), Some(r#"{"error":"not found"}"#));
    }

    #[test]
    fn test_error_display_decode() {
        let err = ApiError::Decode("expected value at line 1 column 1".to_string());
        assert!(err.to_string().starts_with("response body is not valid JSON"));
        assert_eq!(err.raw_body(), None);
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = ApiError::InvalidConfig("token cannot be empty".to_string());
        assert_eq!(err.to_string(), "invalid configuration: token cannot be empty");
    }
}
