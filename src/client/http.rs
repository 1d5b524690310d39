//! Authenticated request dispatch.
//!
//! [`RequestExecutor`] is the single point where an HTTP exchange outcome is
//! known, and the only place an [`ApiError`] is constructed from one. Every
//! outcome is normalized into [`ApiResult`]: transport failures become
//! [`ApiError::Network`], rejections become [`ApiError::HttpStatus`] with
//! the status and raw body preserved, and a 2xx body that is not valid JSON
//! becomes [`ApiError::Decode`]. A failure value never flows through code
//! paths written for success values.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use super::config::ClientConfig;
use super::error::{ApiError, ApiResult};
use crate::resources::{Customers, Files, IdentityVerifications, Reports};

/// A single outgoing request, constructed fresh per call and never mutated
/// after dispatch.
#[derive(Debug, Clone)]
pub(crate) struct RequestDescriptor {
    /// HTTP verb.
    pub method: Method,

    /// Path below the base URL, already interpolated with resource ids.
    pub path: String,

    /// Query parameters, appended verbatim in order.
    pub query: Vec<(String, String)>,

    /// Optional JSON body. Its presence also decides whether a
    /// `Content-Type: application/json` header is sent.
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Creates a descriptor for the given verb and interpolated path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Appends query parameters, passed through without validation.
    #[must_use]
    pub fn with_query<K, V>(mut self, pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.query.extend(
            pairs
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string())),
        );
        self
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Renders the full request URL against the given base.
    fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}{}", base_url, self.path);
        if !self.query.is_empty() {
            let params: Vec<String> = self
                .query
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }
}

/// Executes authenticated requests and normalizes every outcome.
#[derive(Debug)]
pub(crate) struct RequestExecutor {
    config: ClientConfig,
    http: reqwest::Client,
}

impl RequestExecutor {
    /// Builds an executor from a validated configuration.
    ///
    /// The bearer token is installed as a default header so every request
    /// carries it; the whole-exchange timeout comes from the configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| ApiError::InvalidConfig("token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Returns the configuration the executor was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Executes a request and decodes the response body as JSON.
    ///
    /// An empty 2xx body (204 on some deletes) decodes to `Value::Null`.
    pub async fn execute(&self, descriptor: RequestDescriptor) -> ApiResult<Value> {
        let body = self.dispatch(descriptor).await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Executes a request and returns the raw response body untouched.
    ///
    /// Used by downloads, where the body is already in the format the caller
    /// asked the service for and may be arbitrary binary content.
    pub async fn execute_raw(&self, descriptor: RequestDescriptor) -> ApiResult<Vec<u8>> {
        self.dispatch(descriptor).await
    }

    /// Performs the exchange and classifies the outcome.
    async fn dispatch(&self, descriptor: RequestDescriptor) -> ApiResult<Vec<u8>> {
        let url = descriptor.url(&self.config.base_url);
        debug!(method = %descriptor.method, path = %descriptor.path, "dispatching request");

        let mut request = self.http.request(descriptor.method.clone(), &url);
        if let Some(body) = &descriptor.body {
            // Also sets Content-Type: application/json.
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(path = %descriptor.path, error = %e, "exchange did not complete");
                return Err(ApiError::from(e));
            }
        };

        let status = response.status().as_u16();
        // Reading the body can still fail mid-stream; that is a transport
        // failure, not a remote rejection.
        let body = response.bytes().await.map_err(ApiError::from)?;

        if status >= 400 {
            warn!(path = %descriptor.path, status, "request rejected");
            return Err(ApiError::HttpStatus {
                status,
                body: (!body.is_empty())
                    .then(|| String::from_utf8_lossy(&body).into_owned()),
            });
        }

        debug!(path = %descriptor.path, status, "request completed");
        Ok(body.to_vec())
    }
}

/// Client for the SwiftDil identity verification API.
///
/// Cheap to clone and safe to share: it holds only immutable configuration
/// and a pooled HTTP client, so concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct SwiftDilClient {
    executor: Arc<RequestExecutor>,
}

impl SwiftDilClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            executor: Arc::new(RequestExecutor::new(config)?),
        })
    }

    /// Creates a new client from a base URL and bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn with_credentials(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Self::new(ClientConfig::new(base_url, token))
    }

    /// Creates a new client from `SWIFTDIL_URL` and `SWIFTDIL_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is unset or invalid.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    /// Customer records.
    #[must_use]
    pub fn customers(&self) -> Customers {
        Customers::new(Arc::clone(&self.executor))
    }

    /// Uploaded files.
    #[must_use]
    pub fn files(&self) -> Files {
        Files::new(Arc::clone(&self.executor))
    }

    /// Identity verification checks, nested under a customer.
    #[must_use]
    pub fn identity_verifications(&self) -> IdentityVerifications {
        IdentityVerifications::new(Arc::clone(&self.executor))
    }

    /// Generated reports.
    #[must_use]
    pub fn reports(&self) -> Reports {
        Reports::new(Arc::clone(&self.executor))
    }
}
