//! Generic resource collection contract.
//!
//! Every SwiftDil resource is a server-managed collection addressable by id,
//! and every facade is this one client instantiated with a fixed base path
//! and a subset of the operations exposed. Nested resources are handled by
//! interpolating the parent id into the base path, not by a different
//! mechanism.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use super::error::ApiResult;
use super::http::{RequestDescriptor, RequestExecutor};
use crate::codec::DownloadFormat;

/// Operations over one resource collection, rooted at a fixed base path.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    executor: Arc<RequestExecutor>,
    base_path: String,
}

impl ResourceClient {
    /// Creates a client for the collection rooted at `base_path`.
    pub(crate) fn new(executor: Arc<RequestExecutor>, base_path: impl Into<String>) -> Self {
        Self {
            executor,
            base_path: base_path.into(),
        }
    }

    /// Lists the collection. The records are returned sorted by creation
    /// date, with the most recent appearing first.
    ///
    /// Query parameters (`page`, `size`, `sort=<column>,<ASC|DESC>`) are
    /// passed through verbatim, not validated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> ApiResult<Value> {
        self.executor
            .execute(RequestDescriptor::new(Method::GET, self.base_path.as_str()).with_query(query))
            .await
    }

    /// Retrieves the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the record does not exist.
    pub async fn get(&self, id: &str) -> ApiResult<Value> {
        self.executor
            .execute(RequestDescriptor::new(
                Method::GET,
                format!("{}/{id}", self.base_path),
            ))
            .await
    }

    /// Creates a new record from the given JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, data: &Value) -> ApiResult<Value> {
        self.executor
            .execute(
                RequestDescriptor::new(Method::POST, self.base_path.as_str())
                    .with_body(data.clone()),
            )
            .await
    }

    /// Replaces the record with the given id.
    ///
    /// Full-replace semantics: supply the complete record, not a partial
    /// patch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(&self, id: &str, data: &Value) -> ApiResult<Value> {
        self.executor
            .execute(
                RequestDescriptor::new(Method::PUT, format!("{}/{id}", self.base_path))
                    .with_body(data.clone()),
            )
            .await
    }

    /// Deletes the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, id: &str) -> ApiResult<Value> {
        self.executor
            .execute(RequestDescriptor::new(
                Method::DELETE,
                format!("{}/{id}", self.base_path),
            ))
            .await
    }

    /// Downloads the record's content in the requested output format.
    ///
    /// Adds `output=<format>` to the path and returns the body bytes as-is;
    /// the service does the encoding, not the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn download(&self, id: &str, format: DownloadFormat) -> ApiResult<Vec<u8>> {
        self.executor
            .execute_raw(
                RequestDescriptor::new(Method::GET, format!("{}/{id}", self.base_path))
                    .with_query(&[("output", format.as_str())]),
            )
            .await
    }
}
