//! Uploaded files.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ApiResult, RequestExecutor, ResourceClient};
use crate::codec::{DownloadFormat, FileUpload};

/// Facade over the `/files` collection.
#[derive(Debug, Clone)]
pub struct Files {
    collection: ResourceClient,
}

impl Files {
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self {
            collection: ResourceClient::new(executor, "/files"),
        }
    }

    /// Lists all existing files, sorted by creation date with the most
    /// recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> ApiResult<Value> {
        self.collection.list(query).await
    }

    /// Retrieves the details of an existing file by its unique identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the file does not exist.
    pub async fn get(&self, file_id: &str) -> ApiResult<Value> {
        self.collection.get(file_id).await
    }

    /// Downloads a previously uploaded file in the requested output format.
    ///
    /// The body bytes are returned as-is: raw content for
    /// [`DownloadFormat::Stream`], base64 text for [`DownloadFormat::Base64`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn download(&self, file_id: &str, format: DownloadFormat) -> ApiResult<Vec<u8>> {
        self.collection.download(file_id, format).await
    }

    /// Updates the details and content of an existing file.
    ///
    /// Idempotent full replace: every field the file has must be provided,
    /// keeping the details held in your system in line with those held by
    /// SwiftDil. The raw content travels base64-encoded inside the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(&self, file_id: &str, upload: &FileUpload) -> ApiResult<Value> {
        self.collection.update(file_id, &upload.to_body()).await
    }

    /// Deletes an existing file. A file that has undergone any type of check
    /// (document verification, identity verification) can no longer be
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, file_id: &str) -> ApiResult<Value> {
        self.collection.delete(file_id).await
    }
}
