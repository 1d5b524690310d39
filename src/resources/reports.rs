//! Generated reports.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::{ApiResult, RequestDescriptor, RequestExecutor, ResourceClient};

/// Facade over the `/reports` collection.
#[derive(Debug, Clone)]
pub struct Reports {
    executor: Arc<RequestExecutor>,
    collection: ResourceClient,
}

impl Reports {
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self {
            collection: ResourceClient::new(Arc::clone(&executor), "/reports"),
            executor,
        }
    }

    /// Lists all existing reports, sorted by creation date with the most
    /// recent first.
    ///
    /// Optional `page`, `size` and `sort=<column>,<ASC|DESC>` parameters are
    /// passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> ApiResult<Value> {
        self.collection.list(query).await
    }

    /// Retrieves the details of an existing report by its unique identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the report does not exist.
    pub async fn get(&self, report_id: &str) -> ApiResult<Value> {
        self.collection.get(report_id).await
    }

    /// Downloads a report document in the given extension, e.g. `pdf`.
    ///
    /// The body bytes are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn download(&self, report_id: &str, extension: &str) -> ApiResult<Vec<u8>> {
        self.executor
            .execute_raw(RequestDescriptor::new(
                Method::GET,
                format!("/reports/{report_id}/{extension}/download"),
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::SwiftDilClient;

    #[tokio::test]
    async fn test_get_issues_single_authorized_get() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reports/r_1"))
            .and(header("Authorization", "Bearer t0k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "r_1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SwiftDilClient::with_credentials(server.uri(), "t0k").expect("client");
        let report = client.reports().get("r_1").await.expect("get");
        assert_eq!(report["id"], "r_1");
    }

    #[tokio::test]
    async fn test_download_uses_extension_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reports/r_1/pdf/download"))
            .respond_with(ResponseTemplate::new(200).set_body_string("%PDF-1.7"))
            .expect(1)
            .mount(&server)
            .await;

        let client = SwiftDilClient::with_credentials(server.uri(), "t0k").expect("client");
        let body = client.reports().download("r_1", "pdf").await.expect("download");
        assert_eq!(body, b"%PDF-1.7".to_vec());
    }
}
