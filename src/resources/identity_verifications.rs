//! Identity verification checks.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ApiResult, RequestExecutor, ResourceClient};

/// Facade over `/customers/{customerId}/identifications`.
///
/// Identity verifications are always nested under the customer whose
/// submitted identity data they check; the customer id is interpolated into
/// the collection path on every call.
#[derive(Debug, Clone)]
pub struct IdentityVerifications {
    executor: Arc<RequestExecutor>,
}

impl IdentityVerifications {
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// The collection scoped to one customer.
    fn collection(&self, customer_id: &str) -> ResourceClient {
        ResourceClient::new(
            Arc::clone(&self.executor),
            format!("/customers/{customer_id}/identifications"),
        )
    }

    /// Creates a new identity verification for the given customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, customer_id: &str, data: &Value) -> ApiResult<Value> {
        self.collection(customer_id).create(data).await
    }

    /// Retrieves an existing identity verification by customer and
    /// verification identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the verification does not
    /// exist.
    pub async fn get(&self, customer_id: &str, verification_id: &str) -> ApiResult<Value> {
        self.collection(customer_id).get(verification_id).await
    }

    /// Lists all identity verifications for the given customer, sorted by
    /// creation date with the most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, customer_id: &str) -> ApiResult<Value> {
        self.collection(customer_id).list(&[]).await
    }
}
