//! Customer records.

use std::sync::Arc;

use serde_json::Value;

use crate::client::{ApiResult, RequestExecutor, ResourceClient};

/// Facade over the `/customers` collection.
#[derive(Debug, Clone)]
pub struct Customers {
    collection: ResourceClient,
}

impl Customers {
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self {
            collection: ResourceClient::new(executor, "/customers"),
        }
    }

    /// Lists all existing customers, sorted by creation date with the most
    /// recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self, query: &[(&str, &str)]) -> ApiResult<Value> {
        self.collection.list(query).await
    }

    /// Retrieves the details of an existing customer by the unique
    /// identifier returned on creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the customer does not exist.
    pub async fn get(&self, customer_id: &str) -> ApiResult<Value> {
        self.collection.get(customer_id).await
    }

    /// Creates a new customer record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create(&self, data: &Value) -> ApiResult<Value> {
        self.collection.create(data).await
    }

    /// Updates an existing customer with full-replace semantics.
    ///
    /// The customer type is not editable once set, and certain fields become
    /// read-only once the customer has undergone a check.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update(&self, customer_id: &str, data: &Value) -> ApiResult<Value> {
        self.collection.update(customer_id, data).await
    }

    /// Deletes an existing customer, along with any documents and notes on
    /// it. A customer that has undergone any type of check can no longer be
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, customer_id: &str) -> ApiResult<Value> {
        self.collection.delete(customer_id).await
    }
}
