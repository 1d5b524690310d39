//! HTTP client for the SwiftDil REST API.
//!
//! This module provides the authenticated request layer shared by every
//! resource facade: configuration, the request executor that normalizes all
//! exchange outcomes into [`ApiResult`], and the generic [`ResourceClient`]
//! contract each facade instantiates with its own base path.
//!
//! # Example
//!
//! ```rust,ignore
//! use swiftdil::client::{ClientConfig, SwiftDilClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwiftDilClient::new(ClientConfig::new(
//!         "https://api.swiftdil.example/v1",
//!         "t0k",
//!     ))?;
//!
//!     // List all customers, most recent first.
//!     let customers = client.customers().list(&[]).await?;
//!     println!("{customers}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod resource;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::SwiftDilClient;
pub use resource::ResourceClient;

pub(crate) use http::{RequestDescriptor, RequestExecutor};
