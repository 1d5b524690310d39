//! SwiftDil SDK - Rust client library for the SwiftDil identity verification API.
//!
//! This crate provides a type-safe client for the SwiftDil REST API: customer
//! records, uploaded files, identity verification checks, and generated
//! reports. Every operation performs an authenticated HTTP call against a
//! remote base URL and returns the decoded JSON document wrapped in
//! [`ApiResult`] — nothing is ever returned without going through it.
//!
//! # Resources
//!
//! - [`Customers`] — create, update, list, fetch and delete customer records
//! - [`Files`] — fetch, list, upload (full replace) and download files
//! - [`IdentityVerifications`] — checks nested under a customer
//! - [`Reports`] — fetch, list and download generated reports
//!
//! # Example
//!
//! ```rust,ignore
//! use swiftdil::{ClientConfig, SwiftDilClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwiftDilClient::with_credentials("https://api.swiftdil.example/v1", "t0k")?;
//!
//!     let customer = client
//!         .customers()
//!         .create(&serde_json::json!({ "name": "Jane Doe" }))
//!         .await?;
//!     println!("created customer {}", customer["id"]);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod codec;
pub mod resources;

pub use client::{ApiError, ApiResult, ClientConfig, SwiftDilClient};
pub use codec::{DownloadFormat, FileUpload};
pub use resources::{Customers, Files, IdentityVerifications, Reports};
