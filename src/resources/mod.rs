//! Resource facades for the SwiftDil API.
//!
//! Each facade is the generic [`ResourceClient`](crate::client::ResourceClient)
//! fixed to one base path, exposing only the operations the service supports
//! for that resource. Records are opaque JSON documents identified by a
//! server-assigned id; the client carries them through without validating
//! their schema.

pub mod customers;
pub mod files;
pub mod identity_verifications;
pub mod reports;

pub use customers::Customers;
pub use files::Files;
pub use identity_verifications::IdentityVerifications;
pub use reports::Reports;
