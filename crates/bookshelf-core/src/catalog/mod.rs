//! Catalog - thin client for the remote book search/lookup service.
//!
//! The catalog is stateless: every call is a single request/response
//! exchange, and conversion from the service's wire shapes to [`Book`]
//! records happens at this module's boundary.
//!
//! [`Book`]: crate::models::Book

mod client;
mod types;

pub use client::CatalogClient;
