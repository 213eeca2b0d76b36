//! Bookshelf Core - Headless library for tracking a personal book collection.
//!
//! This crate provides the shelf store, the remote catalog client, and the
//! view-layer state machine. It can be used programmatically without any
//! HTTP/RPC layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookshelf_library::{BookshelfApi, Shelf};
//!
//! #[tokio::main]
//! async fn main() -> bookshelf_library::Result<()> {
//!     let api = BookshelfApi::new("/path/to/bookshelf-data")?;
//!
//!     // List shelved books
//!     let books = api.books().await;
//!     println!("Tracking {} books", books.len());
//!
//!     // Search the catalog
//!     let results = api.search("fitness", 20).await;
//!     println!("Search found {} results", results.len());
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod store;
pub mod view;

mod api;

// Re-export commonly used types
pub use api::{BookshelfApi, ShelfOverview};
pub use catalog::CatalogClient;
pub use error::{BookshelfError, Result};
pub use models::{Book, Shelf};
pub use store::ShelfStore;
pub use view::{Route, ViewState};
