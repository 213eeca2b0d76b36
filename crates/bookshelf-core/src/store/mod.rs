//! Durable persistence for the shelf record set.
//!
//! This module provides:
//! - Atomic JSON file operations
//! - The `ShelfStore` registry with its built-in default record set

mod atomic;
mod defaults;
mod shelf_store;

pub use atomic::{atomic_read_json, atomic_write_json};
pub use defaults::default_books;
pub use shelf_store::ShelfStore;
