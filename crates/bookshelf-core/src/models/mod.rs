//! Record types shared across the store, catalog, and view layers.

mod book;

pub use book::{Book, Shelf};
