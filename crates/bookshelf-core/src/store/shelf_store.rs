//! The authoritative, durably-backed shelf record set.

use crate::models::{Book, Shelf};
use crate::store::atomic::{atomic_read_json, atomic_write_json};
use crate::store::defaults::default_books;
use crate::Result;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// The authoritative list of shelved books, keyed by book id.
///
/// Backed by a single JSON file holding the serialized record set. Every
/// mutation persists the full set in the same turn, so state changes and
/// their durable reflection are never decoupled. Records are never deleted;
/// moving a book to `Shelf::None` leaves the record in storage while
/// removing it from every rendered shelf.
pub struct ShelfStore {
    /// Path of the persisted record set
    path: PathBuf,
    /// In-memory record set, in stored order
    books: RwLock<Vec<Book>>,
}

impl ShelfStore {
    /// Open the store at the given path.
    ///
    /// A missing file yields the built-in default set. Malformed or
    /// unreadable persisted data also falls over to the default set with a
    /// warning; corruption never surfaces as an error to the caller.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let books = match atomic_read_json::<Vec<Book>>(&path) {
            Ok(Some(books)) => {
                debug!("Loaded {} shelved books from {}", books.len(), path.display());
                books
            }
            Ok(None) => {
                debug!("No store at {}, using default set", path.display());
                default_books()
            }
            Err(e) => {
                warn!(
                    "Could not load store at {} ({}), using default set",
                    path.display(),
                    e
                );
                default_books()
            }
        };

        Ok(Self {
            path,
            books: RwLock::new(books),
        })
    }

    /// Path of the persisted record set.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current record set, in stored order.
    pub async fn books(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// Number of records currently in the store.
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    /// Look up a single record by id.
    pub async fn get(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Assign `shelf` to the book with `id`.
    ///
    /// Updates the existing record in place if one exists; otherwise inserts
    /// a new record built from `book_data` with the given shelf. Exactly one
    /// record for `id` exists afterward. The full set is persisted before
    /// returning. Returns the resulting record.
    pub async fn set_shelf(&self, id: &str, book_data: &Book, shelf: Shelf) -> Result<Book> {
        let mut books = self.books.write().await;

        let record = match books.iter_mut().find(|b| b.id == id) {
            Some(existing) => {
                existing.shelf = shelf;
                existing.clone()
            }
            None => {
                let mut inserted = book_data.clone();
                inserted.id = id.to_string();
                inserted.shelf = shelf;
                if inserted.authors.is_empty() {
                    inserted.authors = vec!["Unknown Author".to_string()];
                }
                books.push(inserted.clone());
                inserted
            }
        };

        self.save(&books)?;
        Ok(record)
    }

    /// Replace the entire record set in a single swap and persist it.
    ///
    /// Used by the bulk cover fetch, which applies all settled lookups at
    /// once rather than mutating record by record.
    pub async fn replace_books(&self, new_books: Vec<Book>) -> Result<()> {
        let mut books = self.books.write().await;
        *books = new_books;
        self.save(&books)
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        atomic_write_json(&self.path, &books.to_vec())
    }
}
