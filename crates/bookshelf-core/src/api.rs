//! The main API facade owning the shelf store and catalog client.

use crate::catalog::CatalogClient;
use crate::config::PathsConfig;
use crate::models::{Book, Shelf};
use crate::reconcile::{annotate_shelves, apply_covers};
use crate::store::{atomic_read_json, atomic_write_json, ShelfStore};
use crate::Result;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Books grouped by rendered shelf, for the overview view.
///
/// Records with `shelf = none` appear in no group.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfOverview {
    pub currently_reading: Vec<Book>,
    pub want_to_read: Vec<Book>,
    pub read: Vec<Book>,
}

/// Persisted catalog access token.
#[derive(Debug, Serialize, Deserialize)]
struct TokenFile {
    token: String,
}

/// Main entry point for bookshelf operations.
///
/// Constructed once at startup from an explicit data root; the store's
/// load/save lifecycle is owned here, and every view reaches state through
/// this handle rather than any ambient global.
pub struct BookshelfApi {
    /// Root directory for persisted data
    data_root: PathBuf,
    /// The authoritative shelf record set
    store: Arc<ShelfStore>,
    /// Remote catalog client
    catalog: CatalogClient,
}

impl BookshelfApi {
    /// Create an API instance rooted at `data_root`, against the default
    /// catalog service.
    pub fn new(data_root: impl Into<PathBuf>) -> Result<Self> {
        let data_root = data_root.into();
        let token = load_or_create_token(&data_root)?;
        let catalog = CatalogClient::new(token)?;
        Self::with_catalog(data_root, catalog)
    }

    /// Create an API instance with a specific catalog client (used by tests
    /// to point at a local stand-in service).
    pub fn with_catalog(data_root: impl Into<PathBuf>, catalog: CatalogClient) -> Result<Self> {
        let data_root = data_root.into();
        std::fs::create_dir_all(&data_root)?;

        let store = ShelfStore::open(data_root.join(PathsConfig::STORE_FILENAME))?;

        Ok(Self {
            data_root,
            store: Arc::new(store),
            catalog,
        })
    }

    /// Root directory for persisted data.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Snapshot of all records, in stored order.
    pub async fn books(&self) -> Vec<Book> {
        self.store.books().await
    }

    /// Number of records in the store.
    pub async fn book_count(&self) -> usize {
        self.store.len().await
    }

    /// Records grouped by rendered shelf.
    pub async fn overview(&self) -> ShelfOverview {
        let books = self.store.books().await;
        let of_shelf = |shelf: Shelf| -> Vec<Book> {
            books.iter().filter(|b| b.shelf == shelf).cloned().collect()
        };

        let [currently_reading, want_to_read, read] = Shelf::rendered().map(of_shelf);
        ShelfOverview {
            currently_reading,
            want_to_read,
            read,
        }
    }

    /// Assign a shelf to a book, inserting a record if the id is new.
    ///
    /// The change is persisted before this returns; the remote side is then
    /// notified best-effort on a detached task whose outcome is logged and
    /// never awaited.
    pub async fn set_shelf(&self, id: &str, book_data: &Book, shelf: Shelf) -> Result<Book> {
        let record = self.store.set_shelf(id, book_data, shelf).await?;

        let catalog = self.catalog.clone();
        let book_id = id.to_string();
        tokio::spawn(async move {
            if let Err(e) = catalog.update_shelf(&book_id, shelf).await {
                warn!("Shelf update notification for {} dropped: {}", book_id, e);
            }
        });

        Ok(record)
    }

    /// Search the catalog and annotate results with locally shelved state.
    ///
    /// Infallible by design: an empty query yields no results, and any
    /// catalog failure degrades to an empty list with a warning.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<Book> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let results = match self.catalog.search(query, limit).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Catalog search for {:?} failed: {}", query, e);
                return Vec::new();
            }
        };

        let shelved = self.store.books().await;
        annotate_shelves(results, &shelved)
    }

    /// Fetch cover references for every stored record.
    ///
    /// Issues one lookup per book concurrently, waits for all of them to
    /// settle, and applies the outcome as a single state replacement. A
    /// failed lookup leaves that record's cover as it was; the others keep
    /// theirs. Returns the number of covers that changed.
    pub async fn refresh_covers(&self) -> Result<usize> {
        let snapshot = self.store.books().await;
        if snapshot.is_empty() {
            return Ok(0);
        }

        let lookups = snapshot.iter().map(|book| self.catalog.lookup(&book.id));
        let fetched = futures::future::join_all(lookups).await;

        let merged = apply_covers(&snapshot, fetched);
        let updated = merged
            .iter()
            .zip(&snapshot)
            .filter(|(new, old)| new.cover_url != old.cover_url)
            .count();

        self.store.replace_books(merged).await?;
        info!("Cover refresh updated {} of {} records", updated, snapshot.len());

        Ok(updated)
    }
}

/// Load the persisted catalog token, generating and persisting a fresh one
/// when absent or unreadable.
fn load_or_create_token(data_root: &Path) -> Result<String> {
    std::fs::create_dir_all(data_root)?;
    let path = data_root.join(PathsConfig::TOKEN_FILENAME);

    if let Ok(Some(existing)) = atomic_read_json::<TokenFile>(&path) {
        return Ok(existing.token);
    }

    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    atomic_write_json(&path, &TokenFile { token: token.clone() })?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_token_is_stable_across_loads() {
        let temp = TempDir::new().unwrap();

        let first = load_or_create_token(temp.path()).unwrap();
        let second = load_or_create_token(temp.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    #[test]
    fn test_token_regenerated_when_unreadable() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PathsConfig::TOKEN_FILENAME), "{oops").unwrap();

        let token = load_or_create_token(temp.path()).unwrap();
        assert_eq!(token.len(), 8);
    }
}
