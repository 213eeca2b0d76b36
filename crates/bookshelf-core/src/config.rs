//! Centralized configuration for the bookshelf library.
//!
//! Configuration constants for network operations, storage paths, and other
//! system parameters.

use std::time::Duration;

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Bookshelf";
}

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
    pub const QUICK_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);
    pub const USER_AGENT: &'static str = "bookshelf-library/1.0";
    /// Base URL of the remote book catalog service.
    pub const CATALOG_API_BASE: &'static str = "https://reactnd-books-api.udacity.com";
    /// Default number of candidates requested per search.
    pub const SEARCH_MAX_RESULTS: usize = 20;
}

/// Shared directory and file name configurations.
pub struct PathsConfig;

impl PathsConfig {
    pub const DATA_DIR_NAME: &'static str = "bookshelf-data";
    /// The single persisted entry holding the serialized record set.
    pub const STORE_FILENAME: &'static str = "books.json";
    /// Persisted catalog access token.
    pub const TOKEN_FILENAME: &'static str = "token.json";
}
