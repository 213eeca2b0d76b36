//! HTTP client for the remote book catalog.

use crate::catalog::types::{LookupResponse, SearchBooks, SearchResponse};
use crate::config::NetworkConfig;
use crate::error::{BookshelfError, Result};
use crate::models::{Book, Shelf};
use reqwest::Client;
use serde_json::json;
use tracing::debug;

/// Client for the remote catalog's lookup, search, and shelf-update calls.
///
/// Stateless between calls. The service identifies a user's remote shelf
/// data by an opaque `Authorization` token; any stable string works.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// HTTP client
    client: Client,
    /// Base URL of the catalog service
    base_url: String,
    /// Opaque per-user access token
    token: String,
}

impl CatalogClient {
    /// Create a new catalog client against the default service.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(NetworkConfig::CATALOG_API_BASE, token)
    }

    /// Create a client against a specific base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(NetworkConfig::REQUEST_TIMEOUT)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| BookshelfError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    /// Look up a single book by its catalog identifier.
    ///
    /// Callers treat failures as non-fatal: a missing cover is skipped, the
    /// rest of the record is kept.
    pub async fn lookup(&self, id: &str) -> Result<Book> {
        let url = format!("{}/books/{}", self.base_url, urlencoding::encode(id));

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BookshelfError::Network {
                message: format!("Catalog lookup failed: {}", e),
                cause: Some(e.to_string()),
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BookshelfError::BookNotFound {
                book_id: id.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(BookshelfError::Network {
                message: format!("Catalog returned {}", response.status()),
                cause: None,
            });
        }

        let payload: LookupResponse =
            response.json().await.map_err(|e| BookshelfError::Json {
                message: format!("Failed to parse catalog lookup response: {}", e),
                source: None,
            })?;

        Ok(payload.book.into_book())
    }

    /// Search the catalog for candidate books.
    ///
    /// Returns candidates in the service's order. The service's in-band
    /// error marker (e.g. for queries it cannot match) maps to an empty
    /// list; only transport and decode failures are `Err`, and callers
    /// treat those as "no results" too.
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Book>> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.token)
            .header("Accept", "application/json")
            .json(&json!({ "query": query, "maxResults": max_results }))
            .send()
            .await
            .map_err(|e| BookshelfError::Network {
                message: format!("Catalog search failed: {}", e),
                cause: Some(e.to_string()),
            })?;

        if !response.status().is_success() {
            return Err(BookshelfError::Network {
                message: format!("Catalog returned {}", response.status()),
                cause: None,
            });
        }

        let payload: SearchResponse =
            response.json().await.map_err(|e| BookshelfError::Json {
                message: format!("Failed to parse catalog search response: {}", e),
                source: None,
            })?;

        match payload.books {
            SearchBooks::Found(candidates) => Ok(candidates
                .into_iter()
                .map(|candidate| candidate.into_book())
                .collect()),
            SearchBooks::ErrorMarker(marker) => {
                debug!("Catalog search for {:?} returned no results: {}", query, marker.error);
                Ok(Vec::new())
            }
        }
    }

    /// Report a shelf assignment to the remote side.
    ///
    /// The facade dispatches this as a detached task; its outcome is logged,
    /// never awaited, and never affects local state.
    pub async fn update_shelf(&self, id: &str, shelf: Shelf) -> Result<()> {
        let url = format!("{}/books/{}", self.base_url, urlencoding::encode(id));

        let response = self
            .client
            .put(&url)
            .header("Authorization", &self.token)
            .header("Accept", "application/json")
            .json(&json!({ "shelf": shelf }))
            .send()
            .await
            .map_err(|e| BookshelfError::Network {
                message: format!("Shelf update failed: {}", e),
                cause: Some(e.to_string()),
            })?;

        if !response.status().is_success() {
            return Err(BookshelfError::Network {
                message: format!("Catalog returned {}", response.status()),
                cause: None,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = CatalogClient::new("abcd1234").unwrap();
        assert_eq!(client.base_url, NetworkConfig::CATALOG_API_BASE);
    }

    #[test]
    fn test_with_base_url_override() {
        let client = CatalogClient::with_base_url("http://127.0.0.1:9", "t").unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_lookup_unreachable_host_is_network_error() {
        // Port 9 (discard) is not listening; the call must fail as a
        // network error, which callers degrade to a missing cover.
        let client = CatalogClient::with_base_url("http://127.0.0.1:9", "t").unwrap();
        let result = client.lookup("AvBvB2Ux7UUC").await;
        assert!(matches!(
            result,
            Err(BookshelfError::Network { .. }) | Err(BookshelfError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_search_unreachable_host_is_network_error() {
        let client = CatalogClient::with_base_url("http://127.0.0.1:9", "t").unwrap();
        let result = client.search("fitness", 20).await;
        assert!(result.is_err());
    }
}
