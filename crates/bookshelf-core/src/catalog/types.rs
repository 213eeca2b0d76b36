//! Wire types for the remote catalog service.

use crate::models::{Book, Shelf};
use serde::Deserialize;

/// Envelope of a lookup-by-identifier response.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    pub book: CatalogBook,
}

/// Envelope of a search response.
///
/// The service reports "no results" in-band: `books` is either an array of
/// candidates or an object carrying an `error` field.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub books: SearchBooks,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchBooks {
    Found(Vec<CatalogBook>),
    ErrorMarker(SearchErrorMarker),
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchErrorMarker {
    pub error: String,
}

/// A book as the catalog service describes it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CatalogBook {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
    #[serde(default)]
    pub shelf: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub small_thumbnail: Option<String>,
}

impl CatalogBook {
    /// Convert to the internal record type.
    ///
    /// The cover reference comes from `imageLinks.thumbnail` (falling back
    /// to the small thumbnail), empty when the service provides neither.
    /// The remote shelf field is advisory; local reconciliation overwrites
    /// it, so unknown values degrade to `Shelf::None`.
    pub fn into_book(self) -> Book {
        let cover_url = self
            .image_links
            .and_then(|links| links.thumbnail.or(links.small_thumbnail))
            .unwrap_or_default();

        let shelf = self
            .shelf
            .as_deref()
            .and_then(Shelf::from_str)
            .unwrap_or(Shelf::None);

        Book {
            id: self.id,
            title: self.title,
            authors: self.authors,
            shelf,
            cover_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_books_parses_candidate_array() {
        let response: SearchResponse = serde_json::from_value(json!({
            "books": [
                {"id": "a", "title": "A", "authors": ["X"]},
                {"id": "b", "title": "B"}
            ]
        }))
        .unwrap();

        match response.books {
            SearchBooks::Found(books) => {
                assert_eq!(books.len(), 2);
                assert_eq!(books[0].id, "a");
            }
            SearchBooks::ErrorMarker(_) => panic!("expected candidates"),
        }
    }

    #[test]
    fn test_search_books_parses_error_marker() {
        let response: SearchResponse = serde_json::from_value(json!({
            "books": {"error": "empty query", "items": []}
        }))
        .unwrap();

        match response.books {
            SearchBooks::ErrorMarker(marker) => assert_eq!(marker.error, "empty query"),
            SearchBooks::Found(_) => panic!("expected error marker"),
        }
    }

    #[test]
    fn test_into_book_prefers_thumbnail() {
        let catalog_book: CatalogBook = serde_json::from_value(json!({
            "id": "a",
            "title": "A",
            "authors": ["X"],
            "imageLinks": {
                "thumbnail": "http://covers/a.jpg",
                "smallThumbnail": "http://covers/a-small.jpg"
            },
            "shelf": "read"
        }))
        .unwrap();

        let book = catalog_book.into_book();
        assert_eq!(book.cover_url, "http://covers/a.jpg");
        assert_eq!(book.shelf, Shelf::Read);
    }

    #[test]
    fn test_into_book_without_image_links() {
        let catalog_book: CatalogBook =
            serde_json::from_value(json!({"id": "a", "title": "A"})).unwrap();

        let book = catalog_book.into_book();
        assert!(book.cover_url.is_empty());
        assert_eq!(book.shelf, Shelf::None);
        assert!(book.authors.is_empty());
    }
}
