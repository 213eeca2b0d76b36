//! Reconciliation between the shelf store and catalog results.
//!
//! Two merges live here:
//! - annotating freshly fetched search results with locally shelved state,
//!   keyed by book id, preserving the catalog's ordering;
//! - folding a batch of settled cover lookups back into a record snapshot,
//!   where per-book failures leave that record untouched.
//!
//! Both are recomputed from current state on every call, never cached.

use crate::models::{Book, Shelf};
use crate::Result;
use std::collections::HashMap;

/// Overwrite each search result's shelf with the stored assignment for its
/// id, or `Shelf::None` when the id is not shelved locally.
///
/// Order-preserving with respect to `results`.
pub fn annotate_shelves(results: Vec<Book>, shelved: &[Book]) -> Vec<Book> {
    let by_id: HashMap<&str, Shelf> = shelved.iter().map(|b| (b.id.as_str(), b.shelf)).collect();

    results
        .into_iter()
        .map(|mut result| {
            result.shelf = by_id.get(result.id.as_str()).copied().unwrap_or(Shelf::None);
            result
        })
        .collect()
}

/// Merge settled per-book lookup outcomes into a record snapshot.
///
/// `fetched` is positionally paired with `books`. A successful lookup with a
/// non-empty cover replaces that record's cover reference; a failed lookup,
/// or one without a cover, leaves the record unchanged. The returned set is
/// the complete replacement for a single state swap, so one failure cannot
/// discard the covers the other lookups fetched.
pub fn apply_covers(books: &[Book], fetched: Vec<Result<Book>>) -> Vec<Book> {
    books
        .iter()
        .zip(fetched)
        .map(|(book, outcome)| match outcome {
            Ok(found) if !found.cover_url.is_empty() => {
                let mut updated = book.clone();
                updated.cover_url = found.cover_url;
                updated
            }
            _ => book.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookshelfError;

    fn book(id: &str, shelf: Shelf) -> Book {
        Book {
            id: id.into(),
            title: format!("Title {}", id),
            authors: vec!["A".into()],
            shelf,
            cover_url: String::new(),
        }
    }

    #[test]
    fn test_annotate_uses_stored_shelf_for_known_id() {
        let shelved = vec![book("X", Shelf::Read)];
        let results = vec![book("X", Shelf::None)];

        let annotated = annotate_shelves(results, &shelved);
        assert_eq!(annotated[0].shelf, Shelf::Read);
    }

    #[test]
    fn test_annotate_unknown_id_yields_none() {
        let shelved = vec![book("X", Shelf::Read)];
        // The catalog may report its own shelf value; local state wins.
        let results = vec![book("Y", Shelf::WantToRead)];

        let annotated = annotate_shelves(results, &shelved);
        assert_eq!(annotated[0].shelf, Shelf::None);
    }

    #[test]
    fn test_annotate_preserves_result_order() {
        let shelved = vec![book("b", Shelf::Read)];
        let results = vec![
            book("c", Shelf::None),
            book("b", Shelf::None),
            book("a", Shelf::None),
        ];

        let annotated = annotate_shelves(results, &shelved);
        let ids: Vec<_> = annotated.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
        assert_eq!(annotated[1].shelf, Shelf::Read);
    }

    #[test]
    fn test_apply_covers_partial_failure_keeps_others() {
        let books: Vec<Book> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| book(id, Shelf::Read))
            .collect();

        let fetched: Vec<Result<Book>> = books
            .iter()
            .enumerate()
            .map(|(i, b)| {
                if i == 2 {
                    Err(BookshelfError::Network {
                        message: "connection refused".into(),
                        cause: None,
                    })
                } else {
                    let mut found = b.clone();
                    found.cover_url = format!("http://covers/{}.jpg", b.id);
                    Ok(found)
                }
            })
            .collect();

        let merged = apply_covers(&books, fetched);

        assert_eq!(merged.len(), 5);
        let updated = merged.iter().filter(|b| !b.cover_url.is_empty()).count();
        assert_eq!(updated, 4);
        assert!(merged[2].cover_url.is_empty());
    }

    #[test]
    fn test_apply_covers_empty_cover_leaves_record_unchanged() {
        let mut shelved = book("a", Shelf::Read);
        shelved.cover_url = "http://covers/original.jpg".into();

        let merged = apply_covers(&[shelved.clone()], vec![Ok(book("a", Shelf::None))]);
        assert_eq!(merged[0].cover_url, "http://covers/original.jpg");
    }
}
