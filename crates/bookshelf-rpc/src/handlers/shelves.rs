//! Shelf and collection handlers.

use super::{get_str_param, require_str_param};
use crate::server::AppState;
use bookshelf_library::{Book, BookshelfError, Shelf};
use serde_json::Value;

/// Full record list, in stored order.
pub async fn get_books(state: &AppState, _params: &Value) -> bookshelf_library::Result<Value> {
    let books = state.api.books().await;
    Ok(serde_json::to_value(books)?)
}

/// Records grouped by rendered shelf.
pub async fn get_shelves(state: &AppState, _params: &Value) -> bookshelf_library::Result<Value> {
    let overview = state.api.overview().await;
    Ok(serde_json::to_value(overview)?)
}

/// Assign a shelf to a book.
///
/// `book` carries the full record when the frontend moves a search result
/// that is not shelved yet; for books already in the store only the id
/// matters. Search results held in the view are re-annotated so their shelf
/// badges stay consistent with the store.
pub async fn set_book_shelf(state: &AppState, params: &Value) -> bookshelf_library::Result<Value> {
    let book_id = require_str_param(params, "book_id", "bookId")?;
    let shelf_str = require_str_param(params, "shelf", "shelf")?;
    let shelf = Shelf::from_str(&shelf_str).ok_or_else(|| BookshelfError::InvalidShelf {
        value: shelf_str.clone(),
    })?;

    let book_data: Book = match params.get("book") {
        Some(value) if !value.is_null() => serde_json::from_value(value.clone())?,
        _ => Book {
            id: book_id.clone(),
            title: get_str_param(params, "title", "title")
                .unwrap_or_default()
                .to_string(),
            authors: Vec::new(),
            shelf: Shelf::None,
            cover_url: String::new(),
        },
    };

    let record = state.api.set_shelf(&book_id, &book_data, shelf).await?;

    // Keep any held search results consistent with the new assignment
    let mut view = state.view.write().await;
    if !view.results.is_empty() {
        let shelved = state.api.books().await;
        let results = std::mem::take(&mut view.results);
        view.results = bookshelf_library::reconcile::annotate_shelves(results, &shelved);
    }

    Ok(serde_json::to_value(record)?)
}

/// Fetch cover references for every stored record.
pub async fn refresh_covers(state: &AppState, _params: &Value) -> bookshelf_library::Result<Value> {
    let updated = state.api.refresh_covers().await?;
    Ok(serde_json::to_value(updated)?)
}
