//! Built-in default record set.
//!
//! Used when no persisted store exists yet, or when the persisted entry is
//! malformed. Covers start empty and are filled by the startup cover fetch.

use crate::models::{Book, Shelf};

fn book(id: &str, title: &str, authors: &[&str], shelf: Shelf) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        shelf,
        cover_url: String::new(),
    }
}

/// The five-book starter set.
pub fn default_books() -> Vec<Book> {
    vec![
        book(
            "AvBvB2Ux7UUC",
            "Geronimo Stilton and the Kingdom of Fantasy #1: The Kingdom of Fantasy",
            &["Geronimo Stilton"],
            Shelf::CurrentlyReading,
        ),
        book(
            "zpQ4Vv30fAgC",
            "Fitness!",
            &["Orson Scott Card"],
            Shelf::CurrentlyReading,
        ),
        book(
            "Du_mTZwlWRUC",
            "Fitness for Work",
            &["Keith T Palmer", "Ian Brown", "John Hobson"],
            Shelf::WantToRead,
        ),
        book(
            "ti6zoAC9Ph8C",
            "Types and Programming Languages",
            &["Benjamin C. Pierce"],
            Shelf::WantToRead,
        ),
        book(
            "CUIgM3e-I5gC",
            "Core Python Programming",
            &["Wesley J Chun"],
            Shelf::Read,
        ),
    ]
}
