//! The book record and its shelf assignment.

use serde::{Deserialize, Serialize};

/// Shelf a book may be assigned to.
///
/// Any shelf may transition to any other shelf; transitions happen only on
/// explicit user selection. `None` is a valid resting state: the record stays
/// in the store but appears on no rendered shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shelf {
    CurrentlyReading,
    WantToRead,
    Read,
    #[default]
    None,
}

impl Shelf {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shelf::CurrentlyReading => "currentlyReading",
            Shelf::WantToRead => "wantToRead",
            Shelf::Read => "read",
            Shelf::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "currentlyReading" => Some(Shelf::CurrentlyReading),
            "wantToRead" => Some(Shelf::WantToRead),
            "read" => Some(Shelf::Read),
            "none" => Some(Shelf::None),
            _ => None,
        }
    }

    /// The three shelves that render in the overview, in display order.
    pub fn rendered() -> [Shelf; 3] {
        [Shelf::CurrentlyReading, Shelf::WantToRead, Shelf::Read]
    }
}

impl std::fmt::Display for Shelf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One book's identity, metadata, and shelf assignment.
///
/// The `id` is assigned by the external catalog and is the merge key when
/// reconciling search results with shelved state. Authors are normalized to a
/// list at this boundary; a legacy singular `author` string ("A, B, C") is
/// accepted on input and split, never re-emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BookRepr")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub shelf: Shelf,
    #[serde(default)]
    pub cover_url: String,
}

/// Input-compatible representation: accepts either `authors` (list) or the
/// legacy `author` (comma-joined string) that older persisted data carries.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookRepr {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    authors: Option<Vec<String>>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    shelf: Shelf,
    #[serde(default)]
    cover_url: String,
}

impl From<BookRepr> for Book {
    fn from(repr: BookRepr) -> Self {
        let authors = match (repr.authors, repr.author) {
            (Some(authors), _) => authors,
            (None, Some(author)) => author
                .split(',')
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            (None, None) => Vec::new(),
        };

        Book {
            id: repr.id,
            title: repr.title,
            authors,
            shelf: repr.shelf,
            cover_url: repr.cover_url,
        }
    }
}
