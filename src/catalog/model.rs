//! Core record types for the book catalog.
//!
//! Every book is identified by a [`BookId`] and references its author and
//! genres through [`AuthorId`] and [`GenreId`]. All three are opaque string
//! newtypes: the engine never interprets their contents, only compares them.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a book record.
///
/// Opaque: equality and hashing are the only operations the engine performs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Wrap a raw id string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The underlying id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for BookId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

// Lets HashMap<BookId, _> be queried with a plain &str.
impl std::borrow::Borrow<str> for BookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Reference into the author table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    /// Wrap a raw id string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The underlying id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AuthorId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for AuthorId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::borrow::Borrow<str> for AuthorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Reference into the genre table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(String);

impl GenreId {
    /// Wrap a raw id string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The underlying id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GenreId {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for GenreId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::borrow::Borrow<str> for GenreId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A single immutable record in the catalog.
///
/// Records are never mutated after load; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier.
    pub id: BookId,
    /// Display title, matched by the title predicate.
    pub title: String,
    /// Reference into the author table.
    pub author: AuthorId,
    /// References into the genre table. A book may carry several genres.
    pub genres: Vec<GenreId>,
    /// Cover image URI.
    pub image: String,
    /// Long-form description shown in the detail view.
    pub description: String,
    /// Publication instant.
    pub published: DateTime<Utc>,
}

impl Book {
    /// Publication year (UTC), as rendered in the detail subtitle.
    pub fn publication_year(&self) -> i32 {
        self.published.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_is_raw_string() {
        assert_eq!(BookId::new("b-17").to_string(), "b-17");
        assert_eq!(AuthorId::from("a1").as_str(), "a1");
        assert_eq!(GenreId::from("fantasy".to_string()).to_string(), "fantasy");
    }

    #[test]
    fn book_deserializes_from_catalog_json() {
        let raw = r#"{
            "id": "kgVmW0eu9ZL3cbUdjQGM",
            "title": "A Wizard of Earthsea",
            "author": "leguin",
            "genres": ["fantasy", "classic"],
            "image": "covers/earthsea.jpg",
            "description": "Sparrowhawk learns the true names of things.",
            "published": "1968-11-01T07:00:00.000Z"
        }"#;
        let book: Book = serde_json::from_str(raw).unwrap();
        assert_eq!(book.id.as_str(), "kgVmW0eu9ZL3cbUdjQGM");
        assert_eq!(book.author, AuthorId::new("leguin"));
        assert_eq!(book.genres.len(), 2);
        assert!(book.genres.contains(&GenreId::new("classic")));
        assert_eq!(book.publication_year(), 1968);
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = BookId::new("b1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"b1\"");
        let back: BookId = serde_json::from_str("\"b1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn publication_year_is_utc() {
        // 1996-12-31T23:30Z is still 1996 in UTC regardless of host zone.
        let book: Book = serde_json::from_str(
            r#"{
                "id": "b1", "title": "t", "author": "a",
                "genres": [], "image": "", "description": "",
                "published": "1996-12-31T23:30:00.000Z"
            }"#,
        )
        .unwrap();
        assert_eq!(book.publication_year(), 1996);
    }
}
