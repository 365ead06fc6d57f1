//! In-memory catalog store: the immutable book list and its lookup tables.
//!
//! Everything here is loaded once at startup, validated, and read-only
//! thereafter. Sessions share one catalog behind an `Arc`; queries and
//! windows only ever read from it.

use std::collections::HashMap;
use std::hash::Hash;

use crate::catalog::model::{AuthorId, Book, BookId, GenreId};
use crate::error::CatalogError;

/// Insertion-ordered id → display-name table.
///
/// Order is part of the contract: filter option lists render entries in the
/// order they were loaded, so the table keeps a `Vec` for iteration and a
/// map for O(1) resolution.
#[derive(Debug, Clone)]
pub struct NameTable<K> {
    table: &'static str,
    entries: Vec<(K, String)>,
    index: HashMap<K, usize>,
}

/// Author id → display name.
pub type AuthorTable = NameTable<AuthorId>;

/// Genre id → display name.
pub type GenreTable = NameTable<GenreId>;

impl<K> NameTable<K>
where
    K: Eq + Hash + Clone + std::fmt::Display,
{
    fn with_table(
        table: &'static str,
        entries: impl IntoIterator<Item = (K, String)>,
    ) -> Result<Self, CatalogError> {
        let entries: Vec<(K, String)> = entries.into_iter().collect();
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, (id, _)) in entries.iter().enumerate() {
            if index.insert(id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateEntry {
                    table,
                    id: id.to_string(),
                });
            }
        }
        Ok(Self {
            table,
            entries,
            index,
        })
    }

    /// Resolve an id to its display name.
    ///
    /// A miss is `CatalogError::UnknownReference`; callers rendering names
    /// should recover with a fallback label rather than propagate it.
    pub fn resolve(&self, id: &K) -> Result<&str, CatalogError> {
        self.get(id).ok_or_else(|| CatalogError::UnknownReference {
            table: self.table,
            id: id.to_string(),
        })
    }

    /// Display name for an id, if present.
    pub fn get(&self, id: &K) -> Option<&str> {
        self.index
            .get(id)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Whether the table holds an entry for this id.
    pub fn contains(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in insertion order, for rendering option lists.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> + '_ {
        self.entries.iter().map(|(id, name)| (id, name.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AuthorTable {
    /// Build the author table, rejecting duplicate ids.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (AuthorId, String)>,
    ) -> Result<Self, CatalogError> {
        Self::with_table("author", entries)
    }
}

impl GenreTable {
    /// Build the genre table, rejecting duplicate ids.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (GenreId, String)>,
    ) -> Result<Self, CatalogError> {
        Self::with_table("genre", entries)
    }
}

/// The immutable book catalog plus its author and genre side-tables.
///
/// `load` is the only constructor and the only moment anything is checked:
/// after it returns, every reference in every book is known to resolve, so
/// the read paths never revalidate.
#[derive(Debug)]
pub struct Catalog {
    books: Vec<Book>,
    by_id: HashMap<BookId, usize>,
    authors: AuthorTable,
    genres: GenreTable,
}

impl Catalog {
    /// One-time initialization.
    ///
    /// Fails if two books share an id, or if any book references an author
    /// or genre id absent from the corresponding table. A failed load is
    /// fatal: there is no partial catalog.
    pub fn load(
        books: Vec<Book>,
        authors: AuthorTable,
        genres: GenreTable,
    ) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(books.len());
        for (pos, book) in books.iter().enumerate() {
            if by_id.insert(book.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateBook {
                    id: book.id.to_string(),
                });
            }
            if !authors.contains(&book.author) {
                return Err(CatalogError::DanglingReference {
                    book: book.id.to_string(),
                    table: "author",
                    id: book.author.to_string(),
                });
            }
            for genre in &book.genres {
                if !genres.contains(genre) {
                    return Err(CatalogError::DanglingReference {
                        book: book.id.to_string(),
                        table: "genre",
                        id: genre.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            books = books.len(),
            authors = authors.len(),
            genres = genres.len(),
            "catalog loaded"
        );

        Ok(Self {
            books,
            by_id,
            authors,
            genres,
        })
    }

    /// Direct lookup by id, independent of any active match set.
    ///
    /// `None` is the normal miss outcome; callers check it before rendering.
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.by_id.get(id).map(|&pos| &self.books[pos])
    }

    /// All books, in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The author lookup table.
    pub fn authors(&self) -> &AuthorTable {
        &self.authors
    }

    /// The genre lookup table.
    pub fn genres(&self) -> &GenreTable {
        &self.genres
    }
}
