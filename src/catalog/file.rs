//! Catalog data file: the JSON payload loaded at startup.
//!
//! One document carries everything the store needs:
//!
//! ```json
//! {
//!   "books":   [{ "id", "title", "author", "genres", "image",
//!                 "description", "published" }, ...],
//!   "authors": [{ "id": "...", "name": "..." }, ...],
//!   "genres":  [{ "id": "...", "name": "..." }, ...]
//! }
//! ```
//!
//! The tables are arrays rather than objects so their entry order is
//! explicit; option lists render in exactly this order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::model::{AuthorId, Book, GenreId};
use crate::catalog::store::{AuthorTable, Catalog, GenreTable};
use crate::error::{BiblosResult, SourceError};

/// One id → name row in a table section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameEntry {
    pub id: String,
    pub name: String,
}

/// On-disk shape of the catalog payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub books: Vec<Book>,
    pub authors: Vec<NameEntry>,
    pub genres: Vec<NameEntry>,
}

impl CatalogFile {
    /// Validate the payload and build the in-memory catalog.
    pub fn into_catalog(self) -> BiblosResult<Catalog> {
        let authors = AuthorTable::from_entries(
            self.authors
                .into_iter()
                .map(|entry| (AuthorId::new(entry.id), entry.name)),
        )?;
        let genres = GenreTable::from_entries(
            self.genres
                .into_iter()
                .map(|entry| (GenreId::new(entry.id), entry.name)),
        )?;
        Ok(Catalog::load(self.books, authors, genres)?)
    }
}

/// Read, parse, and validate a catalog file.
///
/// Any failure here aborts startup; there is no partially loaded catalog.
pub fn read_catalog(path: &Path) -> BiblosResult<Catalog> {
    let data = std::fs::read_to_string(path).map_err(|e| SourceError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: CatalogFile = serde_json::from_str(&data).map_err(|e| SourceError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    file.into_catalog()
}
