//! Display projections: what a list row and a detail view show.
//!
//! These are stateless functions of a book plus the catalog tables. A
//! reference the tables cannot resolve degrades to a placeholder label
//! instead of failing the whole render.

use serde::Serialize;

use crate::catalog::model::Book;
use crate::catalog::store::Catalog;

/// Label shown when an author id cannot be resolved to a name.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One row in a result list.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image: String,
}

impl Preview {
    /// Project a book into its list-row fields.
    pub fn for_book(book: &Book, catalog: &Catalog) -> Self {
        let author = catalog
            .authors()
            .resolve(&book.author)
            .unwrap_or(UNKNOWN_AUTHOR);
        Self {
            id: book.id.to_string(),
            title: book.title.clone(),
            author: author.to_string(),
            image: book.image.clone(),
        }
    }
}

/// The expanded view of a single selected book.
#[derive(Debug, Clone, Serialize)]
pub struct BookDetail {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
}

impl BookDetail {
    /// Project a book into its detail fields. The subtitle is the
    /// resolved author name followed by the publication year.
    pub fn for_book(book: &Book, catalog: &Catalog) -> Self {
        let author = catalog
            .authors()
            .resolve(&book.author)
            .unwrap_or(UNKNOWN_AUTHOR);
        Self {
            title: book.title.clone(),
            subtitle: format!("{author} ({})", book.publication_year()),
            description: book.description.clone(),
            image: book.image.clone(),
        }
    }
}
