//! Catalog subsystem: the immutable book collection and its lookup tables.
//!
//! A [`Catalog`] is loaded once from a JSON payload ([`file`]), validated
//! for duplicate ids and dangling references ([`store`]), and then shared
//! read-only behind an `Arc` for the lifetime of the process. Queries and
//! pagination never mutate it.

pub mod file;
pub mod model;
pub mod store;

pub use file::{read_catalog, CatalogFile, NameEntry};
pub use model::{AuthorId, Book, BookId, GenreId};
pub use store::{AuthorTable, Catalog, GenreTable, NameTable};
