//! # biblos
//!
//! An in-memory book catalog with filtered, paged browsing: load a
//! validated catalog once, evaluate search criteria against it, and
//! reveal the matches one fixed-size window at a time.
//!
//! ## Architecture
//!
//! - **Catalog store** (`catalog`): immutable book collection plus author/genre
//!   name tables, validated for duplicates and dangling references at load
//! - **Query evaluator** (`query`): title/author/genre predicates joined by AND,
//!   always order-preserving
//! - **Pagination** (`page`): a monotonic page cursor and 36-book result windows
//! - **Sessions** (`session`): the single mutable (match set, cursor) pair
//! - **Projections** (`preview`): list rows and detail views for rendering
//!
//! ## Library usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use biblos::catalog::{AuthorId, AuthorTable, Book, BookId, Catalog, GenreId, GenreTable};
//! use biblos::query::Criteria;
//! use biblos::session::BrowseSession;
//! use chrono::{TimeZone, Utc};
//!
//! let books = vec![Book {
//!     id: BookId::new("b1"),
//!     title: "A Wizard of Earthsea".into(),
//!     author: AuthorId::new("leguin"),
//!     genres: vec![GenreId::new("fantasy")],
//!     image: "covers/earthsea.jpg".into(),
//!     description: "Sparrowhawk learns the true names of things.".into(),
//!     published: Utc.with_ymd_and_hms(1968, 11, 1, 0, 0, 0).unwrap(),
//! }];
//! let authors = AuthorTable::from_entries([(
//!     AuthorId::new("leguin"),
//!     "Ursula K. Le Guin".to_string(),
//! )])
//! .unwrap();
//! let genres =
//!     GenreTable::from_entries([(GenreId::new("fantasy"), "Fantasy".to_string())]).unwrap();
//! let catalog = Arc::new(Catalog::load(books, authors, genres).unwrap());
//!
//! let mut session = BrowseSession::new(catalog);
//! let window = session.submit(&Criteria::from_form("wizard", "any", "any"));
//! assert_eq!(window.len(), 1);
//! assert_eq!(window.items()[0].title, "A Wizard of Earthsea");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod page;
pub mod preview;
pub mod query;
pub mod session;
