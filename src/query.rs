//! Query evaluation: turn search criteria into an ordered match set.
//!
//! A [`Criteria`] is three independent predicates joined by AND: a
//! case-insensitive title phrase, an author filter, and a genre filter.
//! Evaluation walks the catalog once, in shelf order, and records the
//! positions of the books that pass all three. The resulting [`MatchSet`]
//! pins the catalog it was computed against, so a window can never be cut
//! from one catalog using positions from another.

use std::fmt;
use std::sync::Arc;

use crate::catalog::model::{AuthorId, Book, GenreId};
use crate::catalog::store::Catalog;

/// Sentinel filter value meaning "do not restrict".
pub const ANY: &str = "any";

/// Author restriction: everything, or exactly one author id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorFilter {
    #[default]
    Any,
    Only(AuthorId),
}

impl AuthorFilter {
    /// Parse a raw form value, treating [`ANY`] as no restriction.
    pub fn from_form(value: &str) -> Self {
        if value == ANY {
            Self::Any
        } else {
            Self::Only(AuthorId::new(value))
        }
    }

    fn matches(&self, book: &Book) -> bool {
        match self {
            Self::Any => true,
            Self::Only(id) => book.author == *id,
        }
    }
}

impl fmt::Display for AuthorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY),
            Self::Only(id) => write!(f, "{id}"),
        }
    }
}

/// Genre restriction: everything, or books tagged with one genre id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
    #[default]
    Any,
    Only(GenreId),
}

impl GenreFilter {
    /// Parse a raw form value, treating [`ANY`] as no restriction.
    pub fn from_form(value: &str) -> Self {
        if value == ANY {
            Self::Any
        } else {
            Self::Only(GenreId::new(value))
        }
    }

    fn matches(&self, book: &Book) -> bool {
        match self {
            Self::Any => true,
            Self::Only(id) => book.genres.contains(id),
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(ANY),
            Self::Only(id) => write!(f, "{id}"),
        }
    }
}

/// A complete search: title phrase plus author and genre filters.
///
/// The default value matches every book in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub title: String,
    pub author: AuthorFilter,
    pub genre: GenreFilter,
}

impl Criteria {
    /// Build criteria from raw form values.
    pub fn from_form(title: impl Into<String>, author: &str, genre: &str) -> Self {
        Self {
            title: title.into(),
            author: AuthorFilter::from_form(author),
            genre: GenreFilter::from_form(genre),
        }
    }

    /// Title predicate. Emptiness is judged on the trimmed phrase, but
    /// containment tests the phrase exactly as typed, so stray edge
    /// whitespace in a non-blank phrase still has to match.
    fn title_matches(&self, book: &Book) -> bool {
        if self.title.trim().is_empty() {
            return true;
        }
        book.title
            .to_lowercase()
            .contains(&self.title.to_lowercase())
    }

    fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author.matches(book) && self.genre.matches(book)
    }
}

/// The outcome of evaluating one [`Criteria`] against one catalog.
///
/// Positions are indices into the catalog's shelf order, ascending, so
/// iterating a match set always yields books in the order the catalog
/// defines them.
#[derive(Debug, Clone)]
pub struct MatchSet {
    catalog: Arc<Catalog>,
    positions: Vec<usize>,
}

impl MatchSet {
    /// The catalog these positions index into.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub(crate) fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Matched books in shelf order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> + '_ {
        self.positions
            .iter()
            .map(|&pos| &self.catalog.books()[pos])
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Evaluate criteria against the whole catalog in one pass.
pub fn evaluate(catalog: Arc<Catalog>, criteria: &Criteria) -> MatchSet {
    let positions: Vec<usize> = catalog
        .books()
        .iter()
        .enumerate()
        .filter(|(_, book)| criteria.matches(book))
        .map(|(pos, _)| pos)
        .collect();
    tracing::debug!(
        matched = positions.len(),
        out_of = catalog.len(),
        title = %criteria.title,
        author = %criteria.author,
        genre = %criteria.genre,
        "query evaluated"
    );
    MatchSet { catalog, positions }
}
