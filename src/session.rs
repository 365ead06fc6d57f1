//! Browse session: one reader's live match set and page cursor.
//!
//! The session owns the only mutable state in the engine. Submitting new
//! criteria replaces the (match set, cursor) pair in a single step, so a
//! window is always cut from the match set its cursor belongs to.
//! Everything else here is a read.

use std::sync::Arc;

use crate::catalog::model::Book;
use crate::catalog::store::Catalog;
use crate::page::{PageCursor, Window};
use crate::query::{evaluate, Criteria, MatchSet};

/// A reader's position in the catalog: current matches plus how far
/// through them they have paged.
#[derive(Debug)]
pub struct BrowseSession {
    catalog: Arc<Catalog>,
    matches: MatchSet,
    cursor: PageCursor,
}

impl BrowseSession {
    /// Open a session showing the whole catalog, unfiltered.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let matches = evaluate(Arc::clone(&catalog), &Criteria::default());
        Self {
            catalog,
            matches,
            cursor: PageCursor::start(),
        }
    }

    /// Run a new search. The previous match set and cursor are replaced
    /// together, and the opening window of the new results is returned.
    pub fn submit(&mut self, criteria: &Criteria) -> Window<'_> {
        self.matches = evaluate(Arc::clone(&self.catalog), criteria);
        self.cursor.reset();
        tracing::debug!(matched = self.matches.len(), "search submitted");
        Window::first(&self.matches)
    }

    /// Reveal the next page of the current match set and move the cursor
    /// past it. Past the end this yields an empty window, never an error.
    pub fn show_more(&mut self) -> Window<'_> {
        let window = Window::at(&self.matches, self.cursor);
        self.cursor.advance();
        window
    }

    /// Re-read the opening window without disturbing the cursor.
    pub fn first_window(&self) -> Window<'_> {
        Window::first(&self.matches)
    }

    /// Look a book up by id straight from the catalog, ignoring the
    /// active search. A miss is an ordinary `None`, not an error.
    pub fn select(&self, id: &str) -> Option<&Book> {
        self.catalog.find_by_id(id)
    }

    /// How many books the current search matched in total.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// The cursor's current one-based page position.
    pub fn page(&self) -> u32 {
        self.cursor.current()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
