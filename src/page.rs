//! Pagination: a monotonic page cursor and fixed-size result windows.
//!
//! Windows are cut from a [`MatchSet`] in slices of [`BOOKS_PER_PAGE`].
//! The first window always covers positions `[0, P)`; the window at
//! cursor value `k` covers `[k*P, (k+1)*P)` and is the `k + 1`th page a
//! reader sees. All arithmetic saturates, so a cursor pushed past the
//! end of the match set yields an empty window rather than a panic.

use std::fmt;
use std::num::NonZeroU32;

use crate::catalog::model::Book;
use crate::query::MatchSet;

/// How many books one window holds.
pub const BOOKS_PER_PAGE: usize = 36;

/// One-based position in a paged result set.
///
/// A cursor starts at 1, only ever moves forward, and saturates instead
/// of wrapping. Rewinding means replacing it via [`PageCursor::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCursor(NonZeroU32);

impl PageCursor {
    /// A cursor at the first page.
    pub fn start() -> Self {
        Self(NonZeroU32::MIN)
    }

    /// Move back to the first page.
    pub fn reset(&mut self) {
        *self = Self::start();
    }

    /// Move forward one page, holding at `u32::MAX` rather than wrapping.
    pub fn advance(&mut self) {
        self.0 = self.0.checked_add(1).unwrap_or(self.0);
    }

    /// The current one-based position.
    pub fn current(&self) -> u32 {
        self.0.get()
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One page worth of matched books, plus how many come after it.
#[derive(Debug)]
pub struct Window<'a> {
    items: Vec<&'a Book>,
    remaining: usize,
    page: u32,
}

impl<'a> Window<'a> {
    fn build(matches: &'a MatchSet, index: usize, page: u32) -> Self {
        let total = matches.len();
        let start = index.saturating_mul(BOOKS_PER_PAGE);
        let end = start.saturating_add(BOOKS_PER_PAGE);
        let items = matches
            .positions()
            .get(start..end.min(total))
            .unwrap_or(&[])
            .iter()
            .map(|&pos| &matches.catalog().books()[pos])
            .collect();
        Self {
            items,
            remaining: total.saturating_sub(end),
            page,
        }
    }

    /// The opening window of a match set: positions `[0, P)`.
    pub fn first(matches: &'a MatchSet) -> Self {
        Self::build(matches, 0, 1)
    }

    /// The window the cursor points at: positions `[k*P, (k+1)*P)` for
    /// cursor value `k`, which readers see as page `k + 1`.
    pub fn at(matches: &'a MatchSet, cursor: PageCursor) -> Self {
        let index = cursor.current() as usize;
        Self::build(matches, index, cursor.current().saturating_add(1))
    }

    /// Books in this window, in shelf order.
    pub fn items(&self) -> &[&'a Book] {
        &self.items
    }

    /// How many matches come after this window.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Whether another non-empty window follows this one.
    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// One-based page number a reader would see for this window.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True only for the opening window of an empty match set. An empty
    /// window deeper in (from a cursor pushed past the end) does not
    /// count as "no results".
    pub fn no_results(&self) -> bool {
        self.page == 1 && self.items.is_empty() && self.remaining == 0
    }
}
