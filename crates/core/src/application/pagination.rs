// Pagination Controller
//
// The board reports no total count, so "last page" is inferred: a fetch of
// exactly the nominal page size means more pages may exist, anything
// shorter is the end. A full final page therefore enables one spurious
// `next`; the resulting empty page routes back through `previous`.

use crate::port::NOMINAL_PAGE_SIZE;

/// Tracks the 1-based page position and the last observed fetch size.
#[derive(Debug, Clone)]
pub struct Pager {
    current_page: u32,
    last_fetch_count: Option<usize>,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            last_fetch_count: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Record how many records the fetch for the current page returned.
    pub fn record_fetch(&mut self, count: usize) {
        self.last_fetch_count = Some(count);
    }

    /// A full page may be followed by another; anything shorter is final.
    pub fn can_next(&self) -> bool {
        self.last_fetch_count == Some(NOMINAL_PAGE_SIZE)
    }

    pub fn can_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Advance one page. No-op unless the last fetch filled the page.
    pub fn next(&mut self) {
        if self.can_next() {
            self.current_page += 1;
            self.last_fetch_count = None;
        }
    }

    /// Step back one page. No-op on page 1. Also the way out of an empty
    /// page past the end of the listing.
    pub fn previous(&mut self) {
        if self.can_previous() {
            self.current_page -= 1;
            self.last_fetch_count = None;
        }
    }

    /// Back to page 1; called on any filter or sort change.
    pub fn reset(&mut self) {
        self.current_page = 1;
        self.last_fetch_count = None;
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
