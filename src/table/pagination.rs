//! Pagination state.
//!
//! Derives the page count from a total item count and a page size, keeps
//! the current page inside `[1, max(1, total_pages)]`, and optionally
//! mirrors the page number into a shareable `PageLocation`.

use std::fmt;
use std::ops::Range;

use tracing::{debug, trace};

use super::location::PageLocation;

/// Page size used when none is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Pagination state for a collection.
pub struct Pagination {
    /// Current page, 1-based.
    current_page: usize,
    /// Rows per page, never zero.
    items_per_page: usize,
    /// Length of the caller's full collection.
    total_items: usize,
    /// Where the page number is reflected, if anywhere.
    location: Option<Box<dyn PageLocation>>,
    /// Last page value observed in (or written to) the location.
    last_seen: Option<usize>,
}

impl Pagination {
    /// Create pagination for `total_items` items, starting at page 1.
    pub fn new(total_items: usize, items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items,
            location: None,
            last_seen: None,
        }
    }

    /// Attach a page location and read the initial page from it.
    ///
    /// A page beyond the currently known total is applied again on the next
    /// `sync_from_location`, once the real total is known.
    pub fn with_location(mut self, location: Box<dyn PageLocation>) -> Self {
        if let Some(page) = location.read_page() {
            self.current_page = self.clamp(page);
            if self.current_page == page {
                self.last_seen = Some(page);
            }
        }
        self.location = Some(location);
        self
    }

    /// Get the current page (1-based).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Get the page size.
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Get the total item count.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Get the number of pages: `ceil(total_items / items_per_page)`.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Check if there is a page after the current one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Check if there is a page before the current one.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Go to a page, clamping it into range. Returns the committed page.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let clamped = self.clamp(page);
        if clamped != page {
            trace!(requested = page, clamped, "Page request clamped");
        }
        self.commit(clamped);
        clamped
    }

    /// Go to the next page.
    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    /// Go to the previous page.
    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Go to the first page.
    pub fn first_page(&mut self) -> usize {
        self.go_to_page(1)
    }

    /// Go to the last page.
    pub fn last_page(&mut self) -> usize {
        self.go_to_page(self.total_pages())
    }

    /// Change the page size and re-clamp the current page.
    ///
    /// The page number is kept (then clamped); the first visible item is
    /// not preserved.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        debug!(
            items_per_page = self.items_per_page,
            total_pages = self.total_pages(),
            "Page size changed"
        );
        self.reclamp();
    }

    /// Change the total item count and re-clamp the current page.
    pub fn set_total_items(&mut self, total_items: usize) {
        if self.total_items != total_items {
            self.total_items = total_items;
            self.reclamp();
        }
    }

    /// Re-read the page from the attached location.
    ///
    /// When the location changed since it was last seen, the current page
    /// follows it (clamped; a missing page means page 1). Returns `true`
    /// if the current page changed.
    ///
    /// With no items the location is left pending: nothing is read and no
    /// clamped page is written back, so the page applies once items arrive.
    pub fn sync_from_location(&mut self) -> bool {
        let Some(location) = self.location.as_ref() else {
            return false;
        };
        if self.total_items == 0 {
            return false;
        }

        let observed = location.read_page();
        if observed == self.last_seen {
            return false;
        }

        debug!(?observed, previous = ?self.last_seen, "Page location changed externally");
        self.last_seen = observed;

        let requested = observed.unwrap_or(1);
        let before = self.current_page;
        let clamped = self.clamp(requested);
        if clamped != requested {
            self.commit(clamped);
        } else {
            self.current_page = clamped;
        }
        before != self.current_page
    }

    /// The index window of the current page into the full collection.
    pub fn page_range(&self) -> Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.items_per_page)
            .min(self.total_items);
        let end = start.saturating_add(self.items_per_page).min(self.total_items);
        start..end
    }

    /// Return to page 1.
    pub fn reset(&mut self) {
        self.commit(1);
    }

    fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    fn reclamp(&mut self) {
        let clamped = self.clamp(self.current_page);
        if clamped != self.current_page {
            debug!(from = self.current_page, to = clamped, "Current page re-clamped");
            self.commit(clamped);
        }
    }

    fn commit(&mut self, page: usize) {
        self.current_page = page;
        if let Some(location) = self.location.as_mut() {
            location.write_page(page);
            self.last_seen = Some(page);
        }
    }
}

impl fmt::Debug for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("current_page", &self.current_page)
            .field("items_per_page", &self.items_per_page)
            .field("total_items", &self.total_items)
            .field("has_location", &self.location.is_some())
            .finish()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, DEFAULT_ITEMS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::table::location::QueryString;

    #[test]
    fn test_total_pages_is_ceiling() {
        for total in 0..40 {
            for size in 1..8 {
                let pagination = Pagination::new(total, size);
                let expected = (total + size - 1) / size;
                assert_eq!(pagination.total_pages(), expected, "N={} S={}", total, size);
            }
        }
    }

    #[test]
    fn test_current_page_stays_in_range() {
        let mut pagination = Pagination::new(23, 5);

        for step in 0..60usize {
            match (step * 7 + 3) % 5 {
                0 => pagination.next_page(),
                1 => pagination.prev_page(),
                2 => pagination.go_to_page(0),
                3 => pagination.go_to_page(99),
                _ => pagination.go_to_page(usize::MAX),
            };
            if step % 4 == 0 {
                pagination.next_page();
            }

            let page = pagination.current_page();
            assert!(page >= 1 && page <= pagination.total_pages().max(1));
        }
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut pagination = Pagination::new(12, 5);
        assert_eq!(pagination.go_to_page(10), 3);
        assert_eq!(pagination.go_to_page(0), 1);
        assert_eq!(pagination.go_to_page(2), 2);
    }

    #[test]
    fn test_empty_collection_stays_on_page_one() {
        let mut pagination = Pagination::new(0, 5);
        assert_eq!(pagination.total_pages(), 0);
        assert_eq!(pagination.next_page(), 1);
        assert_eq!(pagination.last_page(), 1);
        assert_eq!(pagination.page_range(), 0..0);
    }

    #[test]
    fn test_next_and_prev() {
        let mut pagination = Pagination::new(11, 5);
        assert!(!pagination.has_prev());
        assert_eq!(pagination.next_page(), 2);
        assert_eq!(pagination.next_page(), 3);
        assert_eq!(pagination.next_page(), 3);
        assert!(!pagination.has_next());
        assert_eq!(pagination.prev_page(), 2);
    }

    #[test]
    fn test_page_range() {
        let mut pagination = Pagination::new(12, 5);
        assert_eq!(pagination.page_range(), 0..5);
        pagination.go_to_page(3);
        assert_eq!(pagination.page_range(), 10..12);
    }

    #[test]
    fn test_page_size_change_reclamps() {
        let mut pagination = Pagination::new(20, 5);
        pagination.go_to_page(4);
        pagination.set_items_per_page(10);
        assert_eq!(pagination.total_pages(), 2);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_zero_page_size_becomes_one() {
        let mut pagination = Pagination::new(3, 0);
        assert_eq!(pagination.items_per_page(), 1);
        pagination.set_items_per_page(0);
        assert_eq!(pagination.total_pages(), 3);
    }

    #[test]
    fn test_shrinking_total_reclamps() {
        let mut pagination = Pagination::new(11, 5);
        pagination.go_to_page(3);
        pagination.set_total_items(10);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_location_read_on_attach() {
        let pagination =
            Pagination::new(30, 5).with_location(Box::new(QueryString::parse("?page=4")));
        assert_eq!(pagination.current_page(), 4);
    }

    #[test]
    fn test_location_page_applied_once_total_known() {
        let mut pagination =
            Pagination::new(0, 5).with_location(Box::new(QueryString::parse("?page=3")));
        assert_eq!(pagination.current_page(), 1);

        pagination.set_total_items(20);
        assert!(pagination.sync_from_location());
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_location_left_pending_while_empty() {
        let shared = Arc::new(Mutex::new(QueryString::parse("?page=3")));
        let mut pagination = Pagination::new(0, 1).with_location(Box::new(Arc::clone(&shared)));

        assert!(!pagination.sync_from_location());
        assert_eq!(shared.lock().unwrap().to_query(), "?page=3");

        pagination.set_total_items(3);
        assert!(pagination.sync_from_location());
        assert_eq!(pagination.current_page(), 3);
        assert_eq!(shared.lock().unwrap().to_query(), "?page=3");
    }

    #[test]
    fn test_location_written_on_change() {
        let shared = Arc::new(Mutex::new(QueryString::new()));
        let mut pagination = Pagination::new(30, 5).with_location(Box::new(Arc::clone(&shared)));

        pagination.go_to_page(3);
        assert_eq!(shared.lock().unwrap().to_query(), "?page=3");

        pagination.go_to_page(50);
        assert_eq!(shared.lock().unwrap().to_query(), "?page=6");
    }

    #[test]
    fn test_external_location_change_resyncs() {
        let shared = Arc::new(Mutex::new(QueryString::parse("?page=2")));
        let mut pagination = Pagination::new(30, 5).with_location(Box::new(Arc::clone(&shared)));
        assert_eq!(pagination.current_page(), 2);

        assert!(!pagination.sync_from_location());

        shared.lock().unwrap().set_query("?page=5");
        assert!(pagination.sync_from_location());
        assert_eq!(pagination.current_page(), 5);

        shared.lock().unwrap().set_query("");
        assert!(pagination.sync_from_location());
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_external_out_of_range_page_is_clamped_and_written_back() {
        let shared = Arc::new(Mutex::new(QueryString::new()));
        let mut pagination = Pagination::new(10, 5).with_location(Box::new(Arc::clone(&shared)));

        shared.lock().unwrap().set_query("?page=9");
        pagination.sync_from_location();
        assert_eq!(pagination.current_page(), 2);
        assert_eq!(shared.lock().unwrap().to_query(), "?page=2");
    }
}
