//! Fixed-size pagination of query results
//!
//! The active page is never stored independently of the result set: every
//! time the page count changes the cursor is re-clamped, so a shrinking
//! filter can't strand a view past its last page.

use serde::Serialize;

/// Default grid page size
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Split `items` into contiguous pages of `page_size` (the last may be shorter)
///
/// A page size of 0 is treated as 1.
pub fn paginate<T>(items: &[T], page_size: usize) -> Vec<&[T]> {
    items.chunks(page_size.max(1)).collect()
}

/// Number of pages `len` items occupy
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Active-page position within a page count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    active: usize,
    page_count: usize,
}

impl PageCursor {
    pub fn new(page_count: usize) -> Self {
        Self {
            active: 0,
            page_count,
        }
    }

    /// Current page index (0 when there are no pages)
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Adopt a new page count, clamping the active page into range
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.clamp();
    }

    /// Jump to `page`, clamped to the last page
    pub fn go_to(&mut self, page: usize) {
        self.active = page;
        self.clamp();
    }

    /// Next page; no-op on the last page
    pub fn advance(&mut self) {
        if self.can_advance() {
            self.active += 1;
        }
    }

    /// Previous page; no-op on the first page
    pub fn retreat(&mut self) {
        if self.can_retreat() {
            self.active -= 1;
        }
    }

    pub fn can_advance(&self) -> bool {
        self.active + 1 < self.page_count
    }

    pub fn can_retreat(&self) -> bool {
        self.active > 0
    }

    fn clamp(&mut self) {
        self.active = self.active.min(self.page_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_sizes() {
        let items: Vec<u32> = (1..=20).collect();
        let pages = paginate(&items, 9);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(pages[2], &[19, 20]);
        assert_eq!(page_count(items.len(), 9), 3);
    }

    #[test]
    fn test_paginate_keeps_every_item_once() {
        let items: Vec<u32> = (0..100).collect();
        let flattened: Vec<u32> = paginate(&items, 9).concat();
        assert_eq!(flattened, items);
    }

    #[test]
    fn test_paginate_empty_and_zero_size() {
        let empty: Vec<u32> = Vec::new();
        assert!(paginate(&empty, 9).is_empty());
        assert_eq!(page_count(0, 9), 0);

        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 0).len(), 3);
    }

    #[test]
    fn test_cursor_clamps_at_boundaries() {
        let mut cursor = PageCursor::new(3);
        cursor.retreat();
        assert_eq!(cursor.active(), 0);

        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.active(), 2);
        assert!(!cursor.can_advance());
        assert!(cursor.can_retreat());
    }

    #[test]
    fn test_cursor_reclamps_when_pages_shrink() {
        let mut cursor = PageCursor::new(10);
        cursor.go_to(7);
        assert_eq!(cursor.active(), 7);

        cursor.set_page_count(2);
        assert_eq!(cursor.active(), 1);

        cursor.set_page_count(0);
        assert_eq!(cursor.active(), 0);
        cursor.advance();
        cursor.retreat();
        assert_eq!(cursor.active(), 0);
    }

    #[test]
    fn test_go_to_past_end() {
        let mut cursor = PageCursor::new(4);
        cursor.go_to(99);
        assert_eq!(cursor.active(), 3);
    }
}
