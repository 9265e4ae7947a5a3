//! Client-side pagination state
//!
//! Page indices are 0-based. Every navigation takes the current number of
//! filtered rows so the index always stays within `0..page_count`.

use std::ops::Range;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    page_index: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page index as stored, not clamped to the row count
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Total number of pages, at least one
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Page index clamped to the last page for `total_rows`
    pub fn current_page(&self, total_rows: usize) -> usize {
        self.page_index.min(self.page_count(total_rows) - 1)
    }

    /// Row positions (in the sorted row model) shown on the current page
    pub fn page_range(&self, total_rows: usize) -> Range<usize> {
        let start = self.current_page(total_rows) * self.page_size;
        let end = (start + self.page_size).min(total_rows);
        start.min(total_rows)..end
    }

    pub fn can_previous(&self, total_rows: usize) -> bool {
        self.current_page(total_rows) > 0
    }

    pub fn can_next(&self, total_rows: usize) -> bool {
        self.current_page(total_rows) + 1 < self.page_count(total_rows)
    }

    pub fn next(&mut self, total_rows: usize) {
        if self.can_next(total_rows) {
            self.page_index = self.current_page(total_rows) + 1;
        }
    }

    pub fn previous(&mut self, total_rows: usize) {
        if self.can_previous(total_rows) {
            self.page_index = self.current_page(total_rows) - 1;
        }
    }

    pub fn first(&mut self) {
        self.page_index = 0;
    }

    pub fn last(&mut self, total_rows: usize) {
        self.page_index = self.page_count(total_rows) - 1;
    }

    /// Navigate to a specific page, clamped to the valid range
    pub fn set_page(&mut self, page_index: usize, total_rows: usize) {
        self.page_index = page_index.min(self.page_count(total_rows) - 1);
    }

    /// Change the page size and go back to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if self.page_size != page_size {
            self.page_size = page_size;
            self.page_index = 0;
        }
    }
}
