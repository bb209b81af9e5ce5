//! Caller-owned pagination state of a data grid.
//!
//! The calculator in [`crate::pagination`] never mutates this state. Keeping
//! the page index within `[1, page_count]` after the page size or the row
//! count changes is the owner's job; [`PageState::with_page_size`] and
//! [`PageState::clamp_to`] exist for that.

use serde::{Deserialize, Serialize};

use crate::domain::types::{PageIndex, PageSize};

/// Current page and page size of a grid.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageState {
    pub page_index: PageIndex,
    pub page_size: PageSize,
}

impl PageState {
    pub fn new(page_index: PageIndex, page_size: PageSize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// State pointing at the first page.
    pub fn first(page_size: PageSize) -> Self {
        Self::new(PageIndex::FIRST, page_size)
    }

    /// Number of pages needed to show `total_rows` rows.
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size.get())
    }

    /// Zero-based index of the first row on the current page.
    pub fn offset(&self) -> usize {
        (self.page_index.get() - 1).saturating_mul(self.page_size.get())
    }

    pub fn with_page_index(self, page_index: PageIndex) -> Self {
        Self { page_index, ..self }
    }

    /// Switches to a new page size, landing on the page that contains the
    /// row currently shown first.
    ///
    /// The result is not clamped; follow with [`PageState::clamp_to`] once the
    /// new page count is known.
    pub fn with_page_size(self, page_size: PageSize) -> Self {
        let page_index = (self.offset() / page_size.get()).saturating_add(1);
        Self {
            page_index: PageIndex::new(page_index).unwrap_or(PageIndex::FIRST),
            page_size,
        }
    }

    /// Pulls the page index back into `[1, max(page_count, 1)]`.
    pub fn clamp_to(self, page_count: usize) -> Self {
        if self.page_index.get() <= page_count.max(1) {
            return self;
        }
        let last = PageIndex::new(page_count).unwrap_or(PageIndex::FIRST);
        self.with_page_index(last)
    }
}
