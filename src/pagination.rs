//! Page-window arithmetic for data-grid pagers.
//!
//! Pages are numbered from 1. Page buttons are shown in fixed groups of
//! `group_size`: pages `1..=5`, `6..=10` and so on for the default group
//! size. Ellipsis controls jump to the last page of the previous group or
//! the first page of the next one.

use std::fmt::{Display, Formatter};
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::domain::page::PageState;
use crate::domain::types::{GroupSize, PageIndex};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const DEFAULT_GROUP_SIZE: usize = 5;

/// Rows visible on the current page, as shown in "41–47 of 47".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RowRange {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl RowRange {
    pub fn new(state: PageState, total_rows: usize) -> Self {
        let page_index = state.page_index.get();
        let page_size = state.page_size.get();

        Self {
            from: state.offset().saturating_add(1),
            to: page_index.saturating_mul(page_size).min(total_rows),
            total: total_rows,
        }
    }

    /// True when no row is visible, either because there are none or because
    /// the page lies past the end.
    pub fn is_empty(&self) -> bool {
        self.total == 0 || self.from > self.to
    }
}

impl Display for RowRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "0 of {}", self.total)
        } else {
            write!(f, "{}–{} of {}", self.from, self.to, self.total)
        }
    }
}

/// Navigation controls of a pager other than the numbered buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageAction {
    Previous,
    Next,
    PreviousGroup,
    NextGroup,
}

/// The group of page buttons around the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: usize,
    pub page_count: usize,
    pub group_start: usize,
    /// Exclusive upper bound of the group.
    pub group_end: usize,
}

impl PageWindow {
    pub fn new(page_index: PageIndex, page_count: usize, group_size: GroupSize) -> Self {
        let current = page_index.get();
        let group_size = group_size.get();

        let group_start = (current - 1) / group_size * group_size + 1;
        let group_end = group_start
            .saturating_add(group_size)
            .min(page_count.saturating_add(1));

        Self {
            current,
            page_count,
            group_start,
            group_end,
        }
    }

    /// Page numbers to render as buttons.
    pub fn pages(&self) -> Range<usize> {
        self.group_start..self.group_end
    }

    /// Target of the leading ellipsis, shown only past the first group.
    pub fn previous_group(&self) -> Option<usize> {
        (self.group_start > 1).then(|| self.group_start - 1)
    }

    /// Target of the trailing ellipsis, shown only before the last group.
    pub fn next_group(&self) -> Option<usize> {
        (self.group_end <= self.page_count).then_some(self.group_end)
    }

    pub fn previous_page(&self) -> Option<usize> {
        (self.current > 1).then(|| self.current - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (self.current < self.page_count).then(|| self.current + 1)
    }

    /// No pages at all; every control renders disabled.
    pub fn is_empty(&self) -> bool {
        self.page_count == 0
    }

    /// Page reached by `action`, or `None` when that control is disabled.
    pub fn target(&self, action: PageAction) -> Option<PageIndex> {
        let page = match action {
            PageAction::Previous => self.previous_page(),
            PageAction::Next => self.next_page(),
            PageAction::PreviousGroup => self.previous_group(),
            PageAction::NextGroup => self.next_group(),
        }?;
        PageIndex::new(page).ok()
    }
}

/// Everything needed to render one pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub state: PageState,
    pub group_size: GroupSize,
    pub range: RowRange,
    pub window: PageWindow,
}

impl Pager {
    pub fn new(state: PageState, total_rows: usize, group_size: GroupSize) -> Self {
        let page_count = state.page_count(total_rows);
        Self::with_page_count(state, total_rows, page_count, group_size)
    }

    /// Same as [`Pager::new`] for callers whose table engine reports the page
    /// count itself.
    pub fn with_page_count(
        state: PageState,
        total_rows: usize,
        page_count: usize,
        group_size: GroupSize,
    ) -> Self {
        Self {
            state,
            group_size,
            range: RowRange::new(state, total_rows),
            window: PageWindow::new(state.page_index, page_count, group_size),
        }
    }

    pub fn page_count(&self) -> usize {
        self.window.page_count
    }
}
