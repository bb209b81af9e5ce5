//! View model of the pager widget, shared by the HTML and JSON routes.

use serde::Serialize;

use crate::pagination::{Pager, RowRange};

/// A numbered page button.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageButton {
    pub page: usize,
    pub current: bool,
}

/// The "41–47 of 47" caption.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RangeView {
    pub from: usize,
    pub to: usize,
    pub total: usize,
    pub label: String,
}

impl From<RowRange> for RangeView {
    fn from(range: RowRange) -> Self {
        Self {
            from: range.from,
            to: range.to,
            total: range.total,
            label: range.to_string(),
        }
    }
}

/// Data required to render the pager template.
///
/// Disabled or hidden controls carry `None` instead of a target page.
#[derive(Debug, Serialize)]
pub struct PagerView {
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub group_size: usize,
    pub total: usize,
    pub buttons: Vec<PageButton>,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
    pub previous_group: Option<usize>,
    pub next_group: Option<usize>,
    pub range: RangeView,
    pub disabled: bool,
    pub page_size_options: Vec<usize>,
}

impl PagerView {
    pub fn new(pager: &Pager, page_size_options: &[usize]) -> Self {
        let window = &pager.window;
        let buttons = window
            .pages()
            .map(|page| PageButton {
                page,
                current: page == window.current,
            })
            .collect();

        let page_size = pager.state.page_size.get();
        let mut page_size_options = page_size_options.to_vec();
        if !page_size_options.contains(&page_size) {
            page_size_options.push(page_size);
            page_size_options.sort_unstable();
        }

        Self {
            page: window.current,
            page_size,
            page_count: window.page_count,
            group_size: pager.group_size.get(),
            total: pager.range.total,
            buttons,
            previous_page: window.previous_page(),
            next_page: window.next_page(),
            previous_group: window.previous_group(),
            next_group: window.next_group(),
            range: pager.range.into(),
            disabled: window.is_empty(),
            page_size_options,
        }
    }
}
