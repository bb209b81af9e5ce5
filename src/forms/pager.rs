//! Query string accepted by the pager endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::page::PageState;
use crate::domain::types::{GroupSize, PageIndex, PageSize};
use crate::forms::FormError;
use crate::pagination::PageAction;

pub const MAX_ITEMS_PER_PAGE: usize = 1000;
pub const MAX_GROUP_SIZE: usize = 50;

/// Raw pager parameters as sent by the grid.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PagerForm {
    /// Row count reported by the server.
    pub total: usize,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = MAX_ITEMS_PER_PAGE))]
    pub page_size: Option<usize>,
    #[validate(range(min = 1, max = MAX_GROUP_SIZE))]
    pub group_size: Option<usize>,
    pub action: Option<PageAction>,
    /// Page size before the user picked a new one in the selector.
    #[validate(range(min = 1, max = MAX_ITEMS_PER_PAGE))]
    pub prev_page_size: Option<usize>,
}

/// Validated pager request.
#[derive(Debug, PartialEq, Eq)]
pub struct PagerPayload {
    pub state: PageState,
    pub total_rows: usize,
    pub group_size: GroupSize,
    pub action: Option<PageAction>,
    pub prev_page_size: Option<PageSize>,
}

impl PagerForm {
    /// Validates the form, filling omitted values from the configured defaults.
    pub fn into_payload(
        self,
        default_page_size: PageSize,
        default_group_size: GroupSize,
    ) -> Result<PagerPayload, FormError> {
        self.validate()?;

        let page_index = self.page.map(PageIndex::new).transpose()?.unwrap_or_default();
        let page_size = self
            .page_size
            .map(PageSize::new)
            .transpose()?
            .unwrap_or(default_page_size);
        let group_size = self
            .group_size
            .map(GroupSize::new)
            .transpose()?
            .unwrap_or(default_group_size);
        let prev_page_size = self.prev_page_size.map(PageSize::new).transpose()?;

        Ok(PagerPayload {
            state: PageState::new(page_index, page_size),
            total_rows: self.total,
            group_size,
            action: self.action,
            prev_page_size,
        })
    }
}
