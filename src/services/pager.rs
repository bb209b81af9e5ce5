//! Builds the pager view for a grid request.

use log::{debug, error, warn};
use validator::Validate;

use crate::domain::page::PageState;
use crate::domain::types::{GroupSize, PageSize};
use crate::dto::pager::PagerView;
use crate::forms::pager::PagerForm;
use crate::models::config::PagerSettings;
use crate::pagination::{PageWindow, Pager};
use crate::services::{ServiceError, ServiceResult};

/// Resolves the requested page and computes the pager for it.
///
/// A page-size change (`prev_page_size` present) keeps the first visible row
/// on screen, the page index is then clamped to the page count, and finally
/// the navigation action, if any, is applied. Actions on disabled controls
/// are ignored.
pub fn load_pager(form: PagerForm, settings: &PagerSettings) -> ServiceResult<PagerView> {
    settings.validate().map_err(|err| {
        error!("Invalid pager settings: {err}");
        ServiceError::Internal(format!("invalid pager settings: {err}"))
    })?;

    let default_page_size = PageSize::new(settings.default_page_size)?;
    let default_group_size = GroupSize::new(settings.group_size)?;

    let payload = form
        .into_payload(default_page_size, default_group_size)
        .map_err(|err| {
            warn!("Rejected pager query: {err}");
            err
        })?;

    let mut state = payload.state;
    if let Some(prev_page_size) = payload.prev_page_size {
        state = PageState::new(state.page_index, prev_page_size).with_page_size(state.page_size);
    }

    let page_count = state.page_count(payload.total_rows);
    let clamped = state.clamp_to(page_count);
    if clamped != state {
        debug!(
            "Clamped page {} to {} of {page_count}",
            state.page_index,
            clamped.page_index
        );
    }
    state = clamped;

    if let Some(action) = payload.action {
        let window = PageWindow::new(state.page_index, page_count, payload.group_size);
        match window.target(action) {
            Some(page_index) => state = state.with_page_index(page_index),
            None => debug!(
                "Ignoring disabled {action:?} control on page {}",
                state.page_index
            ),
        }
    }

    let pager = Pager::with_page_count(state, payload.total_rows, page_count, payload.group_size);

    Ok(PagerView::new(&pager, &settings.page_size_options))
}
