//! Form definitions backing the pager routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod pager;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid page index")]
    InvalidPageIndex,

    #[error("invalid page size")]
    InvalidPageSize,

    #[error("invalid group size")]
    InvalidGroupSize,
}
