use thiserror::Error;

pub mod pager;

/// Errors surfaced by the service layer to the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
