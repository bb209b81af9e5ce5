//! Error conversion glue between layers.
//!
//! The domain layer must not depend on form or service error types, so the
//! conversions live here rather than next to [`TypeConstraintError`].

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<TypeConstraintError> for FormError {
    fn from(val: TypeConstraintError) -> Self {
        match val {
            TypeConstraintError::NonPositivePageIndex => FormError::InvalidPageIndex,
            TypeConstraintError::NonPositivePageSize => FormError::InvalidPageSize,
            TypeConstraintError::NonPositiveGroupSize => FormError::InvalidGroupSize,
        }
    }
}
