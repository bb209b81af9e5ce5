//! Strongly-typed value objects used by the pager.
//!
//! These wrappers enforce the positivity invariants of pagination inputs so
//! that once a value reaches the calculator it can be treated as trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Page numbers are 1-based; zero is not a page.
    #[error("page index must be greater than zero")]
    NonPositivePageIndex,
    /// A page must hold at least one row.
    #[error("page size must be greater than zero")]
    NonPositivePageSize,
    /// A page group must show at least one button.
    #[error("group size must be greater than zero")]
    NonPositiveGroupSize,
}

/// Macro to generate lightweight newtypes for positive pagination values.
macro_rules! positive_newtype {
    ($name:ident, $error:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "usize", into = "usize")]
        pub struct $name(usize);

        impl $name {
            /// Creates a new value ensuring it is greater than zero.
            pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::$error)
                }
            }

            /// Returns the raw `usize` backing this value.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_newtype!(
    PageIndex,
    NonPositivePageIndex,
    "1-based number of a page in a data grid."
);
positive_newtype!(
    PageSize,
    NonPositivePageSize,
    "Number of rows shown on a single page."
);
positive_newtype!(
    GroupSize,
    NonPositiveGroupSize,
    "Maximum number of page buttons rendered at once."
);

impl PageIndex {
    /// The first page.
    pub const FIRST: Self = Self(1);
}

impl Default for PageIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(crate::pagination::DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        Self(crate::pagination::DEFAULT_GROUP_SIZE)
    }
}
