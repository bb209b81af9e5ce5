//! Domain values shared by the pager core and the HTTP layer.

pub mod page;
pub mod types;
