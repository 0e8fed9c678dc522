//! Custom Axum extractors.

pub mod pagination;
pub mod valid;

pub use pagination::PaginationParams;
pub use valid::{ValidJson, ValidQuery, first_violation};
