//! Core type definitions used across the QuickInit workspace.

pub mod error_message;
pub mod pagination;
pub mod response;

pub use error_message::CommonErrorMessage;
pub use pagination::{PageRequest, PageResponse};
pub use response::RestResponse;
