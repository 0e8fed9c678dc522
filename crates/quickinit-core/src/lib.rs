//! # quickinit-core
//!
//! Core crate for QuickInit. Contains the unified error system, the
//! response envelope, configuration schemas, pagination types, and the
//! traits the persistence and service layers are written against.
//!
//! This crate has **no** internal dependencies on other QuickInit crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
pub use types::error_message::CommonErrorMessage;
pub use types::response::RestResponse;
