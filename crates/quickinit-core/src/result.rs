//! Convenience result type alias for QuickInit.

use crate::error::AppError;

/// A specialized `Result` type for QuickInit operations.
pub type AppResult<T> = Result<T, AppError>;
