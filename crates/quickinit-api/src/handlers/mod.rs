//! HTTP request handlers.

pub mod health;
pub mod menu;
pub mod permission;
pub mod role;
pub mod validated;

use quickinit_core::error::AppError;
use quickinit_core::types::CommonErrorMessage;

/// Business error for an id that matches no record.
pub(crate) fn not_found(entity: &str, id: i64) -> AppError {
    AppError::business(
        CommonErrorMessage::NotFound.code(),
        format!("{entity} {id} not found"),
    )
}
