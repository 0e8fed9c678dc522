//! Renders handler panics as the unknown error.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use quickinit_core::error::AppError;

use crate::error::ApiError;

/// Panic handler for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    ApiError(AppError::internal(format!("Handler panicked: {detail}"))).into_response()
}
