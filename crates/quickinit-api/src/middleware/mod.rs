//! Axum middleware stack.

pub mod cors;
pub mod exception;
pub mod interceptor;
pub mod logging;
pub mod panic;
