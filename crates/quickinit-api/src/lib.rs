//! # quickinit-api
//!
//! HTTP API layer for QuickInit built on Axum.
//!
//! Provides the REST endpoints, the request interceptor chain, validating
//! extractors, and the mapping from [`quickinit_core::AppError`] to the
//! response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
