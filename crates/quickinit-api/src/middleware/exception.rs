//! Server-side logging of errors rendered by [`ApiError`](crate::error::ApiError).
//!
//! The response mapping never logs by itself; this middleware reads the
//! [`HandledError`] left in the response extensions and logs it with the
//! remote host and request URI. Unclassified errors are logged with their
//! full detail here since the client only ever sees the unknown error.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, warn};

use quickinit_core::error::{AppError, ErrorKind};

use crate::error::HandledError;

/// Logs the error a response was rendered from, if any.
pub async fn log_handled_errors(request: Request, next: Next) -> Response {
    let remote_host = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let uri = request.uri().clone();

    let response = next.run(request).await;

    if let Some(HandledError(err)) = response.extensions().get::<HandledError>() {
        log_error(&remote_host, &uri, err);
    }
    response
}

fn log_error(remote_host: &str, uri: &Uri, err: &AppError) {
    match err.kind {
        ErrorKind::Business | ErrorKind::System => error!(
            remote_host,
            uri = %uri,
            code = err.code,
            msg = %err.message,
            "Application error"
        ),
        ErrorKind::MissingParameter | ErrorKind::Validation => error!(
            remote_host,
            uri = %uri,
            msg = %err.message,
            "Request parameter rejected"
        ),
        ErrorKind::MalformedBody => error!(
            remote_host,
            uri = %uri,
            error = %err,
            "Unreadable request body"
        ),
        ErrorKind::ConstraintViolation => warn!(
            remote_host,
            uri = %uri,
            msg = %err.message,
            "Parameter constraint violated"
        ),
        ErrorKind::MethodNotAllowed | ErrorKind::UnsupportedMediaType | ErrorKind::AccessDenied => {
            warn!(remote_host, uri = %uri, kind = %err.kind, "Request refused")
        }
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => error!(
            remote_host,
            uri = %uri,
            error = %err,
            source = ?err.source,
            "Unhandled error"
        ),
    }
}
