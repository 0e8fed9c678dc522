//! Maps `AppError` to HTTP responses.
//!
//! Every kind has exactly one rendering rule. Business and system errors
//! keep their own code; parameter errors are wrapped into the default
//! system error; transport and authorization errors get fixed codes; the
//! rest collapse into the unknown error without exposing any detail.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use quickinit_core::error::{AppError, ErrorKind};
use quickinit_core::types::{CommonErrorMessage, RestResponse};

/// Prefix for parameters that are missing or cannot be parsed.
pub const REQUEST_PARAMETER_PREFIX: &str = "Request parameter validation failed: ";

/// Prefix for declared constraints that were violated.
pub const CONSTRAINT_PREFIX: &str = "Parameter validation failed: ";

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Convenience alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// The error a response was rendered from.
///
/// Stored in the response extensions so outer middleware can log it and
/// tell failed requests apart from successful ones.
#[derive(Debug, Clone)]
pub struct HandledError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status and body for this error. `None` means an empty body.
    pub fn render(&self) -> (StatusCode, Option<RestResponse>) {
        let err = &self.0;
        match err.kind {
            ErrorKind::Business | ErrorKind::System => (
                StatusCode::OK,
                Some(RestResponse::fail(
                    err.code.unwrap_or(CommonErrorMessage::Default.code()),
                    err.message.clone(),
                )),
            ),
            ErrorKind::MissingParameter | ErrorKind::Validation => (
                StatusCode::OK,
                Some(wrap_default(REQUEST_PARAMETER_PREFIX, &err.message)),
            ),
            ErrorKind::MalformedBody => (StatusCode::OK, None),
            ErrorKind::ConstraintViolation => (
                StatusCode::OK,
                Some(wrap_default(CONSTRAINT_PREFIX, &err.message)),
            ),
            ErrorKind::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Some(fixed(CommonErrorMessage::MethodNotAllowed)),
            ),
            ErrorKind::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Some(fixed(CommonErrorMessage::UnsupportedMediaType)),
            ),
            ErrorKind::AccessDenied => (
                StatusCode::FORBIDDEN,
                Some(fixed(CommonErrorMessage::AccessDenied)),
            ),
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                let unknown = CommonErrorMessage::unknown_exception();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Some(RestResponse::fail(
                        unknown.code.unwrap_or(CommonErrorMessage::Unknown.code()),
                        unknown.message,
                    )),
                )
            }
        }
    }
}

fn wrap_default(prefix: &str, message: &str) -> RestResponse {
    let wrapped = CommonErrorMessage::Default.system_exception(format!("{prefix}{message}"));
    RestResponse::fail(
        wrapped.code.unwrap_or(CommonErrorMessage::Default.code()),
        wrapped.message,
    )
}

fn fixed(kind: CommonErrorMessage) -> RestResponse {
    RestResponse::fail(kind.code(), kind.message())
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.render();
        let mut response = match body {
            Some(body) => (status, Json(body)).into_response(),
            None => status.into_response(),
        };
        response.extensions_mut().insert(HandledError(self.0));
        response
    }
}
