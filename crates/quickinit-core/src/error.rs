//! Unified application error types for QuickInit.
//!
//! Every layer maps its failures into [`AppError`] so they propagate with
//! `?` up to the HTTP boundary, where the API crate turns the
//! [`ErrorKind`] into a status code and a response envelope.

use std::fmt;
use thiserror::Error;

/// Error categories recognised by the exception handler.
///
/// Each variant has exactly one rendering rule at the HTTP boundary; kinds
/// without a dedicated rule (`Database`, `Configuration`, `Serialization`,
/// `Internal`) collapse into the generic unknown error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// An anticipated, user-facing application error carrying its own code.
    Business,
    /// An internal error wrapped for safe client exposure, carrying its own code.
    System,
    /// A required request parameter was absent.
    MissingParameter,
    /// A request parameter could not be parsed into its declared type.
    Validation,
    /// The request body could not be read or deserialized.
    MalformedBody,
    /// A declared constraint on a parameter or body field was violated.
    ConstraintViolation,
    /// The route exists but not for this HTTP method.
    MethodNotAllowed,
    /// The request body has a content type the handler does not accept.
    UnsupportedMediaType,
    /// The caller may not perform the request.
    AccessDenied,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Business => write!(f, "BUSINESS"),
            Self::System => write!(f, "SYSTEM"),
            Self::MissingParameter => write!(f, "MISSING_PARAMETER"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::MalformedBody => write!(f, "MALFORMED_BODY"),
            Self::ConstraintViolation => write!(f, "CONSTRAINT_VIOLATION"),
            Self::MethodNotAllowed => write!(f, "METHOD_NOT_ALLOWED"),
            Self::UnsupportedMediaType => write!(f, "UNSUPPORTED_MEDIA_TYPE"),
            Self::AccessDenied => write!(f, "ACCESS_DENIED"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout QuickInit.
///
/// Business and system errors carry an application `code` that is passed
/// to the client verbatim; the other kinds leave it empty and are assigned
/// a fixed code when rendered.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// Application error code, set for business and system errors.
    pub code: Option<i32>,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a business error with its own application code.
    pub fn business(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            ..Self::new(ErrorKind::Business, message)
        }
    }

    /// Create a system error with its own application code.
    pub fn system(code: i32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            ..Self::new(ErrorKind::System, message)
        }
    }

    /// Create a missing-parameter error.
    pub fn missing_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingParameter, message)
    }

    /// Create a parameter validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a malformed-body error.
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedBody, message)
    }

    /// Create a constraint-violation error.
    pub fn constraint_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConstraintViolation, message)
    }

    /// Create a method-not-allowed error.
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, message)
    }

    /// Create an unsupported-media-type error.
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedMediaType, message)
    }

    /// Create an access-denied error.
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccessDenied, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            code: self.code,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl PartialEq for AppError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.code == other.code && self.message == other.message
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
