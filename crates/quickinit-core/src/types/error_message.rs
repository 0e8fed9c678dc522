//! The fixed table of error descriptors.

use serde::Serialize;

use crate::error::AppError;

/// Known error kinds with their application code and default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonErrorMessage {
    /// Request handled.
    Success,
    /// Generic system failure; parameter errors are wrapped into it.
    Default,
    /// A requested record does not exist.
    NotFound,
    /// The caller lacks permission.
    AccessDenied,
    /// Route exists, method does not.
    MethodNotAllowed,
    /// Body content type not accepted.
    UnsupportedMediaType,
    /// Anything unclassified.
    Unknown,
}

/// A `{code, message}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorDescriptor {
    /// Application code.
    pub code: i32,
    /// Human-readable message.
    pub message: &'static str,
}

impl CommonErrorMessage {
    /// The application code for this kind.
    pub fn code(&self) -> i32 {
        self.descriptor().code
    }

    /// The default message for this kind.
    pub fn message(&self) -> &'static str {
        self.descriptor().message
    }

    /// The `{code, message}` pair for this kind.
    pub fn descriptor(&self) -> ErrorDescriptor {
        let (code, message) = match self {
            Self::Success => (200, "success"),
            Self::Default => (10000, "system error"),
            Self::NotFound => (404, "resource not found"),
            Self::AccessDenied => (403, "access denied"),
            Self::MethodNotAllowed => (405, "method not supported"),
            Self::UnsupportedMediaType => (415, "unsupported media type"),
            Self::Unknown => (99999, "unknown error"),
        };
        ErrorDescriptor { code, message }
    }

    /// A system error with this kind's code and a caller-supplied message.
    pub fn system_exception(&self, message: impl Into<String>) -> AppError {
        AppError::system(self.code(), message)
    }

    /// A business error with this kind's code and default message.
    pub fn business_exception(&self) -> AppError {
        AppError::business(self.code(), self.message())
    }

    /// The generic error every unclassified failure collapses into.
    pub fn unknown_exception() -> AppError {
        Self::Unknown.business_exception()
    }
}
