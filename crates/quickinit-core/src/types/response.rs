//! The response envelope every endpoint answers with.

use serde::{Deserialize, Serialize};

use crate::types::error_message::CommonErrorMessage;

/// Uniform response wrapper for success and failure alike.
///
/// The JSON shape is `{"code": <int>, "message": <string>, "data": <any|null>}`;
/// clients depend on these exact field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestResponse<T = ()> {
    /// Application status code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
    /// Payload, `null` when absent.
    pub data: Option<T>,
}

impl RestResponse<()> {
    /// A success envelope without payload.
    pub fn success() -> Self {
        Self {
            code: CommonErrorMessage::Success.code(),
            message: CommonErrorMessage::Success.message().to_string(),
            data: None,
        }
    }

    /// A failure envelope with the given code and message.
    pub fn fail(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl<T> RestResponse<T> {
    /// A success envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            code: CommonErrorMessage::Success.code(),
            message: CommonErrorMessage::Success.message().to_string(),
            data: Some(data),
        }
    }

    /// Whether this envelope reports success.
    pub fn is_success(&self) -> bool {
        self.code == CommonErrorMessage::Success.code()
    }
}
