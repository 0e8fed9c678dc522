//! Extractors that deserialize and then validate.
//!
//! Rejections are turned into [`AppError`]s so they go through the same
//! response mapping as handler errors.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use quickinit_core::error::AppError;

use crate::error::ApiError;

/// Query string deserialized into `T` and validated.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

/// JSON body deserialized into `T` and validated.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

/// The message of the first violated constraint, by field name.
pub fn first_violation(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .next()
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .unwrap_or_else(|| errors.to_string())
}

fn validate<T: Validate>(value: &T) -> Result<(), ApiError> {
    value
        .validate()
        .map_err(|errors| ApiError(AppError::constraint_violation(first_violation(&errors))))
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    let detail = rejection.body_text();
    if detail.contains("missing field") {
        AppError::missing_parameter(detail)
    } else {
        AppError::validation(detail)
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::unsupported_media_type(rejection.body_text())
        }
        other => AppError::malformed_body(other.body_text()),
    }
}

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection)?;
        validate(&value)?;
        Ok(Self(value))
    }
}

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(json_rejection)?;
        validate(&value)?;
        Ok(Self(value))
    }
}
