//! Parameter validation demo endpoint.

use axum::Json;

use quickinit_core::types::RestResponse;

use crate::dto::request::ValidationTestQuery;
use crate::extractors::ValidQuery;

/// GET /public/test
///
/// Both ids are required and `tagId` must be at least 100. Violations are
/// rejected by the extractor before this handler runs.
pub async fn test(ValidQuery(_query): ValidQuery<ValidationTestQuery>) -> Json<RestResponse> {
    Json(RestResponse::success())
}
