//! Permission CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};

use quickinit_core::types::{PageResponse, RestResponse};
use quickinit_entity::Permission;

use crate::dto::request::PermissionRequest;
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, ValidJson, ValidQuery};
use crate::handlers::not_found;
use crate::state::AppState;

/// GET /api/permissions
pub async fn list_permissions(
    State(state): State<AppState>,
) -> ApiResult<Json<RestResponse<Vec<Permission>>>> {
    let rows = state.services.permission.list().await?;
    Ok(Json(RestResponse::ok(rows)))
}

/// GET /api/permissions/page
pub async fn page_permissions(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> ApiResult<Json<RestResponse<PageResponse<Permission>>>> {
    let page = state
        .services
        .permission
        .page(&params.into_page_request())
        .await?;
    Ok(Json(RestResponse::ok(page)))
}

/// GET /api/permissions/{id}
pub async fn get_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RestResponse<Permission>>> {
    let row = state
        .services
        .permission
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("permission", id))?;
    Ok(Json(RestResponse::ok(row)))
}

/// POST /api/permissions
pub async fn create_permission(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<PermissionRequest>,
) -> ApiResult<Json<RestResponse<Permission>>> {
    let created = state
        .services
        .permission
        .create(&req.into_entity(0))
        .await?;
    Ok(Json(RestResponse::ok(created)))
}

/// PUT /api/permissions/{id}
pub async fn update_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<PermissionRequest>,
) -> ApiResult<Json<RestResponse<Permission>>> {
    let updated = state
        .services
        .permission
        .update(&req.into_entity(id))
        .await?
        .ok_or_else(|| not_found("permission", id))?;
    Ok(Json(RestResponse::ok(updated)))
}

/// DELETE /api/permissions/{id}
pub async fn delete_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RestResponse>> {
    if !state.services.permission.delete(id).await? {
        return Err(not_found("permission", id).into());
    }
    Ok(Json(RestResponse::success()))
}
