//! Role CRUD and role-menu grant handlers.

use axum::Json;
use axum::extract::{Path, State};

use quickinit_core::types::{PageResponse, RestResponse};
use quickinit_entity::{Menu, Role};

use crate::dto::request::RoleRequest;
use crate::dto::response::GrantResponse;
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, ValidJson, ValidQuery};
use crate::handlers::not_found;
use crate::state::AppState;

/// GET /api/roles
pub async fn list_roles(State(state): State<AppState>) -> ApiResult<Json<RestResponse<Vec<Role>>>> {
    let rows = state.services.role.list().await?;
    Ok(Json(RestResponse::ok(rows)))
}

/// GET /api/roles/page
pub async fn page_roles(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> ApiResult<Json<RestResponse<PageResponse<Role>>>> {
    let page = state
        .services
        .role
        .page(&params.into_page_request())
        .await?;
    Ok(Json(RestResponse::ok(page)))
}

/// GET /api/roles/{id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RestResponse<Role>>> {
    let row = state
        .services
        .role
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("role", id))?;
    Ok(Json(RestResponse::ok(row)))
}

/// POST /api/roles
pub async fn create_role(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<RoleRequest>,
) -> ApiResult<Json<RestResponse<Role>>> {
    let created = state.services.role.create(&req.into_entity(0)).await?;
    Ok(Json(RestResponse::ok(created)))
}

/// PUT /api/roles/{id}
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<RoleRequest>,
) -> ApiResult<Json<RestResponse<Role>>> {
    let updated = state
        .services
        .role
        .update(&req.into_entity(id))
        .await?
        .ok_or_else(|| not_found("role", id))?;
    Ok(Json(RestResponse::ok(updated)))
}

/// DELETE /api/roles/{id}
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RestResponse>> {
    if !state.services.role.delete(id).await? {
        return Err(not_found("role", id).into());
    }
    Ok(Json(RestResponse::success()))
}

/// GET /api/roles/{id}/menus
pub async fn role_menus(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RestResponse<Vec<Menu>>>> {
    let menus = state.services.role.menu_list(id).await?;
    Ok(Json(RestResponse::ok(menus)))
}

/// POST /api/roles/{id}/menus/{menu_id}
pub async fn grant_menu(
    State(state): State<AppState>,
    Path((role_id, menu_id)): Path<(i64, i64)>,
) -> ApiResult<Json<RestResponse<GrantResponse>>> {
    let services = &state.services;
    if services.role.get_by_id(role_id).await?.is_none() {
        return Err(not_found("role", role_id).into());
    }
    if services.menu.get_by_id(menu_id).await?.is_none() {
        return Err(not_found("menu", menu_id).into());
    }

    let granted = services.role.grant_menu(role_id, menu_id).await?;
    Ok(Json(RestResponse::ok(GrantResponse {
        role_id,
        menu_id,
        granted,
    })))
}
