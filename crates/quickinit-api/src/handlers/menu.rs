//! Menu CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};

use quickinit_core::types::{PageResponse, RestResponse};
use quickinit_entity::Menu;

use crate::dto::request::MenuRequest;
use crate::error::ApiResult;
use crate::extractors::{PaginationParams, ValidJson, ValidQuery};
use crate::handlers::not_found;
use crate::state::AppState;

/// GET /api/menus
pub async fn list_menus(
    State(state): State<AppState>,
) -> ApiResult<Json<RestResponse<Vec<Menu>>>> {
    let rows = state.services.menu.list().await?;
    Ok(Json(RestResponse::ok(rows)))
}

/// GET /api/menus/page
pub async fn page_menus(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PaginationParams>,
) -> ApiResult<Json<RestResponse<PageResponse<Menu>>>> {
    let page = state
        .services
        .menu
        .page(&params.into_page_request())
        .await?;
    Ok(Json(RestResponse::ok(page)))
}

/// GET /api/menus/{id}
pub async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RestResponse<Menu>>> {
    let row = state
        .services
        .menu
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("menu", id))?;
    Ok(Json(RestResponse::ok(row)))
}

/// POST /api/menus
pub async fn create_menu(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<MenuRequest>,
) -> ApiResult<Json<RestResponse<Menu>>> {
    let created = state
        .services
        .menu
        .create(&req.into_entity(0))
        .await?;
    Ok(Json(RestResponse::ok(created)))
}

/// PUT /api/menus/{id}
pub async fn update_menu(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<MenuRequest>,
) -> ApiResult<Json<RestResponse<Menu>>> {
    let updated = state
        .services
        .menu
        .update(&req.into_entity(id))
        .await?
        .ok_or_else(|| not_found("menu", id))?;
    Ok(Json(RestResponse::ok(updated)))
}

/// DELETE /api/menus/{id}
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RestResponse>> {
    if !state.services.menu.delete(id).await? {
        return Err(not_found("menu", id).into());
    }
    Ok(Json(RestResponse::success()))
}
