//! Route definitions for the QuickInit HTTP API.
//!
//! The validation demo lives under `/public`; everything else is mounted
//! under `/api`. A route hit with the wrong method answers through the
//! error mapping with 405.

use axum::Json;
use axum::Router;
use axum::http::{Method, StatusCode, Uri};
use axum::routing::{get, post};

use quickinit_core::error::AppError;
use quickinit_core::types::{CommonErrorMessage, RestResponse};

use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;

/// Build the router with every route, bound to `state`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(permission_routes())
        .merge(menu_routes())
        .merge(role_routes())
        .route("/health", get(handlers::health::health))
        .method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .route("/public/test", get(handlers::validated::test))
        .nest("/api", api_routes)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(no_route)
        .with_state(state)
}

fn permission_routes() -> Router<AppState> {
    use handlers::permission::*;

    Router::new()
        .route("/permissions", get(list_permissions).post(create_permission))
        .route("/permissions/page", get(page_permissions))
        .route(
            "/permissions/{id}",
            get(get_permission)
                .put(update_permission)
                .delete(delete_permission),
        )
}

fn menu_routes() -> Router<AppState> {
    use handlers::menu::*;

    Router::new()
        .route("/menus", get(list_menus).post(create_menu))
        .route("/menus/page", get(page_menus))
        .route(
            "/menus/{id}",
            get(get_menu).put(update_menu).delete(delete_menu),
        )
}

fn role_routes() -> Router<AppState> {
    use handlers::role::*;

    Router::new()
        .route("/roles", get(list_roles).post(create_role))
        .route("/roles/page", get(page_roles))
        .route(
            "/roles/{id}",
            get(get_role).put(update_role).delete(delete_role),
        )
        .route("/roles/{id}/menus", get(role_menus))
        .route("/roles/{id}/menus/{menu_id}", post(grant_menu))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError(AppError::method_not_allowed(format!(
        "{method} is not supported on {}",
        uri.path()
    )))
}

async fn no_route() -> (StatusCode, Json<RestResponse>) {
    let not_found = CommonErrorMessage::NotFound;
    (
        StatusCode::NOT_FOUND,
        Json(RestResponse::fail(not_found.code(), not_found.message())),
    )
}
