//! Integration tests for error-to-response mapping across the full stack.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;

use quickinit_api::middleware::interceptor::{
    HandlerInterceptor, InterceptorRegistry, LoggingInterceptor, RequestContext,
};
use quickinit_core::error::AppError;
use quickinit_core::result::AppResult;
use quickinit_core::traits::Mapper;
use quickinit_core::types::{PageRequest, PageResponse};
use quickinit_database::Mappers;
use quickinit_entity::{Menu, Permission};

/// Fails every call with a database error carrying internal detail.
struct BrokenPermissions;

#[async_trait]
impl Mapper<Permission> for BrokenPermissions {
    async fn create(&self, _entity: &Permission) -> AppResult<Permission> {
        Err(broken())
    }
    async fn find_by_id(&self, _id: i64) -> AppResult<Option<Permission>> {
        Err(broken())
    }
    async fn update(&self, _entity: &Permission) -> AppResult<Option<Permission>> {
        Err(broken())
    }
    async fn delete(&self, _id: i64) -> AppResult<bool> {
        Err(broken())
    }
    async fn list_all(&self) -> AppResult<Vec<Permission>> {
        Err(broken())
    }
    async fn find_all(&self, _page: &PageRequest) -> AppResult<PageResponse<Permission>> {
        Err(broken())
    }
    async fn count(&self) -> AppResult<u64> {
        Err(broken())
    }
}

fn broken() -> AppError {
    AppError::database("relation \"permission\" does not exist")
}

/// Panics on listing.
struct PanickingMenus;

#[async_trait]
impl Mapper<Menu> for PanickingMenus {
    async fn create(&self, entity: &Menu) -> AppResult<Menu> {
        Ok(entity.clone())
    }
    async fn find_by_id(&self, _id: i64) -> AppResult<Option<Menu>> {
        Ok(None)
    }
    async fn update(&self, _entity: &Menu) -> AppResult<Option<Menu>> {
        Ok(None)
    }
    async fn delete(&self, _id: i64) -> AppResult<bool> {
        Ok(false)
    }
    async fn list_all(&self) -> AppResult<Vec<Menu>> {
        panic!("menu cache poisoned")
    }
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Menu>> {
        Ok(PageResponse::new(Vec::new(), page.page, page.page_size, 0))
    }
    async fn count(&self) -> AppResult<u64> {
        Ok(0)
    }
}

/// Rejects every request under `/api/roles`.
struct DenyRoles;

#[async_trait]
impl HandlerInterceptor for DenyRoles {
    fn name(&self) -> &'static str {
        "deny-roles"
    }

    async fn pre_handle(&self, ctx: &RequestContext) -> AppResult<()> {
        if ctx.uri.path().starts_with("/api/roles") {
            return Err(AppError::access_denied("roles are locked"));
        }
        Ok(())
    }
}

fn failing_app() -> helpers::TestApp {
    let mut mappers = Mappers::memory();
    mappers.permission = Arc::new(BrokenPermissions);
    mappers.menu = Arc::new(PanickingMenus);
    helpers::TestApp::with_parts(
        mappers,
        InterceptorRegistry::new()
            .add(LoggingInterceptor)
            .add(DenyRoles),
    )
}

#[tokio::test]
async fn test_unsupported_method_is_405() {
    let app = helpers::TestApp::new();

    let response = app
        .send("DELETE", "/public/test?articleId=1&tagId=100", None, String::new())
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.code(), 405);
    assert_eq!(response.message(), "method not supported");
}

#[tokio::test]
async fn test_unsupported_method_on_nested_route_is_405() {
    let app = helpers::TestApp::new();

    let response = app
        .send("PATCH", "/api/permissions", None, String::new())
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.code(), 405);
}

#[tokio::test]
async fn test_unsupported_media_type_is_415() {
    let app = helpers::TestApp::new();

    let response = app
        .send(
            "POST",
            "/api/permissions",
            Some("text/plain"),
            "name=read".to_string(),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(response.code(), 415);
    assert_eq!(response.message(), "unsupported media type");
}

#[tokio::test]
async fn test_malformed_body_returns_empty_200() {
    let app = helpers::TestApp::new();

    let response = app
        .send(
            "POST",
            "/api/permissions",
            Some("application/json"),
            "{\"name\": ".to_string(),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body_len, 0);
}

#[tokio::test]
async fn test_wrong_field_type_is_malformed_body() {
    let app = helpers::TestApp::new();

    let response = app
        .send_json("POST", "/api/menus", json!({ "name": "Menu", "sort": "first" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body_len, 0);
}

#[tokio::test]
async fn test_access_denied_is_403() {
    let app = failing_app();

    let response = app.get("/api/roles").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.code(), 403);
    assert_eq!(response.message(), "access denied");
    assert!(response.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_database_error_is_unknown_500_without_detail() {
    let app = failing_app();

    let response = app.get("/api/permissions").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "code": 99999, "message": "unknown error", "data": null })
    );
    assert!(!response.body.to_string().contains("relation"));
}

#[tokio::test]
async fn test_panic_is_unknown_500() {
    let app = failing_app();

    let response = app.get("/api/menus").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.code(), 99999);
    assert!(!response.body.to_string().contains("poisoned"));
}

#[tokio::test]
async fn test_business_error_passes_through() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/roles/31").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.code(), 404);
    assert_eq!(response.message(), "role 31 not found");
}

#[tokio::test]
async fn test_other_routes_unaffected_by_failing_mappers() {
    let app = failing_app();

    let response = app.get("/public/test?articleId=1&tagId=150").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.code(), 200);
}
