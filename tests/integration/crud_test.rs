//! Integration tests for the CRUD and role-menu endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_permission_lifecycle() {
    let app = helpers::TestApp::new();

    let created = app
        .send_json(
            "POST",
            "/api/permissions",
            json!({ "name": "Read articles", "code": "article:read", "url": "/api/articles", "method": "GET" }),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.code(), 200);
    let id = created.data()["id"].as_i64().unwrap();
    assert!(created.data()["create_time"].is_string());

    let fetched = app.get(&format!("/api/permissions/{id}")).await;
    assert_eq!(fetched.data()["code"], "article:read");

    let updated = app
        .send_json(
            "PUT",
            &format!("/api/permissions/{id}"),
            json!({ "name": "Read all articles", "code": "article:read" }),
        )
        .await;
    assert_eq!(updated.code(), 200);
    assert_eq!(updated.data()["name"], "Read all articles");
    assert_eq!(updated.data()["create_time"], created.data()["create_time"]);

    let listed = app.get("/api/permissions").await;
    assert_eq!(listed.data().as_array().unwrap().len(), 1);

    let deleted = app
        .send("DELETE", &format!("/api/permissions/{id}"), None, String::new())
        .await;
    assert_eq!(deleted.code(), 200);

    let gone = app.get(&format!("/api/permissions/{id}")).await;
    assert_eq!(gone.status, StatusCode::OK);
    assert_eq!(gone.code(), 404);
    assert_eq!(gone.message(), format!("permission {id} not found"));
}

#[tokio::test]
async fn test_pagination() {
    let app = helpers::TestApp::new();
    for n in 0..5 {
        app.send_json(
            "POST",
            "/api/menus",
            json!({ "name": format!("Menu {n}"), "sort": n }),
        )
        .await;
    }

    let page = app.get("/api/menus/page?page=2&page_size=2").await;

    assert_eq!(page.code(), 200);
    assert_eq!(page.data()["total_items"], 5);
    assert_eq!(page.data()["total_pages"], 3);
    let items = page.data()["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Menu 2");
}

#[tokio::test]
async fn test_huge_page_number_is_rejected() {
    let app = helpers::TestApp::new();

    for entity in ["permissions", "menus", "roles"] {
        let response = app
            .get(&format!("/api/{entity}/page?page=18446744073709551615"))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.code(), 10000);
        assert_eq!(
            response.message(),
            "Parameter validation failed: page must be at most 1000000"
        );
    }

    let last = app.get("/api/menus/page?page=1000000").await;
    assert_eq!(last.code(), 200);
    assert!(last.data()["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .send_json("POST", "/api/roles", json!({ "name": "", "code": "editor" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.code(), 10000);
    assert_eq!(
        response.message(),
        "Parameter validation failed: role name must not be empty"
    );
    assert_eq!(app.get("/api/roles").await.data(), &json!([]));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .send_json("PUT", "/api/menus/77", json!({ "name": "Ghost" }))
        .await;

    assert_eq!(response.code(), 404);
}

#[tokio::test]
async fn test_role_menu_grants() {
    let app = helpers::TestApp::new();

    let role = app
        .send_json("POST", "/api/roles", json!({ "name": "Editor", "code": "editor" }))
        .await;
    let role_id = role.data()["id"].as_i64().unwrap();
    assert_eq!(role.data()["enabled"], true);

    let menu = app
        .send_json("POST", "/api/menus", json!({ "name": "Articles", "path": "/articles" }))
        .await;
    let menu_id = menu.data()["id"].as_i64().unwrap();

    let empty = app.get(&format!("/api/roles/{role_id}/menus")).await;
    assert_eq!(empty.data(), &json!([]));

    let grant_path = format!("/api/roles/{role_id}/menus/{menu_id}");
    let granted = app.send("POST", &grant_path, None, String::new()).await;
    assert_eq!(granted.data()["granted"], true);
    let again = app.send("POST", &grant_path, None, String::new()).await;
    assert_eq!(again.data()["granted"], false);

    let menus = app.get(&format!("/api/roles/{role_id}/menus")).await;
    let menus = menus.data().as_array().unwrap();
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0]["name"], "Articles");

    let missing = app
        .send("POST", &format!("/api/roles/{role_id}/menus/999"), None, String::new())
        .await;
    assert_eq!(missing.code(), 404);
    assert_eq!(missing.message(), "menu 999 not found");
}

#[tokio::test]
async fn test_health_reports_memory_store() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/health").await;

    assert_eq!(response.code(), 200);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["database"], "memory");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/articles").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.code(), 404);
}
