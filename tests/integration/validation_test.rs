//! Integration tests for the parameter validation endpoint.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_valid_parameters_return_bare_success() {
    let app = helpers::TestApp::new();

    let response = app.get("/public/test?articleId=1&tagId=100").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        serde_json::json!({ "code": 200, "message": "success", "data": null })
    );
}

#[tokio::test]
async fn test_missing_article_id_is_a_missing_parameter() {
    let app = helpers::TestApp::new();

    let response = app.get("/public/test?tagId=120").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.code(), 10000);
    assert!(
        response
            .message()
            .starts_with("Request parameter validation failed: "),
        "unexpected message: {}",
        response.message()
    );
    assert!(response.message().contains("articleId"));
    assert!(response.data().is_null());
}

#[tokio::test]
async fn test_missing_tag_id_is_a_missing_parameter() {
    let app = helpers::TestApp::new();

    let response = app.get("/public/test?articleId=5").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.code(), 10000);
    assert!(
        response
            .message()
            .starts_with("Request parameter validation failed: ")
    );
    assert!(response.message().contains("tagId"));
}

#[tokio::test]
async fn test_missing_both_reports_first_field() {
    let app = helpers::TestApp::new();

    let response = app.get("/public/test").await;

    assert_eq!(response.code(), 10000);
    assert!(
        response
            .message()
            .starts_with("Request parameter validation failed: ")
    );
    assert!(response.message().contains("articleId"));
}

#[tokio::test]
async fn test_missing_parameter_skips_constraint_check() {
    let app = helpers::TestApp::new();

    let response = app.get("/public/test?tagId=5").await;

    assert!(!response.message().starts_with("Parameter validation failed: "));
    assert!(response.message().contains("articleId"));
}

#[tokio::test]
async fn test_tag_id_below_minimum() {
    let app = helpers::TestApp::new();

    for tag in ["99", "0", "-5"] {
        let response = app
            .get(&format!("/public/test?articleId=1&tagId={tag}"))
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.code(), 10000);
        assert_eq!(
            response.message(),
            "Parameter validation failed: tag id must be at least 100"
        );
    }
}

#[tokio::test]
async fn test_unparsable_parameter_is_wrapped() {
    let app = helpers::TestApp::new();

    let response = app.get("/public/test?articleId=abc&tagId=100").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.code(), 10000);
    assert!(
        response
            .message()
            .starts_with("Request parameter validation failed: "),
        "unexpected message: {}",
        response.message()
    );
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let app = helpers::TestApp::new();

    let response = app.get("/public/test?articleId=1&tagId=100").await;

    assert!(response.headers.contains_key("x-request-id"));
}
