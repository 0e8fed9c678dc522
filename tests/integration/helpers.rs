//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use quickinit_api::AppState;
use quickinit_api::middleware::interceptor::InterceptorRegistry;
use quickinit_core::config::AppConfig;
use quickinit_database::Mappers;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// State the router was built from
    pub state: AppState,
}

impl TestApp {
    /// Full application over in-memory mappers with the default interceptors
    pub fn new() -> Self {
        Self::with_parts(Mappers::memory(), InterceptorRegistry::with_defaults())
    }

    /// Full application over the given mappers and interceptor chain
    pub fn with_parts(mappers: Mappers, interceptors: InterceptorRegistry) -> Self {
        let state =
            AppState::new(AppConfig::in_memory(), &mappers).with_interceptors(interceptors);
        let router = quickinit_api::build_app(state.clone());
        Self { router, state }
    }

    /// GET `path`
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send("GET", path, None, String::new()).await
    }

    /// Send `body` as JSON
    pub async fn send_json(&self, method: &str, path: &str, body: Value) -> TestResponse {
        let body = serde_json::to_string(&body).expect("Failed to serialize body");
        self.send(method, path, Some("application/json"), body).await
    }

    /// Send a raw body with an optional content type
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: String,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type);
        }
        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            body_len: body_bytes.len(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` if empty or not JSON
    pub body: Value,
    /// Raw body length in bytes
    pub body_len: usize,
}

impl TestResponse {
    /// Envelope `code`
    pub fn code(&self) -> i64 {
        self.body["code"].as_i64().expect("Envelope has no code")
    }

    /// Envelope `message`
    pub fn message(&self) -> &str {
        self.body["message"].as_str().expect("Envelope has no message")
    }

    /// Envelope `data`
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }
}
