// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// 公开端点测试
///
/// 健康检查与版本号不需要任何凭证
#[tokio::test]
async fn health_and_version_are_public() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");

    let response = app.server.get("/v1/version").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn missing_token_is_401_with_envelope() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["status_code"], 401);
    assert_eq!(body["error_code"], "auth_error");
    assert_eq!(body["message"], "Not authenticated");
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization("Basic dXNlcjpwYXNz")
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_403() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer("not-a-jwt")
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "auth_error");
    assert_eq!(body["message"], "Could not validate credentials");
}

#[tokio::test]
async fn unknown_subject_is_404() {
    let app = create_test_app().await;
    let token = app.token_for(Uuid::new_v4());

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&token)
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn inactive_user_is_400() {
    let app = create_test_app().await;
    let token = app.token_for(app.inactive_id);

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&token)
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Inactive user");
}

/// 指标端点权限测试
///
/// 普通用户403，超级用户可以拿到Prometheus文本
#[tokio::test]
async fn metrics_endpoint_is_superuser_only() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/v1/metrics")
        .authorization_bearer(&app.user_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["message"], "The user doesn't have enough privileges");

    // Drive one successful call through the gateway so the counters exist.
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "rust",
            "results": [],
            "response_time": 0.01
        })))
        .mount(&app.tavily_mock)
        .await;
    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": "rust"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .server
        .get("/v1/metrics")
        .authorization_bearer(&app.superuser_token())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("gateway_provider_requests_total"));
}

#[tokio::test]
async fn metrics_endpoint_still_requires_a_token() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/metrics").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
