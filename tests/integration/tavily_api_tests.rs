// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// 搜索转发测试
///
/// 验证上游凭证被附加、结果原样返回
#[tokio::test]
async fn search_forwards_results_from_upstream() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("Authorization", "Bearer tvly-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "rust web frameworks",
            "answer": "Axum and Actix are popular choices.",
            "images": [],
            "results": [
                {
                    "title": "Axum",
                    "url": "https://github.com/tokio-rs/axum",
                    "content": "Ergonomic and modular web framework",
                    "score": 0.98,
                    "raw_content": null
                },
                {
                    "title": "Actix Web",
                    "url": "https://actix.rs",
                    "content": "Powerful, pragmatic web framework",
                    "score": 0.95
                },
                {
                    "title": "Rocket",
                    "url": "https://rocket.rs",
                    "content": "Web framework with a focus on usability",
                    "score": 0.90
                }
            ],
            "response_time": 1.32
        })))
        .expect(1)
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": "rust web frameworks"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["query"], "rust web frameworks");
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
    assert_eq!(body["results"][0]["score"], 0.98);
    assert_eq!(body["answer"], "Axum and Actix are popular choices.");
}

/// 搜索默认值测试
///
/// 未显式给出的字段按文档默认值转发给上游
#[tokio::test]
async fn search_applies_documented_defaults() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({
            "search_depth": "basic",
            "topic": "general",
            "max_results": 5,
            "include_answer": false,
            "include_images": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "rust",
            "results": []
        })))
        .expect(1)
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn search_with_empty_query_is_422() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": ""}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "validation_error");
}

#[tokio::test]
async fn search_with_out_of_range_max_results_is_422() {
    let app = create_test_app().await;

    for max_results in [0, 21] {
        let response = app
            .server
            .post("/v1/tavily/search")
            .authorization_bearer(&app.user_token())
            .json(&json!({"query": "rust", "max_results": max_results}))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error_code"], "validation_error");
        assert!(body["details"]["errors"]["max_results"].is_array());
    }
}

#[tokio::test]
async fn search_rate_limit_maps_to_429() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"detail": "Too many requests"})),
        )
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "rate_limit_exceeded");
    assert_eq!(
        body["message"],
        "API rate limit exceeded. Please try again later."
    );
    assert!(body["details"]["original_error"]
        .as_str()
        .unwrap()
        .contains("Too many requests"));
}

#[tokio::test]
async fn search_unauthorized_key_maps_to_401() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Unauthorized"})))
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "invalid_api_key");
    assert_eq!(body["message"], "Invalid or missing Tavily API key.");
}

/// 单次调用超时测试
///
/// 请求级timeout小于上游延迟时，网关返回504
#[tokio::test]
async fn search_timeout_maps_to_504() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"query": "rust", "results": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": "rust", "timeout": 1}))
        .await;

    assert_eq!(response.status_code(), StatusCode::GATEWAY_TIMEOUT);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "request_timeout");
    assert_eq!(
        body["message"],
        "Request timed out. The operation took too long to complete."
    );
}

/// 原始错误透传测试
///
/// 无法分类的上游错误落到 tavily_api_error，
/// `details.original_error` 保留上游的原话
#[tokio::test]
async fn unclassified_upstream_error_preserves_the_original_text() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "something went wrong"})),
        )
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "tavily_api_error");
    assert_eq!(body["message"], "Tavily API error: something went wrong");
    assert_eq!(body["details"]["original_error"], "something went wrong");
}

#[tokio::test]
async fn undecodable_upstream_body_maps_to_400() {
    let app = create_test_app().await;

    // 200 with a shape that fails response validation
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/search")
        .authorization_bearer(&app.user_token())
        .json(&json!({"query": "rust"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error_code"], "invalid_request");
}

/// 提取端点测试
///
/// 单个URL字符串在转发前归一成列表
#[tokio::test]
async fn extract_accepts_a_single_url_string() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/extract"))
        .and(body_partial_json(json!({"urls": ["https://example.com/a"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"url": "https://example.com/a", "raw_content": "# Title\n\nBody text"}
            ],
            "failed_results": [],
            "response_time": 0.4
        })))
        .expect(1)
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/extract")
        .authorization_bearer(&app.user_token())
        .json(&json!({"urls": "https://example.com/a"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["results"][0]["url"], "https://example.com/a");
}

#[tokio::test]
async fn extract_accepts_a_url_list_and_reports_failures() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/extract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"url": "https://example.com/a", "raw_content": "Body"}
            ],
            "failed_results": [
                {"url": "https://example.com/b", "error": "fetch failed"}
            ]
        })))
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/extract")
        .authorization_bearer(&app.user_token())
        .json(&json!({"urls": ["https://example.com/a", "https://example.com/b"]}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["failed_results"][0]["error"], "fetch failed");
}

#[tokio::test]
async fn extract_rejects_empty_and_malformed_urls() {
    let app = create_test_app().await;

    let cases = [
        json!({"urls": []}),
        json!({"urls": "not-a-url"}),
        json!({"urls": ["https://example.com/a", "relative/path"]}),
        json!({"urls": ""}),
    ];
    for payload in cases {
        let response = app
            .server
            .post("/v1/tavily/extract")
            .authorization_bearer(&app.user_token())
            .json(&payload)
            .await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "payload should be rejected: {}",
            payload
        );
    }
}

/// 爬取端点测试
///
/// 深度、广度、页数限制按默认值转发
#[tokio::test]
async fn crawl_applies_bounds_and_returns_pages() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/crawl"))
        .and(body_partial_json(json!({
            "url": "https://docs.example.com",
            "max_depth": 1,
            "max_breadth": 20,
            "limit": 50
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "base_url": "https://docs.example.com",
            "results": [
                {"url": "https://docs.example.com/intro", "raw_content": "Intro page"},
                {"url": "https://docs.example.com/setup", "raw_content": "Setup page"}
            ],
            "total_pages": 2,
            "response_time": 2.5
        })))
        .expect(1)
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/crawl")
        .authorization_bearer(&app.user_token())
        .json(&json!({"url": "https://docs.example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn crawl_rejects_zero_bounds() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/tavily/crawl")
        .authorization_bearer(&app.user_token())
        .json(&json!({"url": "https://docs.example.com", "max_depth": 0}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn map_returns_the_url_inventory() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/map"))
        .and(body_partial_json(json!({"limit": 100})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "base_url": "https://docs.example.com",
            "urls": [
                "https://docs.example.com/",
                "https://docs.example.com/intro",
                "https://docs.example.com/setup"
            ],
            "total_urls": 3
        })))
        .expect(1)
        .mount(&app.tavily_mock)
        .await;

    let response = app
        .server
        .post("/v1/tavily/map")
        .authorization_bearer(&app.user_token())
        .json(&json!({"url": "https://docs.example.com"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["total_urls"], 3);
    assert_eq!(body["urls"].as_array().unwrap().len(), 3);
}
