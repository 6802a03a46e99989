// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use metrics::{counter, histogram};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::{
    application::dto::{
        crawl_request::CrawlRequestDto, extract_request::ExtractRequestDto,
        map_request::MapRequestDto, search_request::SearchRequestDto,
    },
    domain::{
        models::search::{CrawlResponse, ExtractResponse, MapResponse, SearchResponse},
        providers::{
            failure::{ProviderFailure, ProviderKind},
            search_provider::SearchProvider,
        },
    },
    presentation::{
        errors::{classify, ApiError},
        extractors::validated_json::ValidatedJson,
    },
};

/// 执行一次Tavily上游调用并记录指标
///
/// 失败在这里分类一次，之后原样向外传递
async fn run_tavily<T>(
    operation: &'static str,
    call: impl Future<Output = Result<T, ProviderFailure>>,
) -> Result<Json<T>, ApiError> {
    counter!(
        "gateway_provider_requests_total",
        "provider" => "tavily",
        "operation" => operation
    )
    .increment(1);

    let started = Instant::now();
    let result = call.await;
    histogram!(
        "gateway_upstream_duration_seconds",
        "provider" => "tavily",
        "operation" => operation
    )
    .record(started.elapsed().as_secs_f64());

    result.map(Json).map_err(|failure| {
        let error = classify(ProviderKind::Tavily, &failure);
        counter!(
            "gateway_provider_errors_total",
            "provider" => "tavily",
            "operation" => operation,
            "error_code" => error.error_code.as_str()
        )
        .increment(1);
        warn!("Tavily {} failed: {}", operation, failure.message());
        error
    })
}

/// 处理网页搜索请求
///
/// # 参数
///
/// * `provider` - 搜索提供商实例
/// * `payload` - 搜索请求数据
///
/// # 返回值
///
/// 返回上游的搜索结果，或分类后的错误信封
pub async fn search(
    Extension(provider): Extension<Arc<dyn SearchProvider>>,
    ValidatedJson(payload): ValidatedJson<SearchRequestDto>,
) -> Result<Json<SearchResponse>, ApiError> {
    debug!("Dispatching search: {}", payload.query);
    run_tavily("search", provider.search(payload.into_params())).await
}

/// 处理内容提取请求
pub async fn extract(
    Extension(provider): Extension<Arc<dyn SearchProvider>>,
    ValidatedJson(payload): ValidatedJson<ExtractRequestDto>,
) -> Result<Json<ExtractResponse>, ApiError> {
    run_tavily("extract", provider.extract(payload.into_params())).await
}

/// 处理站点爬取请求
pub async fn crawl(
    Extension(provider): Extension<Arc<dyn SearchProvider>>,
    ValidatedJson(payload): ValidatedJson<CrawlRequestDto>,
) -> Result<Json<CrawlResponse>, ApiError> {
    run_tavily("crawl", provider.crawl(payload.into_params())).await
}

/// 处理站点地图请求
pub async fn map_urls(
    Extension(provider): Extension<Arc<dyn SearchProvider>>,
    ValidatedJson(payload): ValidatedJson<MapRequestDto>,
) -> Result<Json<MapResponse>, ApiError> {
    run_tavily("map", provider.map_urls(payload.into_params())).await
}
