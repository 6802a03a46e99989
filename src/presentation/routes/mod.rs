// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{metrics_handler, perplexity_handler, tavily_handler};
use crate::presentation::middleware::auth_middleware::{
    auth_middleware, require_superuser, AuthState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// 创建应用路由
///
/// 公开路由只有健康检查与版本号；其余路由都在认证中间件之内，
/// 指标导出额外要求超级用户。
///
/// # 参数
///
/// * `auth_state` - 认证状态
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(auth_state: AuthState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let privileged_routes = Router::new()
        .route("/v1/metrics", get(metrics_handler::render_metrics))
        .route_layer(middleware::from_fn(require_superuser));

    let protected_routes = Router::new()
        .route("/v1/tavily/search", post(tavily_handler::search))
        .route("/v1/tavily/extract", post(tavily_handler::extract))
        .route("/v1/tavily/crawl", post(tavily_handler::crawl))
        .route("/v1/tavily/map", post(tavily_handler::map_urls))
        .route(
            "/v1/perplexity/deep-research",
            post(perplexity_handler::deep_research),
        )
        .merge(privileged_routes)
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new().merge(public_routes).merge(protected_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
