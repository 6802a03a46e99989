// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::{
    application::dto::research_request::DeepResearchRequestDto,
    domain::{
        models::research::DeepResearchResponse,
        providers::{failure::ProviderKind, research_provider::ResearchProvider},
    },
    presentation::{
        errors::{classify, ApiError},
        extractors::validated_json::ValidatedJson,
    },
};

/// 处理深度研究请求
///
/// 深度研究耗时远长于普通搜索，指标用同一组名字但以
/// `provider="perplexity"` 区分。
///
/// # 参数
///
/// * `provider` - 研究提供商实例
/// * `payload` - 研究请求数据
///
/// # 返回值
///
/// 返回上游的研究结果，或分类后的错误信封
pub async fn deep_research(
    Extension(provider): Extension<Arc<dyn ResearchProvider>>,
    ValidatedJson(payload): ValidatedJson<DeepResearchRequestDto>,
) -> Result<Json<DeepResearchResponse>, ApiError> {
    debug!("Dispatching deep research: {}", payload.query);
    counter!(
        "gateway_provider_requests_total",
        "provider" => "perplexity",
        "operation" => "deep_research"
    )
    .increment(1);

    let started = Instant::now();
    let result = provider.deep_research(payload.into_params()).await;
    histogram!(
        "gateway_upstream_duration_seconds",
        "provider" => "perplexity",
        "operation" => "deep_research"
    )
    .record(started.elapsed().as_secs_f64());

    result.map(Json).map_err(|failure| {
        let error = classify(ProviderKind::Perplexity, &failure);
        counter!(
            "gateway_provider_errors_total",
            "provider" => "perplexity",
            "operation" => "deep_research",
            "error_code" => error.error_code.as_str()
        )
        .increment(1);
        warn!("Perplexity deep_research failed: {}", failure.message());
        error
    })
}
