// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Proxy, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::settings::TavilySettings;
use crate::domain::models::search::{CrawlResponse, ExtractResponse, MapResponse, SearchResponse};
use crate::domain::providers::failure::ProviderFailure;
use crate::domain::providers::search_provider::{
    CrawlParams, ExtractParams, MapParams, SearchParams, SearchProvider,
};
use crate::infrastructure::providers::upstream::{failure_from_transport, upstream_message};

/// Tavily HTTP适配器
///
/// 将搜索提供商接口映射到Tavily REST API
/// （`/search`、`/extract`、`/crawl`、`/map`）。
/// 客户端级超时来自配置，单次调用可覆盖。
pub struct TavilyClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TavilyClient {
    /// 创建新的Tavily客户端
    ///
    /// # 参数
    ///
    /// * `settings` - Tavily提供商配置
    ///
    /// # 返回值
    ///
    /// * `Ok(TavilyClient)` - 客户端创建成功
    /// * `Err(reqwest::Error)` - 客户端构建或代理配置无效
    pub fn new(settings: &TavilySettings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().timeout(Duration::from_secs(settings.timeout));
        if let Some(proxy) = &settings.proxy {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        timeout: Option<Duration>,
    ) -> Result<T, ProviderFailure> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(failure_from_transport)?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(failure_from_status(status, &text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderFailure::Upstream(format!("response validation failed: {}", e)))
    }
}

/// 非2xx状态到失败消息的归一
///
/// 401/403/429 在HTTP层语义已明确，消息采用与上游SDK一致的措辞；
/// 其余状态保留提取到的原始错误文本。
fn failure_from_status(status: StatusCode, body: &str) -> ProviderFailure {
    let message = upstream_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            ProviderFailure::Upstream("Unauthorized: missing or invalid API key.".to_string())
        }
        StatusCode::TOO_MANY_REQUESTS => {
            ProviderFailure::Upstream(format!("Usage limit exceeded: {}", message))
        }
        _ => ProviderFailure::Upstream(message),
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(&self, params: SearchParams) -> Result<SearchResponse, ProviderFailure> {
        debug!(
            "tavily search: depth={:?} topic={:?} max_results={}",
            params.search_depth, params.topic, params.max_results
        );
        let body = json!({
            "query": params.query,
            "search_depth": params.search_depth,
            "topic": params.topic,
            "max_results": params.max_results,
            "include_images": params.include_images,
            "include_image_descriptions": params.include_image_descriptions,
            "include_answer": params.include_answer,
            "include_raw_content": params.include_raw_content,
            "include_domains": params.include_domains,
            "exclude_domains": params.exclude_domains,
        });
        self.post("/search", body, params.timeout).await
    }

    async fn extract(&self, params: ExtractParams) -> Result<ExtractResponse, ProviderFailure> {
        let body = json!({ "urls": params.urls });
        self.post("/extract", body, params.timeout).await
    }

    async fn crawl(&self, params: CrawlParams) -> Result<CrawlResponse, ProviderFailure> {
        debug!(
            "tavily crawl: url={} max_depth={} limit={}",
            params.url, params.max_depth, params.limit
        );
        let body = json!({
            "url": params.url,
            "max_depth": params.max_depth,
            "max_breadth": params.max_breadth,
            "limit": params.limit,
            "instructions": params.instructions,
            "select_paths": params.select_paths,
            "select_domains": params.select_domains,
        });
        self.post("/crawl", body, params.timeout).await
    }

    async fn map_urls(&self, params: MapParams) -> Result<MapResponse, ProviderFailure> {
        let body = json!({
            "url": params.url,
            "max_depth": params.max_depth,
            "max_breadth": params.max_breadth,
            "limit": params.limit,
            "instructions": params.instructions,
            "select_paths": params.select_paths,
            "select_domains": params.select_domains,
        });
        self.post("/map", body, params.timeout).await
    }
}
