// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Proxy, StatusCode};
use serde_json::json;
use tracing::debug;

use crate::config::settings::PerplexitySettings;
use crate::domain::models::research::DeepResearchResponse;
use crate::domain::providers::failure::ProviderFailure;
use crate::domain::providers::research_provider::{DeepResearchParams, ResearchProvider};
use crate::infrastructure::providers::upstream::{failure_from_transport, upstream_message};

/// Perplexity HTTP适配器
///
/// 将研究提供商接口映射到Perplexity的聊天补全API。
/// 系统提示作为system消息、查询作为user消息组装请求体。
pub struct PerplexityClient {
    client: Client,
    base_url: String,
    api_key: String,
    default_model: String,
}

impl PerplexityClient {
    /// 创建新的Perplexity客户端
    ///
    /// # 参数
    ///
    /// * `settings` - Perplexity提供商配置
    ///
    /// # 返回值
    ///
    /// * `Ok(PerplexityClient)` - 客户端创建成功
    /// * `Err(reqwest::Error)` - 客户端构建或代理配置无效
    pub fn new(settings: &PerplexitySettings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().timeout(Duration::from_secs(settings.timeout));
        if let Some(proxy) = &settings.proxy {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            default_model: settings.model.clone(),
        })
    }
}

fn looks_like_content_filter(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("content filter")
        || lower.contains("content_filter")
        || lower.contains("content policy")
}

/// 非2xx状态到失败的归一
///
/// 403与带内容策略标记的错误体表示内容拦截，得到独立变体；
/// 401/429 使用可分类的固定措辞，其余保留原始错误文本。
fn failure_from_status(status: StatusCode, body: &str) -> ProviderFailure {
    let message = upstream_message(status, body);
    match status {
        StatusCode::UNAUTHORIZED => {
            ProviderFailure::Upstream("Unauthorized: missing or invalid API key.".to_string())
        }
        StatusCode::FORBIDDEN => ProviderFailure::ContentFilter(message),
        StatusCode::TOO_MANY_REQUESTS => {
            ProviderFailure::Upstream(format!("Rate limit exceeded: {}", message))
        }
        _ if looks_like_content_filter(&message) => ProviderFailure::ContentFilter(message),
        _ => ProviderFailure::Upstream(message),
    }
}

#[async_trait]
impl ResearchProvider for PerplexityClient {
    async fn deep_research(
        &self,
        params: DeepResearchParams,
    ) -> Result<DeepResearchResponse, ProviderFailure> {
        let model = params
            .model
            .clone()
            .unwrap_or_else(|| self.default_model.clone());

        let mut messages = Vec::new();
        if let Some(system_prompt) = &params.system_prompt {
            messages.push(json!({ "role": "system", "content": system_prompt }));
        }
        messages.push(json!({ "role": "user", "content": params.query }));

        let mut body = json!({ "model": model, "messages": messages });
        if let Some(effort) = params.reasoning_effort {
            body["reasoning_effort"] = json!(effort);
        }
        if let Some(domains) = &params.search_domain_filter {
            body["search_domain_filter"] = json!(domains);
        }
        if let Some(recency) = params.search_recency_filter {
            body["search_recency_filter"] = json!(recency);
        }
        if let Some(max_tokens) = params.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = params.temperature {
            body["temperature"] = json!(temperature);
        }

        debug!("perplexity deep research: model={}", model);
        let url = format!("{}/chat/completions", self.base_url);
        let mut request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body);
        if let Some(timeout) = params.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(failure_from_transport)?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(failure_from_status(status, &text));
        }

        response
            .json::<DeepResearchResponse>()
            .await
            .map_err(|e| ProviderFailure::Upstream(format!("response validation failed: {}", e)))
    }
}
