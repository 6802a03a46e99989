// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::models::research::{DeepResearchResponse, ReasoningEffort, RecencyFilter};
use crate::domain::providers::failure::ProviderFailure;

/// 深度研究参数
#[derive(Debug, Clone)]
pub struct DeepResearchParams {
    pub query: String,
    /// 覆盖配置中的默认模型
    pub model: Option<String>,
    pub system_prompt: Option<String>,
    pub reasoning_effort: Option<ReasoningEffort>,
    pub search_domain_filter: Option<Vec<String>>,
    pub search_recency_filter: Option<RecencyFilter>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout: Option<Duration>,
}

#[async_trait]
pub trait ResearchProvider: Send + Sync {
    /// Run a deep research query
    async fn deep_research(
        &self,
        params: DeepResearchParams,
    ) -> Result<DeepResearchResponse, ProviderFailure>;
}
