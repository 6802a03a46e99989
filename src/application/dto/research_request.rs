// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::research::{ReasoningEffort, RecencyFilter};
use crate::domain::providers::research_provider::DeepResearchParams;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct DeepResearchRequestDto {
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    /// 覆盖配置中的默认研究模型
    pub model: Option<String>,
    pub system_prompt: Option<String>,
    pub reasoning_effort: Option<ReasoningEffort>,
    #[validate(length(max = 10, message = "At most 10 domains can be filtered"))]
    pub search_domain_filter: Option<Vec<String>>,
    pub search_recency_filter: Option<RecencyFilter>,
    #[validate(range(min = 1))]
    pub max_tokens: Option<u32>,
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: Option<f32>,
    // Per-call override of the configured provider timeout, in seconds
    #[validate(range(min = 1, max = 600))]
    pub timeout: Option<u64>,
}

impl DeepResearchRequestDto {
    pub fn into_params(self) -> DeepResearchParams {
        DeepResearchParams {
            query: self.query,
            model: self.model,
            system_prompt: self.system_prompt,
            reasoning_effort: self.reasoning_effort,
            search_domain_filter: self.search_domain_filter,
            search_recency_filter: self.search_recency_filter,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
