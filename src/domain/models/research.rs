// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 推理投入强度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

/// 检索时效过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecencyFilter {
    Day,
    Week,
    Month,
    Year,
}

/// 研究回答消息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchMessage {
    pub role: String,
    pub content: String,
}

/// 研究回答候选
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ResearchMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// 研究过程引用的检索结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchSearchResult {
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// 令牌用量统计
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
    #[serde(default)]
    pub citation_tokens: Option<u64>,
    #[serde(default)]
    pub num_search_queries: Option<u64>,
    #[serde(default)]
    pub reasoning_tokens: Option<u64>,
}

/// 深度研究响应
///
/// 与上游聊天补全接口的响应同构，附带引用与检索结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeepResearchResponse {
    pub id: String,
    pub model: String,
    pub created: i64,
    #[serde(default)]
    pub citations: Vec<String>,
    #[serde(default)]
    pub search_results: Vec<ResearchSearchResult>,
    #[serde(default)]
    pub related_questions: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<serde_json::Value>>,
    pub choices: Vec<ResearchChoice>,
    #[serde(default)]
    pub usage: Option<ResearchUsage>,
}
