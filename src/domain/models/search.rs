// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 搜索深度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

/// 搜索主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchTopic {
    #[default]
    General,
    News,
    Finance,
}

/// 单条搜索结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
    pub score: f64,
    #[serde(default)]
    pub raw_content: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
}

/// 搜索结果中的图片
///
/// 上游在请求图片描述时返回对象，否则返回纯URL字符串
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SearchImage {
    Url(String),
    Described {
        url: String,
        #[serde(default)]
        description: Option<String>,
    },
}

/// 搜索响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub query: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub images: Vec<SearchImage>,
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub response_time: Option<f64>,
}

/// 成功提取的页面内容
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractResult {
    pub url: String,
    pub raw_content: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// 提取失败的URL及原因
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailedExtract {
    pub url: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// 内容提取响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractResponse {
    #[serde(default)]
    pub results: Vec<ExtractResult>,
    #[serde(default)]
    pub failed_results: Vec<FailedExtract>,
    #[serde(default)]
    pub response_time: Option<f64>,
}

/// 爬取到的单个页面
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrawlPage {
    pub url: String,
    pub raw_content: String,
}

/// 站点爬取响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrawlResponse {
    pub base_url: String,
    #[serde(default)]
    pub results: Vec<CrawlPage>,
    pub total_pages: u32,
    #[serde(default)]
    pub response_time: Option<f64>,
}

/// 站点地图响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapResponse {
    pub base_url: String,
    pub urls: Vec<String>,
    pub total_urls: u32,
    #[serde(default)]
    pub response_time: Option<f64>,
}
