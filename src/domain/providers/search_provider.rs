// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::models::search::{
    CrawlResponse, ExtractResponse, MapResponse, SearchDepth, SearchResponse, SearchTopic,
};
use crate::domain::providers::failure::ProviderFailure;

/// 搜索参数
///
/// 已通过表示层校验的字段集合，`timeout` 为单次调用的超时覆盖
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub search_depth: SearchDepth,
    pub topic: SearchTopic,
    pub max_results: u32,
    pub include_images: bool,
    pub include_image_descriptions: bool,
    pub include_answer: bool,
    pub include_raw_content: bool,
    pub include_domains: Option<Vec<String>>,
    pub exclude_domains: Option<Vec<String>>,
    pub timeout: Option<Duration>,
}

/// 内容提取参数
#[derive(Debug, Clone)]
pub struct ExtractParams {
    pub urls: Vec<String>,
    pub timeout: Option<Duration>,
}

/// 站点爬取参数
#[derive(Debug, Clone)]
pub struct CrawlParams {
    pub url: String,
    pub max_depth: u32,
    pub max_breadth: u32,
    pub limit: u32,
    pub instructions: Option<String>,
    pub select_paths: Option<Vec<String>>,
    pub select_domains: Option<Vec<String>>,
    pub timeout: Option<Duration>,
}

/// 站点地图参数
#[derive(Debug, Clone)]
pub struct MapParams {
    pub url: String,
    pub max_depth: u32,
    pub max_breadth: u32,
    pub limit: u32,
    pub instructions: Option<String>,
    pub select_paths: Option<Vec<String>>,
    pub select_domains: Option<Vec<String>>,
    pub timeout: Option<Duration>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a web search
    async fn search(&self, params: SearchParams) -> Result<SearchResponse, ProviderFailure>;

    /// Extract page content from one or more URLs
    async fn extract(&self, params: ExtractParams) -> Result<ExtractResponse, ProviderFailure>;

    /// Crawl a site starting from a base URL
    async fn crawl(&self, params: CrawlParams) -> Result<CrawlResponse, ProviderFailure>;

    /// Discover the URL structure of a site
    async fn map_urls(&self, params: MapParams) -> Result<MapResponse, ProviderFailure>;
}
