// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::search::{SearchDepth, SearchTopic};
use crate::domain::providers::search_provider::SearchParams;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SearchRequestDto {
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    #[serde(default)]
    pub search_depth: SearchDepth,
    #[serde(default)]
    pub topic: SearchTopic,
    #[validate(range(min = 1, max = 20))]
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default)]
    pub include_images: bool,
    #[serde(default)]
    pub include_image_descriptions: bool,
    #[serde(default)]
    pub include_answer: bool,
    #[serde(default)]
    pub include_raw_content: bool,
    pub include_domains: Option<Vec<String>>,
    pub exclude_domains: Option<Vec<String>>,
    // Per-call override of the configured provider timeout, in seconds
    #[validate(range(min = 1, max = 600))]
    pub timeout: Option<u64>,
}

fn default_max_results() -> u32 {
    5
}

impl SearchRequestDto {
    pub fn into_params(self) -> SearchParams {
        SearchParams {
            query: self.query,
            search_depth: self.search_depth,
            topic: self.topic,
            max_results: self.max_results,
            include_images: self.include_images,
            include_image_descriptions: self.include_image_descriptions,
            include_answer: self.include_answer,
            include_raw_content: self.include_raw_content,
            include_domains: self.include_domains,
            exclude_domains: self.exclude_domains,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
