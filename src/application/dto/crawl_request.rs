// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::providers::search_provider::CrawlParams;
use crate::utils::validators::{validate_absolute_url, validation_error};

#[derive(Debug, Deserialize, Serialize)]
pub struct CrawlRequestDto {
    pub url: String,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    #[serde(default = "default_max_breadth")]
    pub max_breadth: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// 用自然语言描述爬取意图，上游据此筛选页面
    pub instructions: Option<String>,
    pub select_paths: Option<Vec<String>>,
    pub select_domains: Option<Vec<String>>,
    // Per-call override of the configured provider timeout, in seconds
    pub timeout: Option<u64>,
}

fn default_max_depth() -> u32 {
    1
}

fn default_max_breadth() -> u32 {
    20
}

fn default_limit() -> u32 {
    50
}

impl Validate for CrawlRequestDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.url.is_empty() {
            errors.add("url", validation_error("length", "URL cannot be empty"));
        } else if let Err(error) = validate_absolute_url(&self.url) {
            errors.add("url", error);
        }

        if self.max_depth < 1 {
            errors.add(
                "max_depth",
                validation_error("range", "max_depth must be at least 1"),
            );
        }
        if self.max_breadth < 1 {
            errors.add(
                "max_breadth",
                validation_error("range", "max_breadth must be at least 1"),
            );
        }
        if self.limit < 1 {
            errors.add("limit", validation_error("range", "limit must be at least 1"));
        }

        if let Some(timeout) = self.timeout {
            if !(1..=600).contains(&timeout) {
                errors.add(
                    "timeout",
                    validation_error("range", "timeout must be between 1 and 600 seconds"),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl CrawlRequestDto {
    pub fn into_params(self) -> CrawlParams {
        CrawlParams {
            url: self.url,
            max_depth: self.max_depth,
            max_breadth: self.max_breadth,
            limit: self.limit,
            instructions: self.instructions,
            select_paths: self.select_paths,
            select_domains: self.select_domains,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
