// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::providers::search_provider::ExtractParams;
use crate::utils::validators::{validate_absolute_url, validation_error};

/// 待提取的URL集合
///
/// 对外契约同时接受单个字符串和字符串列表，进入领域层前归一为列表
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ExtractUrls {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExtractRequestDto {
    pub urls: ExtractUrls,
    // Per-call override of the configured provider timeout, in seconds
    pub timeout: Option<u64>,
}

impl Validate for ExtractRequestDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match &self.urls {
            ExtractUrls::Single(url) => {
                if let Err(error) = checked_url(url) {
                    errors.add("urls", error);
                }
            }
            ExtractUrls::Many(urls) => {
                if urls.is_empty() {
                    errors.add(
                        "urls",
                        validation_error("length", "At least one URL is required"),
                    );
                }
                for url in urls {
                    if let Err(error) = checked_url(url) {
                        errors.add("urls", error);
                    }
                }
            }
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

fn checked_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(validation_error("length", "URL cannot be empty"));
    }
    validate_absolute_url(url)
}

impl ExtractRequestDto {
    pub fn into_params(self) -> ExtractParams {
        let urls = match self.urls {
            ExtractUrls::Single(url) => vec![url],
            ExtractUrls::Many(urls) => urls,
        };
        ExtractParams {
            urls,
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
