// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use reqwest::StatusCode;
use serde_json::Value;

use crate::domain::providers::failure::ProviderFailure;

/// 从上游错误响应体中提取可读消息
///
/// 依次探测常见的错误字段（`detail`、`error`、`message`，含一层嵌套），
/// 都不存在时回退为 `HTTP <status>` 加截断的原始响应体。
///
/// # 参数
///
/// * `status` - 上游HTTP状态码
/// * `body` - 上游响应体文本
///
/// # 返回值
///
/// 用于诊断与分类的错误消息
pub fn upstream_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let probed = ["detail", "error", "message"].iter().find_map(|key| {
            let field = value.get(key)?;
            field
                .as_str()
                .map(str::to_owned)
                .or_else(|| field.get("error").and_then(Value::as_str).map(str::to_owned))
                .or_else(|| {
                    field
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
        });
        if let Some(message) = probed {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        let snippet: String = trimmed.chars().take(512).collect();
        format!("HTTP {}: {}", status, snippet)
    }
}

/// 将reqwest传输层错误转换为提供商失败
///
/// 客户端侧判定的超时得到独立变体，其余保留原始消息
pub fn failure_from_transport(error: reqwest::Error) -> ProviderFailure {
    if error.is_timeout() {
        ProviderFailure::Timeout(error.to_string())
    } else {
        ProviderFailure::Upstream(error.to_string())
    }
}
