// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 上游提供商标识
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Tavily,
    Perplexity,
}

impl ProviderKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::Tavily => "Tavily",
            ProviderKind::Perplexity => "Perplexity",
        }
    }
}

/// 上游调用失败
///
/// 适配器只区分在HTTP层就能确定的类别：客户端判定的超时、
/// 上游内容策略拦截。其余失败一律作为 `Upstream` 携带原始消息透传，
/// 对外错误码由表示层的分类器统一决定。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderFailure {
    /// 请求超时
    #[error("{0}")]
    Timeout(String),
    /// 内容策略拦截
    #[error("{0}")]
    ContentFilter(String),
    /// 其他上游错误
    #[error("{0}")]
    Upstream(String),
}

impl ProviderFailure {
    /// 保留给诊断用途的原始消息
    pub fn message(&self) -> &str {
        match self {
            ProviderFailure::Timeout(msg)
            | ProviderFailure::ContentFilter(msg)
            | ProviderFailure::Upstream(msg) => msg,
        }
    }
}
