// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 提供商适配器模块
///
/// 提供领域提供商接口的HTTP实现
/// 每个适配器负责一个上游API的鉴权、超时控制和错误消息提取
pub mod perplexity;
pub mod tavily;
pub mod upstream;
