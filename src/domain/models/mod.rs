// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 搜索（search）：Tavily搜索、提取、爬取、站点地图的响应结构
/// - 研究（research）：Perplexity深度研究的响应结构
/// - 用户（user）：网关用户实体
///
/// 上游响应结构同时承担请求校验后的对外响应契约：
/// 网关对上游返回的数据做结构校验后原样透传。
pub mod research;
pub mod search;
pub mod user;
