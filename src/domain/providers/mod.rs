// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 上游提供商接口模块
///
/// 该模块定义了网关对上游服务的抽象契约，遵循依赖倒置原则。
/// 具体的HTTP适配器由基础设施层提供。
///
/// 包含的接口：
/// - 搜索提供商（search_provider）：搜索、提取、爬取、站点地图
/// - 研究提供商（research_provider）：深度研究
/// - 失败类型（failure）：适配器向上反馈的统一失败表示
pub mod failure;
pub mod research_provider;
pub mod search_provider;
