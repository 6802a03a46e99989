// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：核心业务实体和上游响应结构
/// - 提供商接口（providers）：上游搜索/研究服务的抽象契约
/// - 仓库接口（repositories）：用户存储的抽象接口
///
/// 领域层是系统的核心，不依赖于任何外部实现，
/// 体现了纯粹的业务逻辑和业务规则。
pub mod models;
pub mod providers;
pub mod repositories;
