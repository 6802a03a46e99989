// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 用于在API请求和领域参数之间传输数据
pub mod crawl_request;
pub mod extract_request;
pub mod map_request;
pub mod research_request;
pub mod search_request;
