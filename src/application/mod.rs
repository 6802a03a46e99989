// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含应用程序层的数据传输对象和请求校验
/// 该模块将对外的请求契约与领域参数分离
pub mod dto;
