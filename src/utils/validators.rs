// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;
use validator::ValidationError;

/// 验证URL形状
///
/// 只做纯粹的形状检查：必须能解析为带主机名的绝对 http/https URL。
/// 不做DNS解析，也不产生任何网络副作用。
///
/// # 参数
///
/// * `value` - URL字符串
///
/// # 返回值
///
/// * `Ok(())` - URL形状有效
/// * `Err(ValidationError)` - URL无法解析或使用了不支持的scheme
pub fn validate_absolute_url(value: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(value).map_err(|_| invalid_url())?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(invalid_url());
    }

    if parsed.host_str().is_none() {
        return Err(invalid_url());
    }

    Ok(())
}

fn invalid_url() -> ValidationError {
    validation_error("url", "Invalid URL: expected an absolute http or https URL")
}

/// 构造带固定消息的校验错误
///
/// 供手写 `Validate` 实现复用
pub fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
