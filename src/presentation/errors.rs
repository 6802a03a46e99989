// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use validator::ValidationErrors;

use crate::domain::providers::failure::{ProviderFailure, ProviderKind};

/// 对外错误码
///
/// 每个错误码绑定一个预设的HTTP状态，见各构造函数与 `classify`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    ValidationError,
    AuthError,
    RateLimitExceeded,
    InvalidApiKey,
    RequestTimeout,
    InvalidRequest,
    ContentFilter,
    TavilyApiError,
    PerplexityApiError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "validation_error",
            ErrorCode::AuthError => "auth_error",
            ErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            ErrorCode::InvalidApiKey => "invalid_api_key",
            ErrorCode::RequestTimeout => "request_timeout",
            ErrorCode::InvalidRequest => "invalid_request",
            ErrorCode::ContentFilter => "content_filter",
            ErrorCode::TavilyApiError => "tavily_api_error",
            ErrorCode::PerplexityApiError => "perplexity_api_error",
        }
    }
}

/// 应用错误类型
///
/// 所有非2xx响应的统一信封：`{status_code, error_code, message, details?}`。
/// 已构造的 `ApiError` 是终态，任何层都不得再次包装或重新分类。
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub error_code: ErrorCode,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn new(
        status_code: StatusCode,
        error_code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            error_code,
            message: message.into(),
            details: None,
        }
    }

    /// 向details对象追加一个字段
    pub fn with_detail(mut self, key: &str, value: Value) -> Self {
        let details = self
            .details
            .get_or_insert_with(|| Value::Object(Map::new()));
        if let Some(map) = details.as_object_mut() {
            map.insert(key.to_string(), value);
        }
        self
    }

    /// 请求体字段校验失败（422）
    pub fn from_validation_errors(errors: ValidationErrors) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::ValidationError,
            "Request validation failed",
        )
        .with_detail(
            "errors",
            serde_json::to_value(&errors).unwrap_or_default(),
        )
    }

    /// 请求体无法解析为JSON或目标结构（422）
    pub fn validation_message(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::ValidationError,
            message,
        )
    }

    /// 缺少Bearer凭证（401）
    pub fn missing_credentials() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ErrorCode::AuthError,
            "Not authenticated",
        )
    }

    /// 令牌无效或过期（403）
    pub fn invalid_credentials() -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            ErrorCode::AuthError,
            "Could not validate credentials",
        )
    }

    /// 令牌主体在用户存储中不存在（404）
    pub fn user_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorCode::AuthError, "User not found")
    }

    /// 用户被停用（400）
    pub fn inactive_user() -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorCode::AuthError, "Inactive user")
    }

    /// 非超级用户访问特权路由（403）
    pub fn insufficient_privileges() -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            ErrorCode::AuthError,
            "The user doesn't have enough privileges",
        )
    }

    /// 用户存储不可用（500）
    pub fn auth_backend() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::AuthError,
            "Authentication backend error",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert(
            "status_code".to_string(),
            json!(self.status_code.as_u16()),
        );
        body.insert("error_code".to_string(), json!(self.error_code));
        body.insert("message".to_string(), json!(self.message));
        if let Some(details) = self.details {
            body.insert("details".to_string(), details);
        }

        (self.status_code, Json(Value::Object(body))).into_response()
    }
}

fn fallback_code(provider: ProviderKind) -> ErrorCode {
    match provider {
        ProviderKind::Tavily => ErrorCode::TavilyApiError,
        ProviderKind::Perplexity => ErrorCode::PerplexityApiError,
    }
}

/// 上游失败分类器
///
/// 将适配器抛出的失败映射到固定的错误分类。匹配按表序先到先得：
/// 限流、API密钥、超时、无效请求、内容拦截，最后回退到按提供商的
/// 通用错误。消息子串匹配不区分大小写；超时与内容拦截还各有一个
/// 与消息无关的类型信号。原始消息始终保留在 `details.original_error`。
///
/// 顺序本身是契约：一条同时命中多行的消息以先匹配的行为准，
/// 不要调整行序。
pub fn classify(provider: ProviderKind, failure: &ProviderFailure) -> ApiError {
    let original = failure.to_string();
    let haystack = original.to_lowercase();

    let error = if haystack.contains("rate limit") || haystack.contains("usage limit") {
        ApiError::new(
            StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::RateLimitExceeded,
            "API rate limit exceeded. Please try again later.",
        )
    } else if ["api key", "authentication", "unauthorized", "invalid key"]
        .iter()
        .any(|needle| haystack.contains(needle))
    {
        ApiError::new(
            StatusCode::UNAUTHORIZED,
            ErrorCode::InvalidApiKey,
            format!("Invalid or missing {} API key.", provider.label()),
        )
    } else if matches!(failure, ProviderFailure::Timeout(_)) || haystack.contains("timeout") {
        ApiError::new(
            StatusCode::GATEWAY_TIMEOUT,
            ErrorCode::RequestTimeout,
            "Request timed out. The operation took too long to complete.",
        )
    } else if haystack.contains("invalid") || haystack.contains("validation") {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            ErrorCode::InvalidRequest,
            original.clone(),
        )
    } else if matches!(failure, ProviderFailure::ContentFilter(_)) {
        ApiError::new(
            StatusCode::FORBIDDEN,
            ErrorCode::ContentFilter,
            format!(
                "Content was filtered due to {} policy violation.",
                provider.label()
            ),
        )
    } else {
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            fallback_code(provider),
            format!("{} API error: {}", provider.label(), original),
        )
    };

    error.with_detail("original_error", Value::String(original))
}
