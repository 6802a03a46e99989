// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::domain::models::user::User;
use crate::domain::repositories::user_repository::UserRepository;
use crate::presentation::errors::ApiError;

/// 认证状态
///
/// 持有用户存储与JWT解码材料，作为认证中间件的共享状态
#[derive(Clone)]
pub struct AuthState {
    users: Arc<dyn UserRepository>,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthState {
    pub fn new(users: Arc<dyn UserRepository>, secret: &[u8]) -> Self {
        Self {
            users,
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

/// JWT负载
///
/// `sub` 为用户ID，`exp` 为过期时间（Unix秒）
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
}

/// 已认证用户
///
/// 认证通过后注入请求扩展，供处理器与特权检查读取
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// 认证中间件
///
/// 校验Bearer令牌并解析出当前用户。失败档位是固定的：
/// 缺少凭证401、令牌无效403、用户不存在404、用户停用400、
/// 用户存储不可用500。
///
/// # 参数
///
/// * `state` - 认证状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
///
/// # 返回值
///
/// * `Ok(Response)` - 认证成功的响应
/// * `Err(ApiError)` - 对应档位的认证错误
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = {
        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(ApiError::missing_credentials)?;

        auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(ApiError::missing_credentials)?
            .to_string()
    };

    let claims = decode::<Claims>(&token, &state.decoding_key, &state.validation)
        .map_err(|e| {
            debug!("Token rejected: {}", e);
            ApiError::invalid_credentials()
        })?
        .claims;

    let user = match state.users.find_by_id(claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!("Token subject not found: {}", claims.sub);
            return Err(ApiError::user_not_found());
        }
        Err(e) => {
            error!("User store error during authentication: {}", e);
            return Err(ApiError::auth_backend());
        }
    };

    if !user.is_active {
        return Err(ApiError::inactive_user());
    }

    req.extensions_mut().insert(CurrentUser(user));
    Ok(next.run(req).await)
}

/// 超级用户检查
///
/// 只能挂在认证中间件内侧的路由上；非超级用户返回403
pub async fn require_superuser(req: Request, next: Next) -> Result<Response, ApiError> {
    let CurrentUser(user) = req
        .extensions()
        .get::<CurrentUser>()
        .cloned()
        .ok_or_else(ApiError::missing_credentials)?;

    if !user.is_superuser {
        return Err(ApiError::insufficient_privileges());
    }

    Ok(next.run(req).await)
}
