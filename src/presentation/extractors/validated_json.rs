// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::presentation::errors::ApiError;

/// 带校验的JSON提取器
///
/// 先将请求体反序列化为目标类型，再执行字段级校验。
/// 两步中任意一步失败都返回422，错误信封与其他错误一致。
///
/// # 参数
/// * `T` - 目标DTO类型，需实现 `Deserialize` 与 `Validate`
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation_message(rejection.body_text()))?;

        value
            .validate()
            .map_err(ApiError::from_validation_errors)?;

        Ok(Self(value))
    }
}
