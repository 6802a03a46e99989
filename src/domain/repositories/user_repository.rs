// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::user::User;

#[derive(Error, Debug)]
pub enum UserRepositoryError {
    #[error("User store error: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by id (the token subject)
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError>;
}
