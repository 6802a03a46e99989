// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::config::settings::UserSeed;
use crate::domain::models::user::User;
use crate::domain::repositories::user_repository::{UserRepository, UserRepositoryError};

/// 内存用户仓库
///
/// 网关本身不持久化用户，启动时从配置种子构建。
/// 通过仓库接口访问，后续可替换为数据库实现而不影响中间件。
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// 从配置种子构建仓库
    ///
    /// # 参数
    ///
    /// * `seeds` - 配置中的用户种子列表
    pub fn from_seeds(seeds: &[UserSeed]) -> Self {
        let repo = Self::new();
        for seed in seeds {
            repo.insert(User {
                id: seed.id,
                email: seed.email.clone(),
                is_active: seed.is_active,
                is_superuser: seed.is_superuser,
            });
        }
        repo
    }

    pub fn insert(&self, user: User) {
        self.users.insert(user.id, user);
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.users.get(&id).map(|user| user.value().clone()))
    }
}
