// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use uuid::Uuid;

/// 应用程序配置设置
///
/// 包含服务器、认证和上游提供商（Tavily、Perplexity）的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 认证配置
    pub auth: AuthSettings,
    /// Tavily提供商配置
    pub tavily: TavilySettings,
    /// Perplexity提供商配置
    pub perplexity: PerplexitySettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 认证配置设置
#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    /// Bearer令牌签名密钥（HS256）
    pub token_secret: String,
    /// 预置用户列表
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

/// 预置用户配置
///
/// 网关本身不持久化用户，启动时从配置加载到内存仓库
#[derive(Debug, Clone, Deserialize)]
pub struct UserSeed {
    /// 用户ID，同时是令牌的sub声明
    pub id: Uuid,
    /// 用户邮箱
    pub email: String,
    /// 是否启用
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// 是否为超级用户
    #[serde(default)]
    pub is_superuser: bool,
}

/// Tavily提供商配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TavilySettings {
    /// Tavily API密钥
    pub api_key: String,
    /// API基础地址
    pub base_url: String,
    /// 默认请求超时时间（秒）
    pub timeout: u64,
    /// 可选的HTTP代理地址
    pub proxy: Option<String>,
}

/// Perplexity提供商配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct PerplexitySettings {
    /// Perplexity API密钥
    pub api_key: String,
    /// API基础地址
    pub base_url: String,
    /// 默认请求超时时间（秒），深度研究耗时较长
    pub timeout: u64,
    /// 可选的HTTP代理地址
    pub proxy: Option<String>,
    /// 默认研究模型
    pub model: String,
}

fn default_true() -> bool {
    true
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default auth settings
            .set_default("auth.token_secret", "your-secret-key")?
            // Default Tavily settings
            .set_default("tavily.base_url", "https://api.tavily.com")?
            .set_default("tavily.timeout", 60)?
            // Default Perplexity settings
            .set_default("perplexity.base_url", "https://api.perplexity.ai")?
            .set_default("perplexity.timeout", 300)?
            .set_default("perplexity.model", "sonar-deep-research")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SEARCHGW").separator("__"));

        builder.build()?.try_deserialize()
    }
}
