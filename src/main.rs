// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use searchgw::config::settings::Settings;
use searchgw::domain::providers::research_provider::ResearchProvider;
use searchgw::domain::providers::search_provider::SearchProvider;
use searchgw::domain::repositories::user_repository::UserRepository;
use searchgw::infrastructure::observability::metrics;
use searchgw::infrastructure::providers::perplexity::PerplexityClient;
use searchgw::infrastructure::providers::tavily::TavilyClient;
use searchgw::infrastructure::repositories::user_repo_impl::InMemoryUserRepository;
use searchgw::presentation::middleware::auth_middleware::AuthState;
use searchgw::presentation::routes;
use searchgw::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting searchgw...");

    // 2. Initialize Prometheus metrics
    let metrics_handle = metrics::init_metrics();

    // 3. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 4. Seed the user store
    let users: Arc<dyn UserRepository> =
        Arc::new(InMemoryUserRepository::from_seeds(&settings.auth.users));
    info!("User store seeded with {} users", settings.auth.users.len());

    // 5. Build upstream clients
    let tavily: Arc<dyn SearchProvider> = Arc::new(TavilyClient::new(&settings.tavily)?);
    let perplexity: Arc<dyn ResearchProvider> =
        Arc::new(PerplexityClient::new(&settings.perplexity)?);
    info!("Upstream clients initialized");

    // 6. Setup auth state
    let auth_state = AuthState::new(users, settings.auth.token_secret.as_bytes());

    // 7. Start HTTP server
    let app = routes::routes(auth_state)
        .layer(Extension(tavily))
        .layer(Extension(perplexity))
        .layer(Extension(metrics_handle))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
