//! blogdemo - A small blog with articles, users and messages

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogdemo::{
    api::{self, AppState},
    config::Config,
    db::{
        self,
        repositories::{SqlxArticleRepository, SqlxMessageRepository, SqlxUserRepository},
    },
    services::MessageService,
    theme::BlogRenderer,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogdemo=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting blogdemo...");

    // Load configuration
    let config = Config::load_with_env(Path::new("config.yml"))?;
    config.validate()?;
    tracing::info!("Configuration loaded");

    // Initialize database
    let pool = db::create_pool(&config.database).await?;
    tracing::info!("Database connected: {:?}", config.database.driver);

    // Run migrations
    db::migrations::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let user_repo = SqlxUserRepository::boxed(pool.clone());
    let article_repo = SqlxArticleRepository::boxed(pool.clone());
    let message_repo = SqlxMessageRepository::boxed(pool.clone());

    // Demo mode: fill an empty database with sample content
    #[cfg(feature = "demo")]
    {
        if blogdemo::services::seed_demo_data(user_repo.as_ref(), article_repo.as_ref()).await? {
            tracing::info!("Demo mode: sample user and articles created");
        }
    }

    let renderer = BlogRenderer::new(config.blog.clone())?;
    tracing::info!("Templates compiled for blog '{}'", config.blog.title);

    let state = AppState {
        user_repo,
        article_repo,
        message_service: Arc::new(MessageService::new(message_repo)),
        renderer: Arc::new(renderer),
    };

    // Build router
    let app = api::build_router(state, &config.server.cors_origin)?;

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
