use anyhow::Context;
use socialmedia_api::{AppConfig, AppState, app, db::Database};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::from_env();

    let db = Database::new(config.database_path.clone());
    if let Err(e) = db.ensure().await {
        // Keep serving; every request will report the store error.
        error!("Failed to init database: {}", e);
    }

    let state = AppState::new(db);
    let router = app(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("Server running on http://{}", config.bind_addr);
    info!("Database file: {}", config.database_path.display());
    info!("API Endpoints:");
    info!("  GET    /users/{{email}}   - Fetch user");
    info!("  POST   /users           - Create user");
    info!("  PUT    /users/{{email}}   - Update user");
    info!("  DELETE /users/{{email}}   - Delete user");
    info!("  GET    /posts/{{email}}   - List a user's posts");
    info!("  POST   /posts           - Create post");
    info!("  DELETE /posts/{{id}}      - Delete post");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server closed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
