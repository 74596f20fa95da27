//! Marquee Engine - Main entry point.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_engine::{
    api,
    infrastructure::{config::AppConfig, movie_store::SqliteMovieStore},
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Marquee Engine");

    // Load configuration
    let config_path = AppConfig::config_path();
    tracing::info!(path = %config_path.display(), "Loading configuration");
    let config = AppConfig::load_from_file(&config_path)?;

    // Connect to the store
    tracing::info!(server = %config.server, database = %config.database, "Connecting to store");
    let store = SqliteMovieStore::connect(&config.server, &config.database, config.store_timeout())
        .await
        .with_context(|| format!("failed to connect to store at {}", config.server))?;

    let app = Arc::new(App::new(Arc::new(store)));
    let router = api::router(app);

    // Start server
    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
