//! inkpost server entry point.
//!
//! Starts the Axum HTTP server. Run with the `initdb` argument to apply
//! the bundled schema and exit instead of serving.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use inkpost::api;
use inkpost::app_state::AppState;
use inkpost::config::AppConfig;
use inkpost::persistence;
use inkpost::persistence::repository::EntryRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;

    // Open the store; unreachable store is fatal at startup
    let pool = persistence::connect(&config).await?;

    // Explicit schema initialization command
    if std::env::args().nth(1).as_deref() == Some("initdb") {
        persistence::init_db(&pool).await?;
        println!("Initialized the database.");
        return Ok(());
    }

    tracing::info!(addr = %config.listen_addr, "starting inkpost");

    // Build application state
    let app_state = AppState {
        entries: EntryRepository::new(pool),
        config: Arc::new(config.clone()),
    };

    // Build router with session and tracing layers
    let app = api::build_app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
