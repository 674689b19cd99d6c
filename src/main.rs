//! Sprintdeck Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use sprintdeck_api::state::AppState;
use sprintdeck_core::config::AppConfig;
use sprintdeck_core::error::AppError;
use sprintdeck_store::MemoryUserStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("SPRINTDECK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Sprintdeck v{}", env!("CARGO_PKG_VERSION"));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    tracing::info!(
        "Initializing cache (provider: {})...",
        config.cache.provider
    );
    let user_store = Arc::new(MemoryUserStore::new());
    let state = AppState::build(config, user_store).await?;
    tracing::info!("Application state initialized");

    let app = sprintdeck_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Sprintdeck server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Sprintdeck server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
