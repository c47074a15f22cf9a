//! Stockbook Backend Service
//!
//! Main entry point for the Stockbook inventory ledger backend.
//! This service provides:
//! - HTTP/JSON API for the catalog, the adjustment ledger and checkout
//! - Migration-managed PostgreSQL storage

use std::net::SocketAddr;
use std::sync::Arc;

use stockbook_backend::api;
use stockbook_backend::config::AppConfig;
use stockbook_backend::database::{create_pool, run_migrations};
use stockbook_backend::error::{AppError, AppResult};
use stockbook_backend::AppState;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("stockbook_backend={},sqlx=warn,tower_http=info", config.log_level).into()
            }),
        )
        .init();

    info!("Stockbook backend starting");
    info!("Environment: {}", config.environment);
    info!("Log level: {}", config.log_level);
    info!("HTTP port: {}", config.http_port);

    // =========================================================================
    // DATABASE SETUP
    // =========================================================================
    info!("Connecting to database...");

    let pool = create_pool(&config.database).await.map_err(|e| {
        error!("Failed to create database pool: {}", e);
        AppError::Database(e)
    })?;

    info!("Running migrations...");
    run_migrations(&pool, None).await.map_err(|e| {
        error!("Migration failure: {}", e);
        AppError::Database(e)
    })?;

    // =========================================================================
    // HTTP SERVER
    // =========================================================================
    let state = Arc::new(AppState::new(pool));
    let app = api::router(state, &config.cors_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        AppError::Message(format!("Failed to bind {}: {}", addr, e))
    })?;

    axum::serve(listener, app).await.map_err(|e| {
        error!("Server error: {}", e);
        AppError::Message(format!("Server error: {}", e))
    })?;

    Ok(())
}
