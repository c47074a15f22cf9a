//! Stockbook Backend Library
//!
//! This module exposes the backend components for use by tests and other consumers.

pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repositories::*;
use services::*;
use std::sync::Arc;

/// Application state containing all repositories and services
pub struct AppState {
    pub product_repo: Arc<ProductRepository>,
    pub ledger_repo: Arc<StockLedgerRepository>,
    pub catalog: CatalogService,
    pub adjustments: AdjustmentService,
    pub orders: OrderService,
    pub seeder: SeedService,
}

impl AppState {
    /// Create a new AppState with initialized repositories and services
    pub fn new(pool: sqlx::PgPool) -> Self {
        let product_repo = Arc::new(ProductRepository::new(pool.clone()));
        let ledger_repo = Arc::new(StockLedgerRepository::new(pool));

        Self {
            catalog: CatalogService::new(product_repo.clone()),
            adjustments: AdjustmentService::new(ledger_repo.clone()),
            orders: OrderService::new(ledger_repo.clone()),
            seeder: SeedService::new(product_repo.clone()),
            product_repo,
            ledger_repo,
        }
    }
}
