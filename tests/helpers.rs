#![allow(dead_code)]

use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use stockbook_backend::config::DatabaseConfig;
use stockbook_backend::database::{create_pool, run_migrations};
use stockbook_backend::models::{NewProduct, Product};
use stockbook_backend::repositories::{ProductRepository, StockLedgerRepository};
use stockbook_backend::services::{AdjustmentService, CatalogService, OrderService};

/// Test database connection plus the repositories and services under test
pub struct TestDatabase {
    pub pool: PgPool,
    pub product_repo: Arc<ProductRepository>,
    pub ledger_repo: Arc<StockLedgerRepository>,
    pub catalog: CatalogService,
    pub adjustments: AdjustmentService,
    pub orders: OrderService,
}

impl TestDatabase {
    /// Connect to the test database, running migrations first.
    ///
    /// Returns `None` when TEST_DATABASE_URL is not set or the database is
    /// unreachable, so database-backed tests can skip themselves instead
    /// of failing on machines without Postgres.
    pub async fn connect() -> Option<Self> {
        let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

        let config = DatabaseConfig {
            url: database_url,
            max_connections: 5,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 300,
            max_lifetime_secs: 600,
            test_before_acquire: true,
        };

        let pool = match create_pool(&config).await {
            Ok(pool) => pool,
            Err(e) => {
                eprintln!("Test database unavailable, skipping: {}", e);
                return None;
            }
        };

        run_migrations(&pool, None)
            .await
            .expect("Failed to run migrations");

        Some(Self::from_pool(pool))
    }

    /// Build a TestDatabase from an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        let product_repo = Arc::new(ProductRepository::new(pool.clone()));
        let ledger_repo = Arc::new(StockLedgerRepository::new(pool.clone()));

        Self {
            pool,
            catalog: CatalogService::new(product_repo.clone()),
            adjustments: AdjustmentService::new(ledger_repo.clone()),
            orders: OrderService::new(ledger_repo.clone()),
            product_repo,
            ledger_repo,
        }
    }

    /// Sum of ledger quantities for one SKU, zero when the ledger is empty
    pub async fn ledger_sum(&self, sku: &str) -> i64 {
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT SUM(qty)::BIGINT FROM adjustment_transaction WHERE sku = $1",
        )
        .bind(sku)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to sum ledger")
        .unwrap_or(0)
    }

    /// Number of persisted order items referencing a SKU
    pub async fn order_item_count(&self, sku: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_items WHERE sku = $1")
            .bind(sku)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count order items")
    }

    /// Order items belonging to one order, in insertion order
    pub async fn order_items(&self, order_id: i32) -> Vec<stockbook_backend::models::OrderItem> {
        sqlx::query_as::<_, stockbook_backend::models::OrderItem>(
            "SELECT id, order_id, product_id, sku, qty, price FROM order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .expect("Failed to fetch order items")
    }
}

/// A SKU that is unique per test invocation, so tests can share a database
/// without cleanup races
pub fn unique_sku(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &suffix[..12])
}

/// Insert a product for tests
pub async fn create_test_product(
    db: &TestDatabase,
    sku: &str,
    stock: i32,
    price: Decimal,
) -> Product {
    db.product_repo
        .create(&NewProduct {
            title: format!("Test product {}", sku),
            sku: sku.to_string(),
            image: None,
            price,
            stock: Some(stock),
            description: None,
        })
        .await
        .expect("Failed to create test product")
}

/// Skip the current test when no test database is configured
#[macro_export]
macro_rules! require_test_db {
    () => {
        match helpers::TestDatabase::connect().await {
            Some(db) => db,
            None => {
                eprintln!("TEST_DATABASE_URL not set; skipping");
                return;
            }
        }
    };
}
