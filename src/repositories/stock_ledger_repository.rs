//! Repository for the stock-adjustment transaction engine.
//!
//! This is the single place where the stock counter and the adjustment
//! ledger are written, so the consistency rule (every committed stock
//! mutation has exactly one matching ledger entry) is enforced here and
//! nowhere else. Each public write method runs as one database
//! transaction: either both sides commit or neither does.

use crate::error::RepositoryError;
use crate::models::{AdjustmentTransaction, CartLine, Order, Product};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

const ADJUSTMENT_COLUMNS: &str = "id, sku, qty, price, created_at";

pub struct StockLedgerRepository {
    pool: PgPool,
}

impl StockLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Atomic write operations
    // =========================================================================

    /// Apply a signed stock adjustment to the product identified by `sku`.
    ///
    /// Atomically increments the product's stock by `qty` and appends one
    /// ledger entry recording the delta together with the product's price
    /// as read inside the same transaction. Caller-supplied prices are
    /// never accepted on this path.
    ///
    /// The in-place `stock = stock + $1` update takes a row lock, so
    /// concurrent adjustments to the same SKU serialize and the final
    /// counter equals the sum of all committed deltas.
    pub async fn apply_adjustment(
        &self,
        sku: &str,
        qty: i32,
    ) -> Result<(Product, AdjustmentTransaction), RepositoryError> {
        if qty == 0 {
            return Err(RepositoryError::InvalidInput(
                "Quantity must not be zero".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        // Mutate the stock register and pick up the current price in one
        // statement; zero rows means the SKU does not exist.
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE product
            SET stock = stock + $1
            WHERE sku = $2
            RETURNING id, title, sku, image, price, description, stock
            "#,
        )
        .bind(qty)
        .bind(sku)
        .fetch_optional(&mut *tx)
        .await?;

        let product = match product {
            Some(p) => p,
            None => {
                tx.rollback().await?;
                return Err(RepositoryError::NotFound("Product not found".to_string()));
            }
        };

        // Append the ledger entry with the price snapshotted above.
        let adjustment = sqlx::query_as::<_, AdjustmentTransaction>(
            r#"
            INSERT INTO adjustment_transaction (sku, qty, price)
            VALUES ($1, $2, $3)
            RETURNING id, sku, qty, price, created_at
            "#,
        )
        .bind(sku)
        .bind(qty)
        .bind(product.price)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(sku, qty, stock = product.stock, "applied stock adjustment");
        Ok((product, adjustment))
    }

    /// Rewrite the quantity of an existing ledger entry, re-deriving its
    /// price from the referenced product's current price.
    ///
    /// This is a bookkeeping fix to the ledger only: the product's stock
    /// counter is deliberately left untouched (known, documented
    /// limitation of the correction path).
    pub async fn correct_adjustment(
        &self,
        adjustment_id: i32,
        new_qty: i32,
    ) -> Result<AdjustmentTransaction, RepositoryError> {
        if new_qty == 0 {
            return Err(RepositoryError::InvalidInput(
                "Quantity must not be zero".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let sku = sqlx::query_scalar::<_, String>(
            "SELECT sku FROM adjustment_transaction WHERE id = $1",
        )
        .bind(adjustment_id)
        .fetch_optional(&mut *tx)
        .await?;

        let sku = match sku {
            Some(s) => s,
            None => {
                tx.rollback().await?;
                return Err(RepositoryError::NotFound(
                    "Adjustment not found".to_string(),
                ));
            }
        };

        // Price is always read fresh from the product at correction time.
        let price = sqlx::query_scalar::<_, Decimal>("SELECT price FROM product WHERE sku = $1")
            .bind(&sku)
            .fetch_optional(&mut *tx)
            .await?;

        let price = match price {
            Some(p) => p,
            None => {
                tx.rollback().await?;
                return Err(RepositoryError::NotFound("Product not found".to_string()));
            }
        };

        let adjustment = sqlx::query_as::<_, AdjustmentTransaction>(
            r#"
            UPDATE adjustment_transaction
            SET qty = $1, price = $2
            WHERE id = $3
            RETURNING id, sku, qty, price, created_at
            "#,
        )
        .bind(new_qty)
        .bind(price)
        .bind(adjustment_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(adjustment_id, new_qty, "corrected ledger entry");
        Ok(adjustment)
    }

    /// Persist a cart as one order: the order header, one order item per
    /// line, one ledger entry per line carrying the caller-supplied cart
    /// price (the price the customer was quoted, not the product's current
    /// one), and one stock decrement per line. All of it commits together
    /// or not at all; a single unknown product aborts the whole cart.
    ///
    /// Checkout always removes units, so the ledger entry carries the
    /// negated line quantity and the ledger sum stays equal to the net
    /// stock effect.
    pub async fn checkout(&self, cart: &[CartLine]) -> Result<Order, RepositoryError> {
        if cart.is_empty() {
            return Err(RepositoryError::InvalidInput("Cart is empty".to_string()));
        }
        for line in cart {
            line.validate().map_err(RepositoryError::InvalidInput)?;
        }

        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders DEFAULT VALUES RETURNING id, created_at",
        )
        .fetch_one(&mut *tx)
        .await?;

        for line in cart {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, sku, qty, price)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order.id)
            .bind(line.product_id)
            .bind(&line.sku)
            .bind(line.qty)
            .bind(line.price)
            .execute(&mut *tx)
            .await?;

            // Ledger entry for the removal; an unknown SKU trips the FK
            // here and aborts the transaction. Surfaced as NotFound, same
            // as an unknown product id below.
            let appended = sqlx::query(
                r#"
                INSERT INTO adjustment_transaction (sku, qty, price)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&line.sku)
            .bind(-line.qty)
            .bind(line.price)
            .execute(&mut *tx)
            .await;

            if let Err(e) = appended {
                let err = match RepositoryError::from(e) {
                    RepositoryError::ConstraintViolation(_) => RepositoryError::NotFound(
                        format!("Product {} not found", line.sku),
                    ),
                    other => other,
                };
                tx.rollback().await?;
                return Err(err);
            }

            let updated = sqlx::query("UPDATE product SET stock = stock - $1 WHERE id = $2")
                .bind(line.qty)
                .bind(line.product_id)
                .execute(&mut *tx)
                .await?;

            if updated.rows_affected() == 0 {
                tx.rollback().await?;
                return Err(RepositoryError::NotFound(format!(
                    "Product {} not found",
                    line.product_id
                )));
            }
        }

        tx.commit().await?;

        debug!(order_id = order.id, lines = cart.len(), "checkout committed");
        Ok(order)
    }

    // =========================================================================
    // Ledger reads and hygiene
    // =========================================================================

    /// Find a single ledger entry by id
    pub async fn find_by_id(
        &self,
        adjustment_id: i32,
    ) -> Result<Option<AdjustmentTransaction>, RepositoryError> {
        let adjustment = sqlx::query_as::<_, AdjustmentTransaction>(&format!(
            "SELECT {ADJUSTMENT_COLUMNS} FROM adjustment_transaction WHERE id = $1"
        ))
        .bind(adjustment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(adjustment)
    }

    /// Ledger history for one SKU, newest first
    pub async fn list_for_sku(
        &self,
        sku: &str,
    ) -> Result<Vec<AdjustmentTransaction>, RepositoryError> {
        let adjustments = sqlx::query_as::<_, AdjustmentTransaction>(&format!(
            r#"
            SELECT {ADJUSTMENT_COLUMNS} FROM adjustment_transaction
            WHERE sku = $1
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(sku)
        .fetch_all(&self.pool)
        .await?;

        Ok(adjustments)
    }

    /// Full ledger history across all SKUs, newest first
    pub async fn list_all(&self) -> Result<Vec<AdjustmentTransaction>, RepositoryError> {
        let adjustments = sqlx::query_as::<_, AdjustmentTransaction>(&format!(
            r#"
            SELECT {ADJUSTMENT_COLUMNS} FROM adjustment_transaction
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(adjustments)
    }

    /// Remove a ledger entry.
    ///
    /// This does NOT re-apply the inverse quantity to the product's stock:
    /// deletion is a ledger-hygiene operation and knowingly leaves the
    /// counter out of step with the remaining ledger sum.
    pub async fn delete(&self, adjustment_id: i32) -> Result<Option<i32>, RepositoryError> {
        let deleted = sqlx::query_scalar::<_, i32>(
            "DELETE FROM adjustment_transaction WHERE id = $1 RETURNING id",
        )
        .bind(adjustment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deleted)
    }
}
