//! Service for the stock-adjustment ledger: manual adjustments,
//! corrections, reads and deletes.

use crate::error::{AppError, AppResult};
use crate::models::{AdjustmentTransaction, Product};
use crate::repositories::StockLedgerRepository;
use std::sync::Arc;
use tracing::info;

pub struct AdjustmentService {
    ledger_repo: Arc<StockLedgerRepository>,
}

/// Result of applying a manual adjustment: the post-adjustment product
/// state and the ledger entry that recorded it.
#[derive(Debug)]
pub struct AdjustmentResult {
    pub product: Product,
    pub adjustment: AdjustmentTransaction,
}

impl AdjustmentService {
    pub fn new(ledger_repo: Arc<StockLedgerRepository>) -> Self {
        Self { ledger_repo }
    }

    /// Apply a signed quantity delta to a product's stock.
    ///
    /// The recorded price is always the product's current price at call
    /// time; any price supplied by the caller is ignored.
    pub async fn apply_adjustment(&self, sku: &str, qty: i32) -> AppResult<AdjustmentResult> {
        if qty == 0 {
            return Err(AppError::Validation("Qty must not be zero".into()));
        }

        info!("Applying adjustment: sku={}, qty={}", sku, qty);

        let (product, adjustment) = self.ledger_repo.apply_adjustment(sku, qty).await?;

        info!(
            "Adjustment {} applied: sku={}, stock now {}",
            adjustment.id, sku, product.stock
        );

        Ok(AdjustmentResult {
            product,
            adjustment,
        })
    }

    /// Overwrite the quantity of an existing ledger entry, re-reading the
    /// product's current price. Stock is not recomputed.
    pub async fn correct_adjustment(
        &self,
        adjustment_id: i32,
        qty: i32,
    ) -> AppResult<AdjustmentTransaction> {
        if qty == 0 {
            return Err(AppError::Validation("Qty must not be zero".into()));
        }

        info!("Correcting adjustment {}: qty={}", adjustment_id, qty);

        let adjustment = self
            .ledger_repo
            .correct_adjustment(adjustment_id, qty)
            .await?;

        Ok(adjustment)
    }

    /// Fetch one ledger entry (used by the edit form for prefill)
    pub async fn get_adjustment(&self, adjustment_id: i32) -> AppResult<AdjustmentTransaction> {
        self.ledger_repo
            .find_by_id(adjustment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Adjustment not found".into()))
    }

    /// Ledger history for one SKU, newest first
    pub async fn list_for_sku(&self, sku: &str) -> AppResult<Vec<AdjustmentTransaction>> {
        Ok(self.ledger_repo.list_for_sku(sku).await?)
    }

    /// Full ledger history, newest first
    pub async fn list_all(&self) -> AppResult<Vec<AdjustmentTransaction>> {
        Ok(self.ledger_repo.list_all().await?)
    }

    /// Delete a ledger entry. The inverse quantity is NOT re-applied to
    /// stock; this is a ledger-hygiene operation only.
    pub async fn delete_adjustment(&self, adjustment_id: i32) -> AppResult<i32> {
        let deleted = self
            .ledger_repo
            .delete(adjustment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Adjustment not found".into()))?;

        info!("Deleted adjustment {}", deleted);
        Ok(deleted)
    }
}
