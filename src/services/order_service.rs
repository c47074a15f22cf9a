//! Service for converting carts into orders.

use crate::error::{AppError, AppResult};
use crate::models::{CartLine, Order};
use crate::repositories::StockLedgerRepository;
use std::sync::Arc;
use tracing::info;

pub struct OrderService {
    ledger_repo: Arc<StockLedgerRepository>,
}

impl OrderService {
    pub fn new(ledger_repo: Arc<StockLedgerRepository>) -> Self {
        Self { ledger_repo }
    }

    /// Check out a cart.
    ///
    /// One atomic unit: the order header, all order items, one ledger
    /// entry per line (at the caller-supplied cart price) and all stock
    /// decrements commit together. Any bad line aborts the whole cart and
    /// leaves no trace.
    pub async fn checkout(&self, cart: &[CartLine]) -> AppResult<Order> {
        if cart.is_empty() {
            return Err(AppError::Validation("Cart is empty".into()));
        }
        for line in cart {
            line.validate().map_err(AppError::Validation)?;
        }

        info!("Checkout: {} line(s)", cart.len());

        let order = self.ledger_repo.checkout(cart).await?;

        info!("Order {} created", order.id);
        Ok(order)
    }
}
