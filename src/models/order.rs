use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order header. Header-only by design: no status field, never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

/// One line of a persisted order. `price` is the caller-supplied cart
/// price, not re-derived from the product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub sku: String,
    pub qty: i32,
    pub price: Decimal,
}

/// One line of an incoming cart, as submitted by the frontend.
/// `qty` is the number of units to remove from stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i32,
    pub sku: String,
    pub qty: i32,
    pub price: Decimal,
}

impl CartLine {
    /// Validate a single cart line
    pub fn validate(&self) -> Result<(), String> {
        if self.qty == 0 {
            return Err(format!("Cart line for SKU {} has zero quantity", self.sku));
        }
        if self.sku.trim().is_empty() {
            return Err("Cart line is missing a SKU".to_string());
        }
        Ok(())
    }
}
