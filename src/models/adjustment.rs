use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One entry in the stock-adjustment ledger.
///
/// The ledger is append-only except for the correction path, which may
/// rewrite `qty` (and re-derive `price`) on an existing entry. `qty` is a
/// signed delta and is never zero. `price` is a snapshot: for manual
/// adjustments it is copied from the product's current price at write time,
/// for checkout lines it is the cart price the customer was quoted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdjustmentTransaction {
    pub id: i32,
    pub sku: String,
    pub qty: i32,
    pub price: Decimal, // NUMERIC in database
    pub created_at: DateTime<Utc>,
}

impl AdjustmentTransaction {
    /// Validate a quantity delta before it reaches the ledger
    pub fn validate_qty(qty: i32) -> Result<(), String> {
        if qty == 0 {
            return Err("Quantity must not be zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_qty_rejected() {
        assert!(AdjustmentTransaction::validate_qty(0).is_err());
    }

    #[test]
    fn test_signed_qty_accepted() {
        assert!(AdjustmentTransaction::validate_qty(5).is_ok());
        assert!(AdjustmentTransaction::validate_qty(-3).is_ok());
    }
}
