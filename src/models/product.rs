use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product model representing one catalog entry.
///
/// `stock` is the Stock Register for the product: a plain signed counter
/// that is only ever mutated by the adjustment and order engines, never by
/// a direct field edit. It carries no floor and may go negative.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub sku: String,
    pub image: Option<String>,
    pub price: Decimal, // NUMERIC in database; current, authoritative
    pub description: String,
    pub stock: i32,
}

/// Fields accepted when creating a product. The SKU is caller-assigned
/// and immutable once the row exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub sku: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub stock: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Fields accepted when editing a product. Deliberately excludes `sku`
/// and `stock`: the SKU is immutable and stock only moves through the
/// adjustment/order engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewProduct {
    /// Validate required fields before touching the database
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU is required".to_string());
        }
        if self.sku.len() > 50 {
            return Err("SKU must be at most 50 characters".to_string());
        }
        if self.price < Decimal::ZERO {
            return Err("Price must not be negative".to_string());
        }
        Ok(())
    }
}
