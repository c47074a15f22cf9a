//! Service for plain catalog reads and writes.
//!
//! Nothing in here touches the stock counter except the initial value at
//! product creation; all later stock movement goes through the adjustment
//! and order engines.

use crate::error::{AppError, AppResult};
use crate::models::{NewProduct, Product, ProductUpdate};
use crate::repositories::ProductRepository;
use std::sync::Arc;
use tracing::info;

pub struct CatalogService {
    product_repo: Arc<ProductRepository>,
}

impl CatalogService {
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// Create a product. Duplicate SKUs surface as a conflict.
    pub async fn create_product(&self, new: &NewProduct) -> AppResult<Product> {
        new.validate().map_err(AppError::Validation)?;

        let product = self.product_repo.create(new).await?;

        info!("Created product {} (sku={})", product.id, product.sku);
        Ok(product)
    }

    pub async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))
    }

    pub async fn get_product_by_sku(&self, sku: &str) -> AppResult<Product> {
        self.product_repo
            .find_by_sku(sku)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))
    }

    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.product_repo.list().await?)
    }

    /// Edit title, image, price or description. SKU and stock cannot be
    /// edited here.
    pub async fn update_product(&self, id: i32, update: &ProductUpdate) -> AppResult<Product> {
        if update.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".into()));
        }

        self.product_repo
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))
    }

    /// Delete a product and, via the FK cascade, its ledger entries.
    pub async fn delete_product(&self, id: i32) -> AppResult<i32> {
        let deleted = self
            .product_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;

        info!("Deleted product {}", deleted);
        Ok(deleted)
    }
}
