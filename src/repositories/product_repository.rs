//! Repository for catalog reads and writes that do not touch stock.

use crate::error::RepositoryError;
use crate::models::{NewProduct, Product, ProductUpdate};
use sqlx::PgPool;

const PRODUCT_COLUMNS: &str = "id, title, sku, image, price, description, stock";

pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product. Initial stock is allowed here; afterwards the
    /// counter only moves through the adjustment and order engines.
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO product (title, sku, image, price, stock, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, sku, image, price, description, stock
            "#,
        )
        .bind(&new.title)
        .bind(&new.sku)
        .bind(&new.image)
        .bind(new.price)
        .bind(new.stock.unwrap_or(0))
        .bind(new.description.as_deref().unwrap_or(""))
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Find a product by surrogate id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM product WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Find a product by SKU
    pub async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM product WHERE sku = $1"
        ))
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// List the whole catalog
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM product ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Update a product's catalog fields.
    ///
    /// SKU and stock are deliberately absent from the statement: the SKU
    /// is immutable and the stock counter belongs to the engines.
    pub async fn update(
        &self,
        id: i32,
        update: &ProductUpdate,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE product
            SET title = $1, image = $2, price = $3, description = $4
            WHERE id = $5
            RETURNING id, title, sku, image, price, description, stock
            "#,
        )
        .bind(&update.title)
        .bind(&update.image)
        .bind(update.price)
        .bind(update.description.as_deref().unwrap_or(""))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Delete a product. Its ledger entries go with it via the FK cascade.
    pub async fn delete(&self, id: i32) -> Result<Option<i32>, RepositoryError> {
        let deleted = sqlx::query_scalar::<_, i32>("DELETE FROM product WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deleted)
    }

    /// Insert a seed product, skipping rows whose SKU already exists.
    /// Returns true if a row was inserted.
    pub async fn insert_if_absent(&self, new: &NewProduct) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO product (title, sku, image, price, stock, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (sku) DO NOTHING
            "#,
        )
        .bind(&new.title)
        .bind(&new.sku)
        .bind(&new.image)
        .bind(new.price)
        .bind(new.stock.unwrap_or(0))
        .bind(new.description.as_deref().unwrap_or(""))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
