//! Service that imports a demo catalog from dummyjson.com.

use crate::error::{AppError, AppResult};
use crate::models::NewProduct;
use crate::repositories::ProductRepository;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

const SEED_URL: &str = "https://dummyjson.com/products";

/// Shape of one product in the dummyjson payload; only the fields we
/// import are listed.
#[derive(Debug, Deserialize)]
struct SeedProduct {
    title: String,
    sku: String,
    #[serde(default)]
    images: Vec<String>,
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    stock: i32,
}

#[derive(Debug, Deserialize)]
struct SeedResponse {
    products: Vec<SeedProduct>,
}

pub struct SeedService {
    product_repo: Arc<ProductRepository>,
    client: reqwest::Client,
}

impl SeedService {
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self {
            product_repo,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the demo catalog and insert every product whose SKU is not
    /// already present. Returns the number of rows inserted.
    pub async fn seed_products(&self) -> AppResult<usize> {
        info!("Seeding demo catalog from {}", SEED_URL);

        let response: SeedResponse = self
            .client
            .get(SEED_URL)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Seed fetch failed: {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("Seed payload invalid: {}", e)))?;

        let mut inserted = 0;
        for seed in response.products {
            let price = match Decimal::from_f64_retain(seed.price) {
                Some(p) => p,
                None => {
                    warn!("Skipping seed product {}: bad price", seed.sku);
                    continue;
                }
            };

            let new = NewProduct {
                title: seed.title,
                sku: seed.sku,
                // Only the first image is kept
                image: seed.images.into_iter().next(),
                price,
                stock: Some(seed.stock),
                description: Some(seed.description),
            };

            if self.product_repo.insert_if_absent(&new).await? {
                inserted += 1;
            }
        }

        info!("Seeded {} product(s)", inserted);
        Ok(inserted)
    }
}
