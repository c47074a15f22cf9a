//! Catalog routes: product CRUD and demo-catalog seeding.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::api::{error_to_response, json_success};
use crate::models::{NewProduct, ProductUpdate};
use crate::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/seed/products", post(seed_products))
        .route("/product", post(create_product))
        .route("/product/:id", get(get_product))
        .route("/product/:id", put(update_product))
        .route("/product/:id", delete(delete_product))
        .route("/product/sku/:sku", get(get_product_by_sku))
        .route("/list-products", get(list_products))
}

async fn seed_products(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    match state.seeder.seed_products().await {
        Ok(inserted) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "inserted": inserted })),
        )
            .into_response(),
        Err(e) => error_to_response(e),
    }
}

async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<NewProduct>,
) -> axum::response::Response {
    match state.catalog.create_product(&body).await {
        Ok(product) => json_success(StatusCode::OK, json!(product)),
        Err(e) => error_to_response(e),
    }
}

async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> axum::response::Response {
    match state.catalog.get_product(id).await {
        Ok(product) => json_success(StatusCode::OK, json!(product)),
        Err(e) => error_to_response(e),
    }
}

async fn get_product_by_sku(
    Extension(state): Extension<Arc<AppState>>,
    Path(sku): Path<String>,
) -> axum::response::Response {
    match state.catalog.get_product_by_sku(&sku).await {
        Ok(product) => json_success(StatusCode::OK, json!(product)),
        Err(e) => error_to_response(e),
    }
}

async fn update_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<ProductUpdate>,
) -> axum::response::Response {
    match state.catalog.update_product(id, &body).await {
        Ok(product) => json_success(StatusCode::OK, json!(product)),
        Err(e) => error_to_response(e),
    }
}

async fn delete_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> axum::response::Response {
    match state.catalog.delete_product(id).await {
        Ok(id) => json_success(StatusCode::OK, json!({ "id": id })),
        Err(e) => error_to_response(e),
    }
}

// The frontend consumes this one as a bare array, without the envelope.
async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    match state.catalog.list_products().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => error_to_response(e),
    }
}
