//! Checkout route.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::{error_to_response, json_error, json_success};
use crate::models::CartLine;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub cart: Option<Vec<CartLine>>,
}

pub fn router() -> Router {
    Router::new().route("/order", post(checkout))
}

async fn checkout(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<CheckoutRequest>,
) -> axum::response::Response {
    let cart = match body.cart {
        Some(cart) if !cart.is_empty() => cart,
        _ => return json_error(StatusCode::BAD_REQUEST, "Cart is empty"),
    };

    match state.orders.checkout(&cart).await {
        Ok(order) => json_success(StatusCode::OK, json!({ "order_id": order.id })),
        Err(e) => error_to_response(e),
    }
}
