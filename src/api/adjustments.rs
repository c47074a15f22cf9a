//! Stock-adjustment ledger routes.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::{error_to_response, json_error, json_success};
use crate::AppState;

/// Body for applying or correcting an adjustment. A `price` field may be
/// present on the wire for historical reasons; it is ignored, since the
/// recorded price is always derived server-side.
#[derive(Debug, Deserialize)]
pub struct AdjustmentRequest {
    pub qty: Option<i32>,
}

pub fn router() -> Router {
    // The segment is named :id to match the catalog routes under
    // /product; the router requires one name per position. The value
    // extracted here is the SKU.
    Router::new()
        .route("/product/:id/adjustment", post(apply_adjustment))
        .route("/product/:id/adjustments", get(list_adjustments_for_sku))
        .route("/adjustments", get(list_all_adjustments))
        .route("/adjustment/:id", get(get_adjustment))
        .route("/adjustment/:id", put(correct_adjustment))
        .route("/adjustment/:id", delete(delete_adjustment))
}

async fn apply_adjustment(
    Extension(state): Extension<Arc<AppState>>,
    Path(sku): Path<String>,
    Json(body): Json<AdjustmentRequest>,
) -> axum::response::Response {
    let qty = match body.qty {
        Some(q) if q != 0 => q,
        _ => return json_error(StatusCode::BAD_REQUEST, "Qty must be present and non-zero"),
    };

    match state.adjustments.apply_adjustment(&sku, qty).await {
        Ok(result) => json_success(
            StatusCode::OK,
            json!({
                "product": result.product,
                "adjustment": result.adjustment,
            }),
        ),
        Err(e) => error_to_response(e),
    }
}

async fn list_adjustments_for_sku(
    Extension(state): Extension<Arc<AppState>>,
    Path(sku): Path<String>,
) -> axum::response::Response {
    match state.adjustments.list_for_sku(&sku).await {
        Ok(adjustments) => json_success(StatusCode::OK, json!(adjustments)),
        Err(e) => error_to_response(e),
    }
}

async fn list_all_adjustments(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    match state.adjustments.list_all().await {
        Ok(adjustments) => json_success(StatusCode::OK, json!(adjustments)),
        Err(e) => error_to_response(e),
    }
}

async fn get_adjustment(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> axum::response::Response {
    match state.adjustments.get_adjustment(id).await {
        Ok(adjustment) => json_success(StatusCode::OK, json!(adjustment)),
        Err(e) => error_to_response(e),
    }
}

async fn correct_adjustment(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<AdjustmentRequest>,
) -> axum::response::Response {
    let qty = match body.qty {
        Some(q) if q != 0 => q,
        _ => return json_error(StatusCode::BAD_REQUEST, "Qty must be present and non-zero"),
    };

    match state.adjustments.correct_adjustment(id, qty).await {
        Ok(adjustment) => json_success(StatusCode::OK, json!(adjustment)),
        Err(e) => error_to_response(e),
    }
}

async fn delete_adjustment(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> axum::response::Response {
    match state.adjustments.delete_adjustment(id).await {
        Ok(id) => json_success(StatusCode::OK, json!({ "id": id })),
        Err(e) => error_to_response(e),
    }
}
