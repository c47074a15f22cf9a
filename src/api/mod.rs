//! HTTP/JSON binding for the backend.
//!
//! Handlers translate the wire format used by the frontend
//! (`{status, message, data}` envelopes) to and from the service layer,
//! and map `AppError` kinds to HTTP status codes. No business logic
//! lives here.

pub mod adjustments;
pub mod orders;
pub mod products;

use crate::error::AppError;
use crate::AppState;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::error;

/// Build the full application router
pub fn router(state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(products::router())
        .merge(adjustments::router())
        .merge(orders::router())
        .layer(cors)
        .layer(Extension(state))
}

/// Success envelope: `{"status":"success","data":…}`
pub fn json_success(status: StatusCode, data: serde_json::Value) -> Response {
    (
        status,
        Json(json!({
            "status": "success",
            "data": data,
        })),
    )
        .into_response()
}

/// Error envelope: `{"status":"error","message":…,"data":null}`
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "status": "error",
            "message": message.into(),
            "data": null,
        })),
    )
        .into_response()
}

/// Map an application error to its HTTP response
pub fn error_to_response(err: AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!("Request failed: {:?}", err);
    }

    json_error(status, err.to_string())
}
