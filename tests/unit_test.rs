use rust_decimal::Decimal;
use stockbook_backend::error::{AppError, RepositoryError};
use stockbook_backend::models::*;

/// Unit tests for cart line validation
#[test]
fn test_cart_line_rejects_zero_qty() {
    let line = CartLine {
        product_id: 1,
        sku: "A1".to_string(),
        qty: 0,
        price: Decimal::new(150, 0),
    };
    assert!(line.validate().is_err());
}

#[test]
fn test_cart_line_accepts_positive_qty() {
    let line = CartLine {
        product_id: 1,
        sku: "A1".to_string(),
        qty: 2,
        price: Decimal::new(150, 0),
    };
    assert!(line.validate().is_ok());
}

/// Unit tests for the adjustment quantity rule
#[test]
fn test_adjustment_qty_never_zero() {
    assert!(AdjustmentTransaction::validate_qty(0).is_err());
    assert!(AdjustmentTransaction::validate_qty(1).is_ok());
    assert!(AdjustmentTransaction::validate_qty(-1).is_ok());
}

/// Unit tests for the error taxonomy
#[test]
fn test_error_kinds_map_to_expected_statuses() {
    assert_eq!(AppError::Validation("bad".into()).status_code(), 400);
    assert_eq!(AppError::NotFound("missing".into()).status_code(), 404);
    assert_eq!(AppError::Conflict("dup sku".into()).status_code(), 400);
    assert_eq!(AppError::ExternalService("seed".into()).status_code(), 502);
}

#[test]
fn test_transaction_abort_is_retryable() {
    let app: AppError = RepositoryError::TransactionAborted("serialization".into()).into();
    assert!(app.is_retryable());

    let app: AppError = RepositoryError::NotFound("missing".into()).into();
    assert!(!app.is_retryable());
}

#[test]
fn test_duplicate_maps_to_conflict() {
    let app: AppError = RepositoryError::Duplicate("sku A1".into()).into();
    assert!(matches!(app, AppError::Conflict(_)));
}

/// Wire-shape tests: the frontend's JSON must deserialize as expected
#[test]
fn test_cart_line_wire_shape() {
    let line: CartLine =
        serde_json::from_str(r#"{"product_id":7,"sku":"A1","qty":2,"price":"150"}"#).unwrap();
    assert_eq!(line.product_id, 7);
    assert_eq!(line.qty, 2);
    assert_eq!(line.price, Decimal::new(150, 0));
}

#[test]
fn test_new_product_wire_shape_defaults() {
    // image, stock and description are optional on the wire
    let new: NewProduct =
        serde_json::from_str(r#"{"title":"Widget","sku":"A1","price":"100"}"#).unwrap();
    assert!(new.validate().is_ok());
    assert_eq!(new.stock, None);
    assert_eq!(new.image, None);
}

#[test]
fn test_product_update_has_no_stock_or_sku_field() {
    // Extra fields are ignored, so a client sending stock/sku cannot
    // smuggle them into an update
    let update: ProductUpdate = serde_json::from_str(
        r#"{"title":"Widget","price":"100","sku":"HACK","stock":999}"#,
    )
    .unwrap();
    assert_eq!(update.title, "Widget");
    let back = serde_json::to_value(&update).unwrap();
    assert!(back.get("stock").is_none());
    assert!(back.get("sku").is_none());
}
