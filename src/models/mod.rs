//! Domain models for the Stockbook backend.
//!
//! This module contains all database-backed models representing
//! the catalog, the stock-adjustment ledger and orders.

pub mod adjustment;
pub mod order;
pub mod product;

// Re-export all models for convenient access
pub use adjustment::AdjustmentTransaction;
pub use order::{CartLine, Order, OrderItem};
pub use product::{NewProduct, Product, ProductUpdate};
