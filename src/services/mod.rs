pub mod adjustment_service;
pub mod catalog_service;
pub mod order_service;
pub mod seed_service;

pub use adjustment_service::AdjustmentService;
pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use seed_service::SeedService;
