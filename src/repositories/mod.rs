pub mod product_repository;
pub mod stock_ledger_repository;

// Re-export all repositories for convenient access
pub use product_repository::ProductRepository;
pub use stock_ledger_repository::StockLedgerRepository;
