#![doc(test(attr(deny(warnings))))]

//! Warehouse Core offers stock, sales and demand analytics over a read-only
//! warehouse snapshot of products, categories and stock operations.

pub mod analysis;
pub mod config;
pub mod currency;
pub mod errors;
pub mod forecast;
pub mod query;
pub mod services;
pub mod utils;
pub mod warehouse;

use std::sync::Once;

pub use analysis::DateRange;
pub use currency::{CurrencyCode, Money};
pub use errors::{Result, WarehouseError};
pub use query::{get_products, FilterTokens, ProductFilter};
pub use warehouse::{Warehouse, WarehouseBuilder};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with(&config::AnalysisConfig::default());
}

/// Initializes global tracing with the configured log directive.
pub fn init_with(config: &config::AnalysisConfig) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing_with(&config.log_directive);
        tracing::info!(directive = %config.log_directive, "Warehouse Core tracing initialized.");
    });
}
