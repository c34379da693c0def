pub mod forecast_service;
pub mod stock_service;

pub use forecast_service::ForecastService;
pub use stock_service::StockService;
