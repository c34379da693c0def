//! Stock, financial and demand aggregates over a warehouse snapshot.

pub mod range;
pub mod ranking;
pub mod series;
pub mod stock;
pub mod stocktaking;
pub mod totals;

pub use range::DateRange;
pub use ranking::{best_selling_colors, best_selling_sizes};
pub use series::{compare_periods, monthly_incomes, monthly_sales, yearly, Metric, MetricValue};
pub use stock::{get_statuses, stock_by_color, stock_by_size, stock_status, StockBreakdown};
pub use stocktaking::{compare_with_stocktaking, stocktaking_report, StocktakingLine};
pub use totals::{
    get_balance, get_costs, get_income, get_products_balance, get_resupply, get_sales, Totals,
};
