use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::analysis::{stock_status, stocktaking_report, StocktakingLine};
use crate::config::AnalysisConfig;
use crate::errors::{Result, WarehouseError};
use crate::forecast::{supply_coverage, ForecastScope, Granularity, SupplyCoverage};
use crate::warehouse::{ProductId, Warehouse};

use super::ForecastService;

pub struct StockService;

impl StockService {
    /// Months the product's stock as of `as_of` covers, against its monthly
    /// demand forecast.
    pub fn supply_coverage(
        warehouse: &Warehouse,
        product_id: &ProductId,
        as_of: NaiveDate,
        config: &AnalysisConfig,
    ) -> Result<SupplyCoverage> {
        if warehouse.product(product_id).is_none() {
            return Err(WarehouseError::InvalidReference(format!(
                "product {}",
                product_id
            )));
        }
        let stock = stock_status(warehouse, product_id, as_of);
        let mut request = config
            .forecast
            .request(ForecastScope::Product(product_id.clone()));
        request.granularity = Granularity::Monthly;

        let coverage = match ForecastService::try_run(warehouse, &request) {
            Some(report) => supply_coverage(&report.values(), stock, config.supply_horizon_months),
            None => SupplyCoverage::NoData,
        };
        tracing::debug!(product = %product_id, stock, %coverage, "supply coverage");
        Ok(coverage)
    }

    /// Stocktaking lines whose counted quantity differs from the computed one.
    pub fn discrepancies(
        warehouse: &Warehouse,
        counted: &BTreeMap<ProductId, i64>,
        as_of: NaiveDate,
    ) -> Vec<StocktakingLine> {
        stocktaking_report(counted, warehouse, as_of)
            .into_iter()
            .filter(StocktakingLine::is_discrepancy)
            .collect()
    }
}
