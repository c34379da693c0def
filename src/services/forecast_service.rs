use crate::config::AnalysisConfig;
use crate::errors::Result;
use crate::forecast::{forecast, ForecastReport, ForecastRequest, ForecastScope};
use crate::warehouse::Warehouse;

pub struct ForecastService;

impl ForecastService {
    pub fn run(warehouse: &Warehouse, request: &ForecastRequest) -> Result<ForecastReport> {
        Ok(forecast(warehouse, request)?)
    }

    /// Runs a forecast, reporting "no forecast available" as `None`.
    pub fn try_run(warehouse: &Warehouse, request: &ForecastRequest) -> Option<ForecastReport> {
        match forecast(warehouse, request) {
            Ok(report) => Some(report),
            Err(err) => {
                tracing::warn!(scope = %request.scope, error = %err, "no forecast available");
                None
            }
        }
    }

    /// Forecast for `scope` using the configured granularity, value mode and model.
    pub fn with_defaults(
        warehouse: &Warehouse,
        scope: ForecastScope,
        config: &AnalysisConfig,
    ) -> Result<ForecastReport> {
        Self::run(warehouse, &config.forecast.request(scope))
    }
}
