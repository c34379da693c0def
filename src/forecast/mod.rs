//! Seasonal demand forecasting.
//!
//! The pipeline runs in four pure stages: dense period aggregation, a
//! least-squares trend, per-slot seasonal indicators and a one-cycle
//! projection. Identical inputs always produce identical reports.

pub mod aggregate;
pub mod period;
pub mod projection;
pub mod seasonal;
pub mod supplies;
pub mod trend;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::warehouse::{ProductId, Warehouse};

pub use aggregate::{aggregate_sales, ForecastScope, PeriodSeries, ValueMode};
pub use period::{Granularity, Period};
pub use projection::project;
pub use seasonal::{raw_indicators, seasonal_indicators, SeasonalIndicators, SeasonalModel};
pub use supplies::{supply_coverage, SupplyCoverage};
pub use trend::{fit_trend, LinearTrend};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ForecastRequest {
    pub scope: ForecastScope,
    pub value_mode: ValueMode,
    pub granularity: Granularity,
    pub model: SeasonalModel,
}

impl ForecastRequest {
    pub fn for_product(product_id: impl Into<String>) -> Self {
        Self {
            scope: ForecastScope::Product(ProductId::new(product_id)),
            ..Self::default()
        }
    }

    pub fn with_value_mode(mut self, value_mode: ValueMode) -> Self {
        self.value_mode = value_mode;
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_model(mut self, model: SeasonalModel) -> Self {
        self.model = model;
        self
    }
}

/// Everything one forecast run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub request: ForecastRequest,
    pub history: PeriodSeries,
    pub trend: LinearTrend,
    pub indicators: SeasonalIndicators,
    pub forecast: BTreeMap<Period, f64>,
}

impl ForecastReport {
    /// Forecast values in period order.
    pub fn values(&self) -> Vec<f64> {
        self.forecast.values().copied().collect()
    }

    /// Trend value for every historical and forecast period.
    pub fn trend_line(&self) -> Vec<(Period, f64)> {
        let Some(first) = self.history.first_period() else {
            return Vec::new();
        };
        let total = self.history.len() + self.forecast.len();
        (1..=total)
            .map(|t| (first.offset(t as i64 - 1), self.trend.value_at(t)))
            .collect()
    }
}

pub fn forecast(
    warehouse: &Warehouse,
    request: &ForecastRequest,
) -> Result<ForecastReport, ForecastError> {
    let history = aggregate_sales(
        warehouse,
        &request.scope,
        request.value_mode,
        request.granularity,
    )?;
    let trend = fit_trend(&history.values())?;
    let indicators = seasonal_indicators(&history, &trend, request.model)?;
    let forecast = project(&history, &trend, &indicators);

    tracing::debug!(
        scope = %request.scope,
        observed = history.len(),
        slope = trend.slope,
        intercept = trend.intercept,
        "forecast computed"
    );

    Ok(ForecastReport {
        request: request.clone(),
        history,
        trend,
        indicators,
        forecast,
    })
}
