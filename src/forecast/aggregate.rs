use std::fmt;

use serde::{Deserialize, Serialize};

use super::period::{Granularity, Period};
use super::ForecastError;
use crate::currency::Money;
use crate::warehouse::{Operation, ProductId, Warehouse};

/// Which sales feed the series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ForecastScope {
    #[default]
    All,
    Product(ProductId),
}

impl ForecastScope {
    pub fn includes(&self, product_id: &ProductId) -> bool {
        match self {
            ForecastScope::All => true,
            ForecastScope::Product(id) => id == product_id,
        }
    }
}

impl fmt::Display for ForecastScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastScope::All => f.write_str("all products"),
            ForecastScope::Product(id) => write!(f, "product {}", id),
        }
    }
}

/// Whether periods sum sold units or sale value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueMode {
    #[default]
    Units,
    Revenue,
}

/// Dense, ordered series of per-period values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSeries {
    granularity: Granularity,
    points: Vec<(Period, f64)>,
}

impl PeriodSeries {
    /// Consecutive periods starting at `start`, one per value.
    pub fn from_values(start: Period, values: impl IntoIterator<Item = f64>) -> Self {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(offset, value)| (start.offset(offset as i64), value))
            .collect();
        Self {
            granularity: start.granularity(),
            points,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn points(&self) -> &[(Period, f64)] {
        &self.points
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_period(&self) -> Option<Period> {
        self.points.first().map(|(period, _)| *period)
    }

    pub fn last_period(&self) -> Option<Period> {
        self.points.last().map(|(period, _)| *period)
    }
}

/// Sums the scope's sales per period, from its first sale through the
/// period of the warehouse's latest operation of any product.
pub fn aggregate_sales(
    warehouse: &Warehouse,
    scope: &ForecastScope,
    mode: ValueMode,
    granularity: Granularity,
) -> Result<PeriodSeries, ForecastError> {
    if let ForecastScope::Product(id) = scope {
        if warehouse.product(id).is_none() {
            return Err(ForecastError::UnknownProduct(id.clone()));
        }
    }

    let sales: Vec<&Operation> = warehouse
        .operations()
        .filter(|op| op.is_sale() && scope.includes(&op.product_id))
        .collect();
    let first_date = sales
        .iter()
        .map(|op| op.date)
        .min()
        .ok_or_else(|| ForecastError::InsufficientData(format!("no sales recorded for {}", scope)))?;
    let last_date = warehouse
        .last_operation_date()
        .map_or(first_date, |last| last.max(first_date));

    let first = Period::containing(first_date, granularity);
    let periods = Period::span(first, Period::containing(last_date, granularity));
    let slot_of = |op: &Operation| (Period::containing(op.date, granularity).index() - first.index()) as usize;

    let values: Vec<f64> = match mode {
        ValueMode::Units => {
            let mut buckets = vec![0_i64; periods.len()];
            for op in &sales {
                if let Some(bucket) = buckets.get_mut(slot_of(op)) {
                    *bucket += op.quantity as i64;
                }
            }
            buckets.into_iter().map(|units| units as f64).collect()
        }
        ValueMode::Revenue => {
            let mut buckets = vec![Money::zero(warehouse.currency().clone()); periods.len()];
            for op in &sales {
                if let Some(bucket) = buckets.get_mut(slot_of(op)) {
                    *bucket += op.total_value();
                }
            }
            buckets.iter().map(Money::to_major_f64).collect()
        }
    };

    tracing::debug!(
        %scope,
        ?granularity,
        ?mode,
        periods = periods.len(),
        "aggregated sales series"
    );
    Ok(PeriodSeries::from_values(first, values))
}
