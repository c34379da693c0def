use serde::{Deserialize, Serialize};

use super::aggregate::PeriodSeries;
use super::period::{Granularity, Period};
use super::trend::LinearTrend;
use super::ForecastError;

const ZERO_TOLERANCE: f64 = 1e-12;

/// How seasonality combines with the trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalModel {
    #[default]
    Additive,
    Multiplicative,
}

impl SeasonalModel {
    /// Indicator that leaves the trend unchanged.
    pub fn neutral(self) -> f64 {
        match self {
            SeasonalModel::Additive => 0.0,
            SeasonalModel::Multiplicative => 1.0,
        }
    }

    pub fn combine(self, trend: f64, indicator: f64) -> f64 {
        match self {
            SeasonalModel::Additive => trend + indicator,
            SeasonalModel::Multiplicative => trend * indicator,
        }
    }

    fn raw(self, actual: f64, trend: f64) -> Option<f64> {
        match self {
            SeasonalModel::Additive => Some(actual - trend),
            SeasonalModel::Multiplicative if trend.abs() < ZERO_TOLERANCE => None,
            SeasonalModel::Multiplicative => Some(actual / trend),
        }
    }

    fn normalize(self, strict: f64, mean: f64) -> f64 {
        match self {
            SeasonalModel::Additive => strict - mean,
            SeasonalModel::Multiplicative => strict / mean,
        }
    }
}

/// Per-slot seasonal indicators.
///
/// `strict` holds the slot averages of the raw indicators; `cleaned` is
/// normalized so that its mean is 0 (additive) or 1 (multiplicative).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalIndicators {
    pub model: SeasonalModel,
    pub granularity: Granularity,
    pub strict: Vec<f64>,
    pub cleaned: Vec<f64>,
}

impl SeasonalIndicators {
    pub fn for_slot(&self, slot: usize) -> f64 {
        self.cleaned
            .get(slot)
            .copied()
            .unwrap_or_else(|| self.model.neutral())
    }

    pub fn for_period(&self, period: Period) -> f64 {
        self.for_slot(period.slot())
    }

    pub fn mean(&self) -> f64 {
        if self.cleaned.is_empty() {
            return self.model.neutral();
        }
        self.cleaned.iter().sum::<f64>() / self.cleaned.len() as f64
    }
}

/// Raw indicator of every observation against its trend value.
pub fn raw_indicators(
    series: &PeriodSeries,
    trend: &LinearTrend,
    model: SeasonalModel,
) -> Result<Vec<f64>, ForecastError> {
    series
        .points()
        .iter()
        .enumerate()
        .map(|(position, (period, actual))| {
            model.raw(*actual, trend.value_at(position + 1)).ok_or_else(|| {
                ForecastError::InsufficientData(format!(
                    "trend is zero at {}, multiplicative indicators are undefined",
                    period
                ))
            })
        })
        .collect()
}

pub fn seasonal_indicators(
    series: &PeriodSeries,
    trend: &LinearTrend,
    model: SeasonalModel,
) -> Result<SeasonalIndicators, ForecastError> {
    let raw = raw_indicators(series, trend, model)?;
    let granularity = series.granularity();
    let slots = granularity.slots();

    let mut sums = vec![0.0; slots];
    let mut counts = vec![0_usize; slots];
    for ((period, _), value) in series.points().iter().zip(&raw) {
        sums[period.slot()] += value;
        counts[period.slot()] += 1;
    }

    let strict = sums
        .iter()
        .zip(&counts)
        .enumerate()
        .map(|(slot, (sum, count))| {
            if *count == 0 {
                Err(ForecastError::InsufficientData(format!(
                    "no observations for seasonal slot {}",
                    granularity.slot_label(slot)
                )))
            } else {
                Ok(sum / *count as f64)
            }
        })
        .collect::<Result<Vec<f64>, ForecastError>>()?;

    let mean = strict.iter().sum::<f64>() / slots as f64;
    if model == SeasonalModel::Multiplicative && mean.abs() < ZERO_TOLERANCE {
        return Err(ForecastError::InsufficientData(
            "multiplicative indicators average to zero".to_string(),
        ));
    }
    let cleaned = strict.iter().map(|value| model.normalize(*value, mean)).collect();

    Ok(SeasonalIndicators {
        model,
        granularity,
        strict,
        cleaned,
    })
}
