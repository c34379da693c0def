use serde::Serialize;

use super::ForecastError;

/// Least-squares line over the period positions `t = 1..=N`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Trend value at 1-based position `t`.
    pub fn value_at(&self, t: usize) -> f64 {
        self.slope * t as f64 + self.intercept
    }
}

pub fn fit_trend(values: &[f64]) -> Result<LinearTrend, ForecastError> {
    if values.is_empty() {
        return Err(ForecastError::InsufficientData(
            "no observations to fit a trend".to_string(),
        ));
    }

    let n = values.len() as f64;
    let mean_t = (n + 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;
    let (numerator, denominator) =
        values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(num, den), (position, value)| {
                let dt = (position + 1) as f64 - mean_t;
                (num + dt * (value - mean_y), den + dt * dt)
            });

    if denominator <= f64::EPSILON {
        return Err(ForecastError::InsufficientData(
            "a trend needs at least two periods".to_string(),
        ));
    }

    let slope = numerator / denominator;
    Ok(LinearTrend {
        slope,
        intercept: mean_y - slope * mean_t,
    })
}
