use std::collections::BTreeMap;

use super::aggregate::PeriodSeries;
use super::period::Period;
use super::seasonal::SeasonalIndicators;
use super::trend::LinearTrend;

/// Projects one full seasonal cycle past the last observed period.
///
/// Step `i` (1-based) sits at trend position `N + i`. Negative projections
/// are clamped to zero.
pub fn project(
    series: &PeriodSeries,
    trend: &LinearTrend,
    indicators: &SeasonalIndicators,
) -> BTreeMap<Period, f64> {
    let Some(last) = series.last_period() else {
        return BTreeMap::new();
    };
    let observed = series.len();

    (1..=series.granularity().slots())
        .map(|step| {
            let period = last.offset(step as i64);
            let value = indicators
                .model
                .combine(trend.value_at(observed + step), indicators.for_period(period));
            (period, value.max(0.0))
        })
        .collect()
}
