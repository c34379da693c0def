use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::range::DateRange;
use super::totals::{matched_ids, Totals};
use crate::currency::Money;
use crate::errors::Result;
use crate::query::ProductFilter;
use crate::warehouse::Warehouse;

/// Aggregate selectable for period comparisons.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Income,
    Costs,
    Balance,
    Sales,
    Resupply,
    ProductsBalance,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MetricValue {
    Money(Money),
    Units(i64),
}

impl Metric {
    pub fn of(self, totals: &Totals) -> MetricValue {
        match self {
            Metric::Income => MetricValue::Money(totals.income.clone()),
            Metric::Costs => MetricValue::Money(totals.costs.clone()),
            Metric::Balance => MetricValue::Money(totals.balance()),
            Metric::Sales => MetricValue::Units(totals.sales),
            Metric::Resupply => MetricValue::Units(totals.resupply),
            Metric::ProductsBalance => MetricValue::Units(totals.products_balance()),
        }
    }
}

/// One metric value per range, in the order the ranges were given.
pub fn compare_periods(
    warehouse: &Warehouse,
    ranges: &[DateRange],
    metric: Metric,
    filter: &ProductFilter,
) -> Result<Vec<(DateRange, MetricValue)>> {
    let ids = matched_ids(warehouse, filter)?;
    Ok(ranges
        .iter()
        .map(|range| {
            let totals = Totals::accumulate(warehouse, *range, &ids);
            (*range, metric.of(&totals))
        })
        .collect())
}

/// One metric value per calendar year from `first_year` to `last_year`, inclusive.
pub fn yearly(
    warehouse: &Warehouse,
    first_year: i32,
    last_year: i32,
    metric: Metric,
    filter: &ProductFilter,
) -> Result<Vec<(i32, MetricValue)>> {
    let years: Vec<(i32, DateRange)> = (first_year..=last_year)
        .filter_map(|year| DateRange::year(year).map(|range| (year, range)))
        .collect();
    let ranges: Vec<DateRange> = years.iter().map(|(_, range)| *range).collect();
    let values = compare_periods(warehouse, &ranges, metric, filter)?;
    Ok(years
        .into_iter()
        .zip(values)
        .map(|((year, _), (_, value))| (year, value))
        .collect())
}

/// Income of each of the `months` months before the month of `today`, oldest first.
pub fn monthly_incomes(
    warehouse: &Warehouse,
    months: i32,
    today: NaiveDate,
    filter: &ProductFilter,
) -> Result<Vec<Money>> {
    let ids = matched_ids(warehouse, filter)?;
    Ok(DateRange::preceding_months(today, months)
        .into_iter()
        .map(|range| Totals::accumulate(warehouse, range, &ids).income)
        .collect())
}

/// Units sold in each of the `months` months before the month of `today`, oldest first.
pub fn monthly_sales(
    warehouse: &Warehouse,
    months: i32,
    today: NaiveDate,
    filter: &ProductFilter,
) -> Result<Vec<i64>> {
    let ids = matched_ids(warehouse, filter)?;
    Ok(DateRange::preceding_months(today, months)
        .into_iter()
        .map(|range| Totals::accumulate(warehouse, range, &ids).sales)
        .collect())
}
