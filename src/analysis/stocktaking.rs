use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::stock::all_statuses;
use crate::warehouse::{ProductId, Warehouse};

/// Computed stock minus counted stock for every product in the warehouse.
///
/// Products missing from `counted` are treated as counted zero. Counted ids
/// the warehouse does not know are ignored.
pub fn compare_with_stocktaking(
    counted: &BTreeMap<ProductId, i64>,
    warehouse: &Warehouse,
    as_of: NaiveDate,
) -> BTreeMap<ProductId, i64> {
    stocktaking_report(counted, warehouse, as_of)
        .into_iter()
        .map(|line| {
            let difference = line.difference();
            (line.product_id, difference)
        })
        .collect()
}

/// One reconciliation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StocktakingLine {
    pub product_id: ProductId,
    pub computed: i64,
    pub counted: i64,
}

impl StocktakingLine {
    pub fn difference(&self) -> i64 {
        self.computed - self.counted
    }

    pub fn is_discrepancy(&self) -> bool {
        self.computed != self.counted
    }
}

/// Reconciliation rows for every product, ordered by product id.
pub fn stocktaking_report(
    counted: &BTreeMap<ProductId, i64>,
    warehouse: &Warehouse,
    as_of: NaiveDate,
) -> Vec<StocktakingLine> {
    let unknown = counted
        .keys()
        .filter(|id| warehouse.product(id).is_none())
        .count();
    if unknown > 0 {
        tracing::warn!(unknown, "stocktaking lists products the warehouse does not know");
    }
    all_statuses(warehouse, as_of)
        .into_iter()
        .map(|(product_id, computed)| {
            let counted = counted.get(&product_id).copied().unwrap_or(0);
            StocktakingLine {
                product_id,
                computed,
                counted,
            }
        })
        .collect()
}
