use std::collections::BTreeSet;

use serde::Serialize;

use super::range::DateRange;
use crate::currency::Money;
use crate::errors::Result;
use crate::query::{get_products, ProductFilter};
use crate::warehouse::{OperationKind, ProductId, Warehouse};

/// Financial and unit totals of the matched products over one range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Money,
    pub costs: Money,
    pub sales: i64,
    pub resupply: i64,
}

impl Totals {
    pub fn compute(warehouse: &Warehouse, range: DateRange, filter: &ProductFilter) -> Result<Self> {
        let ids = matched_ids(warehouse, filter)?;
        Ok(Self::accumulate(warehouse, range, &ids))
    }

    pub(crate) fn accumulate(
        warehouse: &Warehouse,
        range: DateRange,
        ids: &BTreeSet<ProductId>,
    ) -> Self {
        let zero = Money::zero(warehouse.currency().clone());
        let mut totals = Self {
            income: zero.clone(),
            costs: zero,
            sales: 0,
            resupply: 0,
        };
        if range.is_degenerate() {
            return totals;
        }
        for operation in warehouse
            .operations()
            .filter(|op| range.contains(op.date) && ids.contains(&op.product_id))
        {
            match operation.kind {
                OperationKind::Sale => {
                    totals.income += operation.total_value();
                    totals.sales += operation.quantity as i64;
                }
                OperationKind::Resupply => {
                    totals.costs += operation.total_value();
                    totals.resupply += operation.quantity as i64;
                }
            }
        }
        totals
    }

    pub fn balance(&self) -> Money {
        self.income.clone() - self.costs.clone()
    }

    pub fn products_balance(&self) -> i64 {
        self.resupply - self.sales
    }
}

pub(crate) fn matched_ids(warehouse: &Warehouse, filter: &ProductFilter) -> Result<BTreeSet<ProductId>> {
    Ok(get_products(warehouse, filter)?
        .into_iter()
        .map(|product| product.id.clone())
        .collect())
}

/// Value of sales in the range.
pub fn get_income(warehouse: &Warehouse, range: DateRange, filter: &ProductFilter) -> Result<Money> {
    Ok(Totals::compute(warehouse, range, filter)?.income)
}

/// Value of resupplies in the range.
pub fn get_costs(warehouse: &Warehouse, range: DateRange, filter: &ProductFilter) -> Result<Money> {
    Ok(Totals::compute(warehouse, range, filter)?.costs)
}

pub fn get_balance(warehouse: &Warehouse, range: DateRange, filter: &ProductFilter) -> Result<Money> {
    Ok(Totals::compute(warehouse, range, filter)?.balance())
}

/// Units sold in the range.
pub fn get_sales(warehouse: &Warehouse, range: DateRange, filter: &ProductFilter) -> Result<i64> {
    Ok(Totals::compute(warehouse, range, filter)?.sales)
}

/// Units received in the range.
pub fn get_resupply(warehouse: &Warehouse, range: DateRange, filter: &ProductFilter) -> Result<i64> {
    Ok(Totals::compute(warehouse, range, filter)?.resupply)
}

pub fn get_products_balance(
    warehouse: &Warehouse,
    range: DateRange,
    filter: &ProductFilter,
) -> Result<i64> {
    Ok(Totals::compute(warehouse, range, filter)?.products_balance())
}
