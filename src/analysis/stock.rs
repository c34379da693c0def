use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::Result;
use crate::query::{get_products, ProductFilter};
use crate::warehouse::{Operation, ProductId, Sex, Size, Warehouse};

/// Stock grouped by a (sex, row key) pair, then by a column key.
pub type StockBreakdown<R, C> = BTreeMap<(Sex, R), BTreeMap<C, i64>>;

/// Net units of one product as of `as_of`, inclusive. Later operations are ignored.
pub fn stock_status(warehouse: &Warehouse, product_id: &ProductId, as_of: NaiveDate) -> i64 {
    warehouse
        .operations_for(product_id)
        .filter(|operation| operation.date <= as_of)
        .map(Operation::stock_delta)
        .sum()
}

/// Stock-on-hand for every product matched by `filter`.
pub fn get_statuses(
    warehouse: &Warehouse,
    as_of: NaiveDate,
    filter: &ProductFilter,
) -> Result<BTreeMap<ProductId, i64>> {
    let products = get_products(warehouse, filter)?;
    let statuses = statuses_for(
        warehouse,
        as_of,
        products.into_iter().map(|product| product.id.clone()),
    );
    tracing::debug!(%as_of, products = statuses.len(), "computed stock statuses");
    Ok(statuses)
}

/// Stock-on-hand for every product in the warehouse.
pub(crate) fn all_statuses(warehouse: &Warehouse, as_of: NaiveDate) -> BTreeMap<ProductId, i64> {
    statuses_for(
        warehouse,
        as_of,
        warehouse.products().map(|product| product.id.clone()),
    )
}

fn statuses_for(
    warehouse: &Warehouse,
    as_of: NaiveDate,
    ids: impl Iterator<Item = ProductId>,
) -> BTreeMap<ProductId, i64> {
    let mut statuses: BTreeMap<ProductId, i64> = ids.map(|id| (id, 0)).collect();
    for operation in warehouse.operations().filter(|op| op.date <= as_of) {
        if let Some(count) = statuses.get_mut(&operation.product_id) {
            *count += operation.stock_delta();
        }
    }
    statuses
}

/// Stock per (sex, color), split by size.
pub fn stock_by_color(
    warehouse: &Warehouse,
    statuses: &BTreeMap<ProductId, i64>,
) -> StockBreakdown<String, Size> {
    let mut breakdown: StockBreakdown<String, Size> = BTreeMap::new();
    for (id, count) in statuses {
        let Some(product) = warehouse.product(id) else {
            continue;
        };
        *breakdown
            .entry((product.sex, product.color.clone()))
            .or_default()
            .entry(product.size)
            .or_default() += count;
    }
    breakdown
}

/// Stock per (sex, size), split by color.
pub fn stock_by_size(
    warehouse: &Warehouse,
    statuses: &BTreeMap<ProductId, i64>,
) -> StockBreakdown<Size, String> {
    let mut breakdown: StockBreakdown<Size, String> = BTreeMap::new();
    for (id, count) in statuses {
        let Some(product) = warehouse.product(id) else {
            continue;
        };
        *breakdown
            .entry((product.sex, product.size))
            .or_default()
            .entry(product.color.clone())
            .or_default() += count;
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{CurrencyCode, Money};
    use crate::warehouse::{Operation, Product, WarehouseBuilder};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn warehouse() -> Warehouse {
        let pln = CurrencyCode::new("PLN");
        let mut builder = WarehouseBuilder::new(pln.clone());
        builder.add_product(Product::new("A", "Hoodie", Size::M, Sex::Man, "black"));
        builder.add_product(Product::new("B", "Hoodie", Size::L, Sex::Man, "black"));
        builder.add_product(Product::new("C", "Hoodie", Size::L, Sex::Woman, "white"));
        builder.add_product(Product::new("D", "Hoodie", Size::S, Sex::Woman, "white"));
        let price = Money::from_major(10, pln);
        builder.add_operation(Operation::resupply(1, date(2017, 1, 10), "A", 10, price.clone()));
        builder.add_operation(Operation::sale(2, date(2017, 3, 1), "A", 4, price.clone()));
        builder.add_operation(Operation::resupply(3, date(2017, 2, 1), "B", 5, price.clone()));
        builder.add_operation(Operation::resupply(4, date(2017, 2, 1), "C", 7, price.clone()));
        builder.add_operation(Operation::sale(5, date(2019, 1, 1), "C", 2, price));
        builder.build().expect("valid warehouse")
    }

    #[test]
    fn product_without_operations_has_zero_stock() {
        let wh = warehouse();
        assert_eq!(stock_status(&wh, &ProductId::from("D"), date(2030, 1, 1)), 0);
    }

    #[test]
    fn as_of_date_is_inclusive() {
        let wh = warehouse();
        let a = ProductId::from("A");
        assert_eq!(stock_status(&wh, &a, date(2017, 2, 28)), 10);
        assert_eq!(stock_status(&wh, &a, date(2017, 3, 1)), 6);
        assert_eq!(stock_status(&wh, &a, date(2016, 1, 1)), 0);
    }

    #[test]
    fn statuses_cover_every_matched_product() {
        let wh = warehouse();
        let statuses = get_statuses(&wh, date(2018, 1, 1), &ProductFilter::all()).unwrap();
        let values: Vec<_> = statuses.values().copied().collect();
        assert_eq!(values, vec![6, 5, 7, 0]);

        let women = ProductFilter::all().with_sexes([Sex::Woman]);
        let statuses = get_statuses(&wh, date(2020, 1, 1), &women).unwrap();
        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[&ProductId::from("C")], 5);
    }

    #[test]
    fn breakdowns_group_by_sex_and_axis() {
        let wh = warehouse();
        let statuses = all_statuses(&wh, date(2018, 1, 1));

        let by_color = stock_by_color(&wh, &statuses);
        let men_black = &by_color[&(Sex::Man, "black".to_string())];
        assert_eq!(men_black[&Size::M], 6);
        assert_eq!(men_black[&Size::L], 5);

        let by_size = stock_by_size(&wh, &statuses);
        assert_eq!(by_size[&(Sex::Woman, Size::L)]["white"], 7);
        assert_eq!(by_size[&(Sex::Woman, Size::S)]["white"], 0);
    }
}
