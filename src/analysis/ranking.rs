use std::collections::BTreeMap;

use super::range::DateRange;
use crate::warehouse::{Product, Size, Warehouse};

/// Units sold per color, best sellers first. Equal quantities are ordered by
/// color name.
pub fn best_selling_colors(warehouse: &Warehouse, range: DateRange) -> Vec<(u64, String)> {
    rank_sales(warehouse, range, |product| product.color.clone())
}

/// Units sold per size, best sellers first. Equal quantities are ordered from
/// the smallest size up.
pub fn best_selling_sizes(warehouse: &Warehouse, range: DateRange) -> Vec<(u64, Size)> {
    rank_sales(warehouse, range, |product| product.size)
}

fn rank_sales<K, F>(warehouse: &Warehouse, range: DateRange, key: F) -> Vec<(u64, K)>
where
    K: Ord,
    F: Fn(&Product) -> K,
{
    let mut sold: BTreeMap<K, u64> = BTreeMap::new();
    for operation in warehouse
        .operations()
        .filter(|op| op.is_sale() && range.contains(op.date))
    {
        if let Some(product) = warehouse.product(&operation.product_id) {
            *sold.entry(key(product)).or_default() += operation.quantity as u64;
        }
    }
    let mut ranked: Vec<(u64, K)> = sold.into_iter().map(|(k, units)| (units, k)).collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    ranked
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::currency::{CurrencyCode, Money};
    use crate::warehouse::{Operation, Sex, WarehouseBuilder};

    fn date(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2017, m, 1).unwrap()
    }

    fn warehouse() -> Warehouse {
        let pln = CurrencyCode::new("PLN");
        let price = Money::from_major(5, pln.clone());
        let mut builder = WarehouseBuilder::new(pln);
        builder.add_product(Product::new("A", "Tee", Size::L, Sex::Man, "red"));
        builder.add_product(Product::new("B", "Tee", Size::S, Sex::Man, "blue"));
        builder.add_product(Product::new("C", "Tee", Size::S, Sex::Woman, "black"));
        builder.add_operation(Operation::sale(1, date(2), "A", 5, price.clone()));
        builder.add_operation(Operation::sale(2, date(3), "B", 5, price.clone()));
        builder.add_operation(Operation::sale(3, date(4), "C", 7, price.clone()));
        builder.add_operation(Operation::resupply(4, date(1), "A", 50, price));
        builder.build().expect("valid warehouse")
    }

    #[test]
    fn colors_sorted_by_quantity_then_name() {
        let wh = warehouse();
        let range = DateRange::new(date(1), date(12));
        assert_eq!(
            best_selling_colors(&wh, range),
            vec![
                (7, "black".to_string()),
                (5, "blue".to_string()),
                (5, "red".to_string())
            ]
        );
    }

    #[test]
    fn sizes_sorted_by_quantity_then_ordinal() {
        let wh = warehouse();
        let range = DateRange::new(date(1), date(12));
        assert_eq!(best_selling_sizes(&wh, range), vec![(12, Size::S), (5, Size::L)]);

        let range = DateRange::new(date(1), date(4));
        assert_eq!(best_selling_sizes(&wh, range), vec![(5, Size::S), (5, Size::L)]);
    }

    #[test]
    fn degenerate_range_is_empty() {
        let wh = warehouse();
        let range = DateRange::new(date(12), date(1));
        assert!(best_selling_colors(&wh, range).is_empty());
        assert!(best_selling_sizes(&wh, range).is_empty());
    }
}
