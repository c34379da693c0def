#![allow(dead_code)]

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use warehouse_core::{
    currency::{CurrencyCode, Money},
    warehouse::{Category, Operation, Product, Sex, Size, Warehouse, WarehouseBuilder},
};

pub const CLOTHES: u32 = 1;
pub const TOPS: u32 = 2;
pub const HOODIES: u32 = 3;
pub const ACCESSORIES: u32 = 4;

/// Shared read-only warehouse: two years of resupplies and sales across
/// hoodies, t-shirts and caps.
pub static FIXTURE: Lazy<Warehouse> = Lazy::new(build_fixture);

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn pln(major: i64) -> Money {
    Money::from_major(major, CurrencyCode::new("PLN"))
}

fn catalogue(builder: &mut WarehouseBuilder) {
    builder.add_category(Category::new(CLOTHES, "Clothes"));
    builder.add_category(Category::new(TOPS, "Tops").with_parent(CLOTHES));
    builder.add_category(Category::new(HOODIES, "Hoodies").with_parent(TOPS));
    builder.add_category(Category::new(ACCESSORIES, "Accessories"));

    builder.add_product(
        Product::new("H-BLK-M", "Hoodie", Size::M, Sex::Man, "black").with_categories([HOODIES]),
    );
    builder.add_product(
        Product::new("H-BLK-L", "Hoodie", Size::L, Sex::Man, "black").with_categories([HOODIES]),
    );
    builder.add_product(
        Product::new("H-RED-S", "Hoodie", Size::S, Sex::Woman, "red").with_categories([HOODIES]),
    );
    builder.add_product(
        Product::new("T-WHT-M", "T-shirt", Size::M, Sex::Unisex, "white").with_categories([TOPS]),
    );
    builder.add_product(
        Product::new("CAP-GRN", "Cap", Size::OneSize, Sex::Unisex, "green")
            .with_categories([ACCESSORIES]),
    );
}

fn build_fixture() -> Warehouse {
    let mut builder = WarehouseBuilder::new(CurrencyCode::new("PLN"));
    catalogue(&mut builder);
    for operation in fixture_operations() {
        builder.add_operation(operation);
    }
    builder.build().expect("fixture warehouse is valid")
}

/// Fixture catalogue with only the operations dated on or before `cutoff`.
pub fn fixture_until(cutoff: NaiveDate) -> Warehouse {
    let mut builder = WarehouseBuilder::new(CurrencyCode::new("PLN"));
    catalogue(&mut builder);
    for operation in fixture_operations()
        .into_iter()
        .filter(|operation| operation.date <= cutoff)
    {
        builder.add_operation(operation);
    }
    builder.build().expect("truncated fixture is valid")
}

fn fixture_operations() -> Vec<Operation> {
    let mut operations = vec![
        Operation::resupply(1, date(2016, 12, 20), "H-BLK-M", 60, pln(70)),
        Operation::resupply(2, date(2016, 12, 20), "H-BLK-L", 40, pln(70)),
        Operation::resupply(3, date(2016, 12, 20), "H-RED-S", 30, pln(70)),
        Operation::resupply(4, date(2016, 12, 20), "T-WHT-M", 80, pln(20)),
        Operation::resupply(5, date(2017, 6, 1), "CAP-GRN", 25, pln(15)),
        Operation::resupply(6, date(2018, 1, 15), "H-BLK-M", 30, pln(75)),
    ];
    let mut id = 100;
    for year in [2017, 2018] {
        for month in 1..=12 {
            // Winter months sell more hoodies.
            let hoodies = if month <= 2 || month >= 11 { 3 } else { 1 };
            operations.push(Operation::sale(id, date(year, month, 5), "H-BLK-M", hoodies, pln(140)));
            operations.push(Operation::sale(id + 1, date(year, month, 12), "T-WHT-M", 2, pln(45)));
            id += 2;
        }
    }
    operations.push(Operation::sale(id, date(2017, 8, 8), "H-RED-S", 4, pln(140)));
    operations.push(Operation::sale(id + 1, date(2017, 9, 9), "H-BLK-L", 5, pln(140)));
    operations.push(Operation::sale(id + 2, date(2018, 7, 7), "CAP-GRN", 6, pln(35)));
    operations
}
