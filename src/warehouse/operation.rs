use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::product::ProductId;
use crate::currency::Money;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct OperationId(pub u64);

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    Resupply,
    Sale,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationKind::Resupply => "RESUPPLY",
            OperationKind::Sale => "SALE",
        };
        f.write_str(label)
    }
}

/// A dated stock movement of one product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Operation {
    pub id: OperationId,
    pub date: NaiveDate,
    pub kind: OperationKind,
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl Operation {
    pub fn new(
        id: u64,
        date: NaiveDate,
        kind: OperationKind,
        product_id: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            id: OperationId(id),
            date,
            kind,
            product_id: ProductId::new(product_id),
            quantity,
            unit_price,
        }
    }

    pub fn resupply(
        id: u64,
        date: NaiveDate,
        product_id: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self::new(id, date, OperationKind::Resupply, product_id, quantity, unit_price)
    }

    pub fn sale(
        id: u64,
        date: NaiveDate,
        product_id: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self::new(id, date, OperationKind::Sale, product_id, quantity, unit_price)
    }

    pub fn is_sale(&self) -> bool {
        self.kind == OperationKind::Sale
    }

    pub fn total_value(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    /// Effect on stock-on-hand: positive for resupplies, negative for sales.
    pub fn stock_delta(&self) -> i64 {
        match self.kind {
            OperationKind::Resupply => self.quantity as i64,
            OperationKind::Sale => -(self.quantity as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyCode;

    #[test]
    fn total_value_multiplies_unit_price() {
        let date = NaiveDate::from_ymd_opt(2017, 6, 15).unwrap();
        let price = Money::from_major(120, CurrencyCode::new("PLN"));
        let sale = Operation::sale(2, date, "P1", 39, price);
        assert_eq!(sale.total_value(), Money::from_major(4680, CurrencyCode::new("PLN")));
        assert_eq!(sale.stock_delta(), -39);
        assert!(sale.is_sale());
    }
}
