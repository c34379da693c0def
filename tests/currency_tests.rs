use warehouse_core::{
    currency::{CurrencyCode, Money},
    WarehouseError,
};

#[test]
fn parses_and_formats_amounts() {
    let pln = CurrencyCode::new("pln");
    let price = Money::parse("119,99", pln.clone()).unwrap();
    assert_eq!(price.minor(), 11_999);
    assert_eq!(price.to_string(), "119.99 PLN");
    assert_eq!(price.times(3), Money::from_minor(35_997, pln));
}

#[test]
fn zero_minor_unit_currencies() {
    let yen = CurrencyCode::new("JPY");
    assert_eq!(Money::parse("1500", yen.clone()).unwrap(), Money::from_major(1500, yen.clone()));
    assert!(matches!(
        Money::parse("15.5", yen),
        Err(WarehouseError::InvalidAmount(_))
    ));
}

#[test]
fn sums_start_from_zero_of_the_currency() {
    let eur = CurrencyCode::new("EUR");
    let total = [250, 1_000, -50]
        .into_iter()
        .map(|minor| Money::from_minor(minor, eur.clone()))
        .fold(Money::zero(eur.clone()), |acc, amount| acc + amount);
    assert_eq!(total, Money::from_minor(1_200, eur));
}
