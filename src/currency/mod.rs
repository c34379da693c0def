use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::WarehouseError;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn minor_units(&self) -> u8 {
        minor_units_for(self.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("PLN")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

fn minor_factor(code: &CurrencyCode) -> i64 {
    10_i64.pow(code.minor_units() as u32)
}

/// Exact currency amount stored as integer minor units.
///
/// Amounts of different currencies are never combined inside one warehouse;
/// the builder rejects operations priced in a foreign currency. The `+`, `+=`
/// and `-` operators only assert the match in debug builds and keep the left
/// operand's currency otherwise. Use [`Money::checked_add`] and
/// [`Money::checked_sub`] for amounts of unknown origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor: i64,
    currency: CurrencyCode,
}

impl Money {
    pub fn zero(currency: CurrencyCode) -> Self {
        Self { minor: 0, currency }
    }

    pub fn from_minor(minor: i64, currency: CurrencyCode) -> Self {
        Self { minor, currency }
    }

    pub fn from_major(major: i64, currency: CurrencyCode) -> Self {
        let minor = major * minor_factor(&currency);
        Self { minor, currency }
    }

    /// Parses a decimal amount such as `120`, `120.5` or `-3,99`.
    pub fn parse(text: &str, currency: CurrencyCode) -> Result<Self, WarehouseError> {
        let invalid = || WarehouseError::InvalidAmount(text.to_string());
        let trimmed = text.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (whole, fraction) = match body.find(|ch| ch == '.' || ch == ',') {
            Some(pos) => (&body[..pos], &body[pos + 1..]),
            None => (body, ""),
        };
        if whole.is_empty() || !whole.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }
        let units = currency.minor_units() as usize;
        if fraction.len() > units {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let padded = format!("{:0<width$}", fraction, width = units);
        let fraction: i64 = if padded.is_empty() {
            0
        } else {
            padded.parse().map_err(|_| invalid())?
        };
        let magnitude = whole
            .checked_mul(minor_factor(&currency))
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(invalid)?;
        let minor = if negative { -magnitude } else { magnitude };
        Ok(Self { minor, currency })
    }

    pub fn minor(&self) -> i64 {
        self.minor
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.minor == 0
    }

    /// Value of `quantity` units priced at `self`.
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            minor: self.minor * quantity as i64,
            currency: self.currency.clone(),
        }
    }

    pub fn checked_add(&self, rhs: &Money) -> Result<Money, WarehouseError> {
        self.ensure_same_currency(rhs)?;
        Ok(Money {
            minor: self.minor + rhs.minor,
            currency: self.currency.clone(),
        })
    }

    pub fn checked_sub(&self, rhs: &Money) -> Result<Money, WarehouseError> {
        self.ensure_same_currency(rhs)?;
        Ok(Money {
            minor: self.minor - rhs.minor,
            currency: self.currency.clone(),
        })
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), WarehouseError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(WarehouseError::CurrencyMismatch {
                expected: self.currency.to_string(),
                found: other.currency.to_string(),
            })
        }
    }

    /// Lossy conversion to major units, used only at the forecasting boundary.
    pub fn to_major_f64(&self) -> f64 {
        self.minor as f64 / minor_factor(&self.currency) as f64
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        debug_assert_eq!(self.currency, rhs.currency);
        Money {
            minor: self.minor + rhs.minor,
            currency: self.currency,
        }
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        debug_assert_eq!(self.currency, rhs.currency);
        self.minor += rhs.minor;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        debug_assert_eq!(self.currency, rhs.currency);
        Money {
            minor: self.minor - rhs.minor,
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.currency.minor_units() as usize;
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        if units == 0 {
            return write!(f, "{}{} {}", sign, abs, self.currency);
        }
        let factor = 10_u64.pow(units as u32);
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            abs / factor,
            abs % factor,
            self.currency,
            width = units
        )
    }
}
