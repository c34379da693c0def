use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Half-open date interval `[from, to)`.
///
/// A range whose `from` is not before `to` is degenerate: it contains no
/// date, so every aggregate over it is zero or empty.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date < self.to
    }

    pub fn is_degenerate(&self) -> bool {
        self.from >= self.to
    }

    /// January 1st of `year` up to January 1st of the next year.
    pub fn year(year: i32) -> Option<Self> {
        let from = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let to = NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
        Some(Self { from, to })
    }

    /// The `count` whole months before the month of `today`, oldest first.
    pub fn preceding_months(today: NaiveDate, count: i32) -> Vec<Self> {
        if count <= 0 {
            return Vec::new();
        }
        let current = month_index(today);
        (1..=count as i64)
            .rev()
            .filter_map(|back| {
                let index = current - back;
                Some(Self {
                    from: month_start(index)?,
                    to: month_start(index + 1)?,
                })
            })
            .collect()
    }
}

/// Months elapsed since January of year 0.
pub(crate) fn month_index(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}

pub(crate) fn month_start(index: i64) -> Option<NaiveDate> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}
