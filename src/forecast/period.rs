use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};

const MONTH_LABELS: [&str; 12] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];
const QUARTER_LABELS: [&str; 4] = ["I", "II", "III", "IV"];

/// Length of one aggregation period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    Monthly,
    Quarterly,
}

impl Granularity {
    /// Seasonal slots in one yearly cycle.
    pub fn slots(self) -> usize {
        match self {
            Granularity::Monthly => 12,
            Granularity::Quarterly => 4,
        }
    }

    fn months_per_slot(self) -> u32 {
        match self {
            Granularity::Monthly => 1,
            Granularity::Quarterly => 3,
        }
    }

    /// Zero-based seasonal slot of a calendar date.
    pub fn slot_of(self, date: NaiveDate) -> usize {
        (date.month0() / self.months_per_slot()) as usize
    }

    /// Label of a zero-based slot: `1`..`12` for months, `I`..`IV` for quarters.
    pub fn slot_label(self, slot: usize) -> &'static str {
        let labels: &[&'static str] = match self {
            Granularity::Monthly => &MONTH_LABELS,
            Granularity::Quarterly => &QUARTER_LABELS,
        };
        labels.get(slot).copied().unwrap_or("?")
    }
}

/// One month or quarter, stored as a running index `year * slots + slot`.
///
/// Consecutive periods differ by exactly one index, which keeps period keys
/// strictly increasing across year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    granularity: Granularity,
    index: i64,
}

impl Period {
    pub fn new(granularity: Granularity, year: i32, slot: usize) -> Self {
        let slots = granularity.slots() as i64;
        Self {
            granularity,
            index: year as i64 * slots + (slot as i64).rem_euclid(slots),
        }
    }

    pub fn containing(date: NaiveDate, granularity: Granularity) -> Self {
        Self::new(granularity, date.year(), granularity.slot_of(date))
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn year(&self) -> i32 {
        self.index.div_euclid(self.granularity.slots() as i64) as i32
    }

    /// Zero-based seasonal slot.
    pub fn slot(&self) -> usize {
        self.index.rem_euclid(self.granularity.slots() as i64) as usize
    }

    pub fn label(&self) -> &'static str {
        self.granularity.slot_label(self.slot())
    }

    pub fn offset(&self, steps: i64) -> Self {
        Self {
            granularity: self.granularity,
            index: self.index + steps,
        }
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    /// Every period from `first` to `last`, inclusive.
    pub fn span(first: Period, last: Period) -> Vec<Period> {
        (first.index..=last.index)
            .map(|index| Period {
                granularity: first.granularity,
                index,
            })
            .collect()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.label(), self.year())
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
