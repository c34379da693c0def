use std::fmt;

use serde::Serialize;

/// How many forecast months current stock lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum SupplyCoverage {
    Months(u32),
    /// Stock outlasts every examined month.
    Beyond(u32),
    NoData,
}

impl fmt::Display for SupplyCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplyCoverage::Months(months) => write!(f, "{}", months),
            SupplyCoverage::Beyond(horizon) => write!(f, ">{}", horizon),
            SupplyCoverage::NoData => f.write_str("no data"),
        }
    }
}

/// Walks the monthly demand forecast until cumulative demand reaches `stock`.
pub fn supply_coverage(demand: &[f64], stock: i64, horizon: usize) -> SupplyCoverage {
    if stock <= 0 {
        return SupplyCoverage::Months(0);
    }
    if demand.is_empty() || horizon == 0 {
        return SupplyCoverage::NoData;
    }

    let mut remaining = stock as f64;
    for (month, units) in demand.iter().take(horizon).enumerate() {
        remaining -= units.max(0.0);
        if remaining <= 0.0 {
            return SupplyCoverage::Months(month as u32 + 1);
        }
    }
    SupplyCoverage::Beyond(horizon.min(demand.len()) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_months_until_stock_runs_out() {
        let demand = [3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(supply_coverage(&demand, 3, 6), SupplyCoverage::Months(1));
        assert_eq!(supply_coverage(&demand, 8, 6), SupplyCoverage::Months(3));
        assert_eq!(supply_coverage(&demand, 100, 6), SupplyCoverage::Beyond(6));
    }

    #[test]
    fn empty_stock_and_missing_demand() {
        assert_eq!(supply_coverage(&[1.0], 0, 6), SupplyCoverage::Months(0));
        assert_eq!(supply_coverage(&[1.0], -4, 6), SupplyCoverage::Months(0));
        assert_eq!(supply_coverage(&[], 5, 6), SupplyCoverage::NoData);
    }

    #[test]
    fn display_matches_report_format() {
        assert_eq!(SupplyCoverage::Months(2).to_string(), "2");
        assert_eq!(SupplyCoverage::Beyond(6).to_string(), ">6");
        assert_eq!(SupplyCoverage::NoData.to_string(), "no data");
    }
}
