//! Projection builder: extends the base years by applying fixed growth rates

use crate::error::{ImpactError, Result};
use crate::records::YearRecord;
use log::debug;
use serde::{Deserialize, Serialize};

/// Default year-over-year growth for transactions and everything scaled with them (27%)
pub const DEFAULT_GROWTH_RATE_PRIMARY: f64 = 0.27;

/// Default year-over-year growth for PET volume and trash revenue (12%)
pub const DEFAULT_GROWTH_RATE_SECONDARY: f64 = 0.12;

/// Fractional growth rates applied per projected year (0.27 = 27%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRates {
    /// Applies to transactions, transaction revenue, costs, EBIT and tax
    pub primary: f64,
    /// Applies to PET sold and trash revenue
    pub secondary: f64,
}

impl Default for GrowthRates {
    fn default() -> Self {
        Self {
            primary: DEFAULT_GROWTH_RATE_PRIMARY,
            secondary: DEFAULT_GROWTH_RATE_SECONDARY,
        }
    }
}

impl GrowthRates {
    /// Rates must be finite and no lower than -1 (-100%), so non-negative
    /// fields stay non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, rate) in [("growth_rate_primary", self.primary), ("growth_rate_secondary", self.secondary)] {
            if !rate.is_finite() || rate < -1.0 {
                return Err(ImpactError::InvalidInput(format!(
                    "{} must be a finite rate of at least -1.0, got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }

    /// Derive the next period from `prev`.
    ///
    /// Costs and profit grow with the primary rate, not the secondary one.
    pub fn next_year(&self, prev: &YearRecord, period: String) -> YearRecord {
        let p = 1.0 + self.primary;
        let s = 1.0 + self.secondary;

        YearRecord {
            period,
            // `as` saturates at u64::MAX
            transactions: (prev.transactions as f64 * p).floor() as u64,
            transaction_revenue: prev.transaction_revenue * p,
            trash_sold_kg: (prev.trash_sold_kg * s).floor(),
            trash_revenue: prev.trash_revenue * s,
            fixed_cost: prev.fixed_cost * p,
            variable_cost: prev.variable_cost * p,
            ebit: prev.ebit * p,
            tax: prev.tax * p,
        }
    }
}

/// Append `years_to_add` projected years to `base_records`.
///
/// Each new year derives only from the year immediately before it. The base
/// records are returned unchanged at the front of the output.
pub fn extrapolate(
    base_records: &[YearRecord],
    years_to_add: usize,
    growth: GrowthRates,
) -> Result<Vec<YearRecord>> {
    if base_records.is_empty() {
        return Err(ImpactError::InvalidInput(
            "cannot extrapolate from an empty set of base records".to_string(),
        ));
    }
    growth.validate()?;

    let mut records = Vec::with_capacity(base_records.len() + years_to_add);
    records.extend_from_slice(base_records);

    for _ in 0..years_to_add {
        // records is non-empty, checked above
        let prev = &records[records.len() - 1];
        let period = next_period_label(&prev.period, records.len() + 1);
        let next = growth.next_year(prev, period);
        debug!(
            "Projected {}: transactions={} trash_sold_kg={:.0}",
            next.period, next.transactions, next.trash_sold_kg
        );
        records.push(next);
    }

    Ok(records)
}

/// Label following `prev`: increments its trailing number ("Year5" -> "Year6"),
/// or falls back to `Year{position}` when there is none.
pub fn next_period_label(prev: &str, position: usize) -> String {
    let prefix = prev.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &prev[prefix.len()..];

    match digits.parse::<u64>().ok().and_then(|n| n.checked_add(1)) {
        Some(n) => format!("{}{}", prefix, n),
        None => format!("Year{}", position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::base_dataset;

    fn rates() -> GrowthRates {
        GrowthRates { primary: 0.27, secondary: 0.12 }
    }

    #[test]
    fn test_year1_to_year2() {
        let base = vec![base_dataset().remove(0)];
        let records = extrapolate(&base, 1, rates()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].period, "Year2");
        assert_eq!(records[1].transactions, 4445);
        assert_eq!(records[1].trash_sold_kg, 2240.0);
    }

    #[test]
    fn test_recurrence_holds_for_every_projected_year() {
        let base = base_dataset();
        let g = rates();
        let (p, s) = (1.0 + g.primary, 1.0 + g.secondary);
        let records = extrapolate(&base, 5, g).unwrap();

        assert_eq!(records.len(), 10);
        assert_eq!(&records[..5], &base[..]);

        for i in 5..records.len() {
            let prev = &records[i - 1];
            let cur = &records[i];
            assert_eq!(cur.period, format!("Year{}", i + 1));
            assert_eq!(cur.transactions, (prev.transactions as f64 * p).floor() as u64);
            assert_eq!(cur.trash_sold_kg, (prev.trash_sold_kg * s).floor());
            assert_eq!(cur.transaction_revenue, prev.transaction_revenue * p);
            assert_eq!(cur.trash_revenue, prev.trash_revenue * s);
            assert_eq!(cur.fixed_cost, prev.fixed_cost * p);
            assert_eq!(cur.variable_cost, prev.variable_cost * p);
            assert_eq!(cur.ebit, prev.ebit * p);
            assert_eq!(cur.tax, prev.tax * p);
        }
    }

    #[test]
    fn test_zero_years_returns_base() {
        let base = base_dataset();
        let records = extrapolate(&base, 0, rates()).unwrap();
        assert_eq!(records, base);
    }

    #[test]
    fn test_empty_base_is_invalid() {
        let err = extrapolate(&[], 3, rates()).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidInput(_)));

        assert!(extrapolate(&[], 0, rates()).is_err());
    }

    #[test]
    fn test_growth_below_minus_one_is_invalid() {
        let base = vec![base_dataset().remove(0)];

        let err = extrapolate(&base, 1, GrowthRates { primary: -1.5, secondary: -1.5 }).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidInput(ref msg) if msg.contains("growth_rate_primary")));

        let err = extrapolate(&base, 1, GrowthRates { primary: 0.27, secondary: f64::NAN }).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidInput(ref msg) if msg.contains("growth_rate_secondary")));
    }

    #[test]
    fn test_full_contraction_zeroes_every_field() {
        let base = vec![base_dataset().remove(0)];
        let records = extrapolate(&base, 1, GrowthRates { primary: -1.0, secondary: -1.0 }).unwrap();
        let next = &records[1];

        assert_eq!(next.transactions, 0);
        for value in [
            next.transaction_revenue,
            next.trash_sold_kg,
            next.trash_revenue,
            next.fixed_cost,
            next.variable_cost,
            next.ebit,
            next.tax,
        ] {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_next_period_label() {
        assert_eq!(next_period_label("Year5", 6), "Year6");
        assert_eq!(next_period_label("FY2029", 6), "FY2030");
        assert_eq!(next_period_label("launch", 2), "Year2");
        assert_eq!(next_period_label("P18446744073709551615", 4), "Year4");
    }
}
