//! Yearly financial records for the recycling incentive business

use crate::error::{ImpactError, Result};
use serde::{Deserialize, Serialize};

/// Default kg of CO2 saved per kg of PET recycled
pub const DEFAULT_CARBON_SAVED_PER_KG_PET: f64 = 2.0;

/// One period of business activity (e.g. "Year3")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Period label, e.g. "Year1"
    pub period: String,

    /// Number of app transactions in the period
    pub transactions: u64,

    /// Income from app transactions (Baht)
    pub transaction_revenue: f64,

    /// PET sold to recyclers (kg)
    pub trash_sold_kg: f64,

    /// Income from selling collected PET (Baht)
    pub trash_revenue: f64,

    pub fixed_cost: f64,
    pub variable_cost: f64,

    /// Earnings before interest and tax, may be negative
    pub ebit: f64,

    pub tax: f64,
}

impl YearRecord {
    pub fn total_revenue(&self) -> f64 {
        self.transaction_revenue + self.trash_revenue
    }

    pub fn total_cost(&self) -> f64 {
        self.fixed_cost + self.variable_cost + self.tax
    }

    pub fn net_income(&self) -> f64 {
        self.ebit - self.tax
    }

    /// Tonnes of CO2 offset by the PET collected in this period
    pub fn carbon_offset_tonnes(&self, carbon_saved_per_kg_pet: f64) -> f64 {
        self.trash_sold_kg * carbon_saved_per_kg_pet / 1000.0
    }

    /// Build a validated record from loosely typed input.
    ///
    /// `transactions` and `trash_sold_kg` are required; every monetary field
    /// defaults to 0 when absent.
    pub fn try_from_raw(period: impl Into<String>, raw: &RawRecord) -> Result<Self> {
        let period = period.into();

        let transactions = raw
            .transactions
            .as_ref()
            .ok_or_else(|| missing(&period, "transactions"))?
            .to_count("transactions")?;
        let trash_sold_kg = raw
            .trash_sold_kg
            .as_ref()
            .ok_or_else(|| missing(&period, "trash_sold_kg"))?
            .to_non_negative("trash_sold_kg")?;

        Ok(Self {
            transactions,
            trash_sold_kg,
            transaction_revenue: optional_amount(&raw.transaction_revenue, "transaction_revenue")?,
            trash_revenue: optional_amount(&raw.trash_revenue, "trash_revenue")?,
            fixed_cost: optional_amount(&raw.fixed_cost, "fixed_cost")?,
            variable_cost: optional_amount(&raw.variable_cost, "variable_cost")?,
            ebit: match &raw.ebit {
                Some(v) => v.to_amount("ebit")?,
                None => 0.0,
            },
            tax: optional_amount(&raw.tax, "tax")?,
            period,
        })
    }
}

fn missing(period: &str, field: &str) -> ImpactError {
    ImpactError::InvalidInput(format!("{}: required field '{}' is missing", period, field))
}

/// Non-negative amount, 0 when absent
fn optional_amount(value: &Option<RawValue>, field: &'static str) -> Result<f64> {
    match value {
        Some(v) => v.to_non_negative(field),
        None => Ok(0.0),
    }
}

/// A field value as it arrives from JSON or CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// Booleans, arrays or objects; never convertible
    Other(serde_json::Value),
}

impl RawValue {
    fn conversion_error(&self, field: &'static str, expected: &'static str) -> ImpactError {
        ImpactError::ValueConversion {
            field,
            value: self.to_string(),
            expected,
        }
    }

    /// Read as a non-negative integer count. Numbers truncate toward zero;
    /// text must be an integer literal.
    pub fn to_count(&self, field: &'static str) -> Result<u64> {
        const EXPECTED: &str = "non-negative integer";

        match self {
            // 2^64 is exact as f64; anything at or above it does not fit
            RawValue::Number(n) if n.is_finite() && n.trunc() >= 0.0 && n.trunc() < u64::MAX as f64 => {
                Ok(n.trunc() as u64)
            }
            RawValue::Text(s) => s.trim().parse::<u64>().map_err(|_| self.conversion_error(field, EXPECTED)),
            _ => Err(self.conversion_error(field, EXPECTED)),
        }
    }

    /// Read as a finite float of any sign
    pub fn to_amount(&self, field: &'static str) -> Result<f64> {
        let parsed = match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
            RawValue::Other(_) => None,
        };

        match parsed {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(self.conversion_error(field, "number")),
        }
    }

    /// Read as a finite float that is zero or greater
    pub fn to_non_negative(&self, field: &'static str) -> Result<f64> {
        match self.to_amount(field) {
            Ok(v) if v < 0.0 => Err(self.conversion_error(field, "non-negative number")),
            other => other,
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// Unvalidated record; any field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub transactions: Option<RawValue>,
    #[serde(default)]
    pub transaction_revenue: Option<RawValue>,
    #[serde(default)]
    pub trash_sold_kg: Option<RawValue>,
    #[serde(default)]
    pub trash_revenue: Option<RawValue>,
    #[serde(default)]
    pub fixed_cost: Option<RawValue>,
    #[serde(default)]
    pub variable_cost: Option<RawValue>,
    #[serde(default)]
    pub ebit: Option<RawValue>,
    #[serde(default)]
    pub tax: Option<RawValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn year1_raw() -> RawRecord {
        RawRecord {
            transactions: Some(3500.0.into()),
            transaction_revenue: Some(1_890_000.0.into()),
            trash_sold_kg: Some(2000.0.into()),
            trash_revenue: Some(798_000.0.into()),
            fixed_cost: Some(1_806_500.0.into()),
            variable_cost: Some(358_680.0.into()),
            ebit: Some(522_820.0.into()),
            tax: Some(104_564.0.into()),
        }
    }

    #[test]
    fn test_year1_derived_values() {
        let record = YearRecord::try_from_raw("Year1", &year1_raw()).unwrap();

        assert_eq!(record.transactions, 3500);
        assert_relative_eq!(record.carbon_offset_tonnes(DEFAULT_CARBON_SAVED_PER_KG_PET), 4.0);
        assert_relative_eq!(record.total_cost(), 2_269_744.0);
        assert_relative_eq!(record.net_income(), 418_256.0);
        assert_relative_eq!(record.total_revenue(), 2_688_000.0);
    }

    #[test]
    fn test_missing_tax_defaults_to_zero() {
        let mut raw = year1_raw();
        raw.tax = None;

        let record = YearRecord::try_from_raw("Year1", &raw).unwrap();

        assert_eq!(record.tax, 0.0);
        assert_relative_eq!(record.total_cost(), 1_806_500.0 + 358_680.0);
        assert_relative_eq!(record.net_income(), 522_820.0);
    }

    #[test]
    fn test_missing_required_field() {
        let mut raw = year1_raw();
        raw.trash_sold_kg = None;

        let err = YearRecord::try_from_raw("Year4", &raw).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidInput(ref msg) if msg.contains("trash_sold_kg")));
    }

    #[test]
    fn test_text_values_are_coerced() {
        let raw = RawRecord {
            transactions: Some(" 4445 ".into()),
            trash_sold_kg: Some("2240.5".into()),
            ebit: Some("-1200".into()),
            ..Default::default()
        };

        let record = YearRecord::try_from_raw("Year2", &raw).unwrap();

        assert_eq!(record.transactions, 4445);
        assert_eq!(record.trash_sold_kg, 2240.5);
        assert_eq!(record.ebit, -1200.0);
        assert_eq!(record.transaction_revenue, 0.0);
    }

    #[test]
    fn test_fractional_count_truncates() {
        assert_eq!(RawValue::Number(4445.9).to_count("transactions").unwrap(), 4445);
    }

    #[test]
    fn test_non_numeric_values_fail_conversion() {
        let mut raw = year1_raw();
        raw.transactions = Some("lots".into());
        let err = YearRecord::try_from_raw("Year1", &raw).unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "transactions", .. }));

        let mut raw = year1_raw();
        raw.fixed_cost = Some("n/a".into());
        let err = YearRecord::try_from_raw("Year1", &raw).unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "fixed_cost", .. }));

        assert!(RawValue::Number(-3.0).to_count("transactions").is_err());
        assert!(RawValue::Other(serde_json::Value::Bool(true)).to_amount("tax").is_err());
        assert!(RawValue::Text("12.5".into()).to_count("transactions").is_err());
    }

    #[test]
    fn test_count_beyond_u64_rejected() {
        let err = RawValue::Number(1e20).to_count("transactions").unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "transactions", .. }));
        assert!(RawValue::Number(u64::MAX as f64).to_count("transactions").is_err());
        assert_eq!(RawValue::Number(9.0e18).to_count("transactions").unwrap(), 9_000_000_000_000_000_000);
    }

    #[test]
    fn test_negative_amounts_rejected_except_ebit() {
        let mut raw = year1_raw();
        raw.trash_sold_kg = Some((-5.0).into());
        let err = YearRecord::try_from_raw("Year1", &raw).unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "trash_sold_kg", .. }));

        let mut raw = year1_raw();
        raw.variable_cost = Some("-1".into());
        let err = YearRecord::try_from_raw("Year1", &raw).unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "variable_cost", .. }));

        let mut raw = year1_raw();
        raw.ebit = Some((-250_000.0).into());
        let record = YearRecord::try_from_raw("Year1", &raw).unwrap();
        assert_eq!(record.ebit, -250_000.0);
        assert_relative_eq!(record.net_income(), -250_000.0 - 104_564.0);
    }
}
