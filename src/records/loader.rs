//! Load yearly records from JSON or CSV
//!
//! Loading is all-or-nothing: the first malformed record aborts the load.

use super::{RawRecord, RawValue, YearRecord};
use crate::error::{ImpactError, Result};
use csv::Reader;
use log::{debug, info};
use std::path::Path;

/// Raw CSV row; empty cells deserialize to `None`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    period: String,
    transactions: Option<String>,
    transaction_revenue: Option<String>,
    trash_sold_kg: Option<String>,
    trash_revenue: Option<String>,
    fixed_cost: Option<String>,
    variable_cost: Option<String>,
    ebit: Option<String>,
    tax: Option<String>,
}

impl CsvRow {
    fn to_record(self) -> Result<YearRecord> {
        let cell = |v: Option<String>| v.map(RawValue::Text);
        let raw = RawRecord {
            transactions: cell(self.transactions),
            transaction_revenue: cell(self.transaction_revenue),
            trash_sold_kg: cell(self.trash_sold_kg),
            trash_revenue: cell(self.trash_revenue),
            fixed_cost: cell(self.fixed_cost),
            variable_cost: cell(self.variable_cost),
            ebit: cell(self.ebit),
            tax: cell(self.tax),
        };
        YearRecord::try_from_raw(self.period, &raw)
    }
}

/// Load records from a CSV file with a `period` column followed by the record fields
pub fn load_records_csv<P: AsRef<Path>>(path: P) -> Result<Vec<YearRecord>> {
    let path = path.as_ref();
    info!("Loading yearly records from {}", path.display());
    let reader = Reader::from_path(path)?;
    collect_csv(reader)
}

/// Load records from any CSV reader (e.g., string buffer)
pub fn load_records_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<YearRecord>> {
    collect_csv(Reader::from_reader(reader))
}

fn collect_csv<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<YearRecord>> {
    if !reader.headers()?.iter().any(|h| h.trim() == "period") {
        return Err(ImpactError::InvalidInput("CSV is missing the required 'period' column".to_string()));
    }

    let mut records = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let record = row.to_record()?;
        debug!("Loaded {}", record.period);
        records.push(record);
    }

    non_empty(records)
}

/// Load records from a JSON file holding an object of period label -> record
pub fn load_records_json<P: AsRef<Path>>(path: P) -> Result<Vec<YearRecord>> {
    let path = path.as_ref();
    info!("Loading yearly records from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    records_from_json_str(&text)
}

/// Parse a JSON object of period label -> record. Keys keep document order.
pub fn records_from_json_str(json: &str) -> Result<Vec<YearRecord>> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

    let records = map
        .into_iter()
        .map(|(period, value)| {
            let raw: RawRecord = serde_json::from_value(value)?;
            YearRecord::try_from_raw(period, &raw)
        })
        .collect::<Result<Vec<_>>>()?;

    non_empty(records)
}

/// Pick the loader by file extension (`.json`, anything else is read as CSV)
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<YearRecord>> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_records_json(path),
        _ => load_records_csv(path),
    }
}

fn non_empty(records: Vec<YearRecord>) -> Result<Vec<YearRecord>> {
    if records.is_empty() {
        return Err(ImpactError::InvalidInput("no yearly records found".to_string()));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
period,transactions,transaction_revenue,trash_sold_kg,trash_revenue,fixed_cost,variable_cost,ebit,tax
Year1,3500,1890000,2000,798000,1806500,358680,522820,104564
Year2,3920,2116800,2240,893760,1946900,401721,661939,
";

    #[test]
    fn test_load_csv_with_empty_cell() {
        let records = load_records_from_reader(CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].period, "Year1");
        assert_eq!(records[0].tax, 104_564.0);
        assert_eq!(records[1].transactions, 3920);
        assert_eq!(records[1].tax, 0.0);
    }

    #[test]
    fn test_csv_bad_cell_aborts_load() {
        let csv = "\
period,transactions,transaction_revenue,trash_sold_kg,trash_revenue,fixed_cost,variable_cost,ebit,tax
Year1,3500,1890000,2000,798000,1806500,358680,522820,104564
Year2,many,2116800,2240,893760,1946900,401721,661939,132388
";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "transactions", .. }));
    }

    #[test]
    fn test_json_keeps_document_order() {
        let json = r#"{
            "Year2": {"transactions": 3920, "trash_sold_kg": 2240},
            "Year1": {"transactions": "3500", "trash_sold_kg": 2000, "tax": 104564}
        }"#;

        let records = records_from_json_str(json).unwrap();

        assert_eq!(records[0].period, "Year2");
        assert_eq!(records[1].period, "Year1");
        assert_eq!(records[1].transactions, 3500);
        assert_eq!(records[0].ebit, 0.0);
    }

    #[test]
    fn test_json_missing_required_field() {
        let json = r#"{"Year1": {"trash_sold_kg": 2000}}"#;
        let err = records_from_json_str(json).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert!(matches!(records_from_json_str("{}"), Err(ImpactError::InvalidInput(_))));
    }

    #[test]
    fn test_csv_without_period_column_is_invalid() {
        let csv = "transactions,trash_sold_kg\n3500,2000\n";
        let err = load_records_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImpactError::InvalidInput(ref msg) if msg.contains("period")));
    }

    #[test]
    fn test_json_non_scalar_value_fails_conversion() {
        let json = r#"{"Year1": {"transactions": true, "trash_sold_kg": 2000}}"#;
        let err = records_from_json_str(json).unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "transactions", .. }));

        let json = r#"{"Year1": {"transactions": 3500, "trash_sold_kg": 2000, "tax": [1, 2]}}"#;
        let err = records_from_json_str(json).unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "tax", .. }));
    }

    #[test]
    fn test_json_count_too_large_fails_conversion() {
        let json = r#"{"Year1": {"transactions": 1e20, "trash_sold_kg": 2000}}"#;
        let err = records_from_json_str(json).unwrap_err();
        assert!(matches!(err, ImpactError::ValueConversion { field: "transactions", .. }));
    }
}
