//! Built-in base dataset: the first five operating years of the business plan

use super::YearRecord;

/// (transactions, transaction_revenue, trash_sold_kg, trash_revenue,
///  fixed_cost, variable_cost, ebit, tax)
const BASE_YEARS: [(u64, f64, f64, f64, f64, f64, f64, f64); 5] = [
    (3500, 1_890_000.0, 2000.0, 798_000.0, 1_806_500.0, 358_680.0, 522_820.0, 104_564.0),
    (3920, 2_116_800.0, 2240.0, 893_760.0, 1_946_900.0, 401_721.0, 661_939.0, 132_388.0),
    (4390, 2_370_600.0, 2509.0, 1_001_091.0, 2_181_340.0, 449_945.0, 740_406.0, 148_081.0),
    (4917, 2_655_180.0, 2810.0, 1_121_190.0, 2_351_224.0, 503_932.0, 921_214.0, 184_243.0),
    (5507, 2_973_780.0, 3147.0, 1_255_653.0, 2_538_096.0, 564_377.0, 1_126_960.0, 225_392.0),
];

/// Build the Year1..Year5 records. Constructed fresh on every call.
pub fn base_dataset() -> Vec<YearRecord> {
    BASE_YEARS
        .iter()
        .enumerate()
        .map(
            |(i, &(transactions, transaction_revenue, trash_sold_kg, trash_revenue, fixed_cost, variable_cost, ebit, tax))| {
                YearRecord {
                    period: format!("Year{}", i + 1),
                    transactions,
                    transaction_revenue,
                    trash_sold_kg,
                    trash_revenue,
                    fixed_cost,
                    variable_cost,
                    ebit,
                    tax,
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dataset() {
        let records = base_dataset();

        assert_eq!(records.len(), 5);
        assert_eq!(records[0].period, "Year1");
        assert_eq!(records[4].period, "Year5");
        assert_eq!(records[2].trash_sold_kg, 2509.0);
        assert_eq!(records[4].ebit, 1_126_960.0);
    }
}
