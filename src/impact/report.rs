//! Per-period environmental and financial report

use crate::records::YearRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Revenue source key for app transaction income
pub const APP_TRANSACTION_INCOME: &str = "app_transaction_income";

/// Revenue source key for PET resale income
pub const TRASH_RECYCLING_INCOME: &str = "trash_recycling_income";

/// Environmental and financial figures for one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    pub period: String,
    pub transactions: u64,

    /// PET collected (kg); the amount sold is the amount collected
    pub total_pet_collected_kg: f64,

    pub carbon_offset_tonnes: f64,

    /// Revenue source name -> amount (Baht)
    pub revenue_sources: BTreeMap<String, f64>,

    pub fixed_cost: f64,
    pub variable_cost: f64,
    pub ebit: f64,
    pub tax: f64,
    pub total_cost: f64,
    pub net_income: f64,
}

impl PeriodReport {
    pub fn from_record(record: &YearRecord, carbon_saved_per_kg_pet: f64) -> Self {
        let mut revenue_sources = BTreeMap::new();
        revenue_sources.insert(APP_TRANSACTION_INCOME.to_string(), record.transaction_revenue);
        revenue_sources.insert(TRASH_RECYCLING_INCOME.to_string(), record.trash_revenue);

        Self {
            period: record.period.clone(),
            transactions: record.transactions,
            total_pet_collected_kg: record.trash_sold_kg,
            carbon_offset_tonnes: record.carbon_offset_tonnes(carbon_saved_per_kg_pet),
            revenue_sources,
            fixed_cost: record.fixed_cost,
            variable_cost: record.variable_cost,
            ebit: record.ebit,
            tax: record.tax,
            total_cost: record.total_cost(),
            net_income: record.net_income(),
        }
    }

    /// Sum over all revenue sources
    pub fn total_income(&self) -> f64 {
        self.revenue_sources.values().sum()
    }
}

/// Lazy sequence of period reports. Nothing is cached: every call to
/// [`report`] recomputes from the records.
#[derive(Debug, Clone)]
pub struct PeriodReports<'a> {
    records: std::slice::Iter<'a, YearRecord>,
    carbon_saved_per_kg_pet: f64,
}

impl Iterator for PeriodReports<'_> {
    type Item = PeriodReport;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|r| PeriodReport::from_record(r, self.carbon_saved_per_kg_pet))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for PeriodReports<'_> {}

/// Build reports for `records` in period order
pub fn report(records: &[YearRecord], carbon_saved_per_kg_pet: f64) -> PeriodReports<'_> {
    PeriodReports {
        records: records.iter(),
        carbon_saved_per_kg_pet,
    }
}

/// Totals over a whole projection horizon
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HorizonSummary {
    pub periods: usize,
    pub total_transactions: u64,
    pub total_pet_collected_kg: f64,
    pub total_carbon_offset_tonnes: f64,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_net_income: f64,
}

pub fn summarize<I>(reports: I) -> HorizonSummary
where
    I: IntoIterator<Item = PeriodReport>,
{
    reports.into_iter().fold(HorizonSummary::default(), |mut acc, r| {
        acc.periods += 1;
        acc.total_transactions = acc.total_transactions.saturating_add(r.transactions);
        acc.total_pet_collected_kg += r.total_pet_collected_kg;
        acc.total_carbon_offset_tonnes += r.carbon_offset_tonnes;
        acc.total_revenue += r.total_income();
        acc.total_cost += r.total_cost;
        acc.total_net_income += r.net_income;
        acc
    })
}
