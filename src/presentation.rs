//! Text and CSV rendering of records, period reports and impact estimates
//!
//! Money and mass use 2 decimals, percentages use 6.

use crate::error::Result;
use crate::impact::{HorizonSummary, ImpactParameters, ImpactResult, PeriodReport};
use crate::records::YearRecord;
use serde::Serialize;
use std::io::Write;

pub const LOCAL_CURRENCY: &str = "Baht";
pub const FOREIGN_CURRENCY: &str = "USD";

/// Words rendered fully upper-case in labels
const ACRONYMS: [&str; 4] = ["ebit", "gdp", "pet", "sdg"];

/// Human-readable label from a field name: "trash_recycling_income" -> "Trash Recycling Income"
pub fn title_case(field: &str) -> String {
    field
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            if ACRONYMS.contains(&word.to_ascii_lowercase().as_str()) {
                return word.to_ascii_uppercase();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn money_line<W: Write>(out: &mut W, field: &str, amount: f64) -> Result<()> {
    writeln!(out, "{}: {:.2} {}", title_case(field), amount, LOCAL_CURRENCY)?;
    Ok(())
}

/// Projected-data block for one record (revenues, costs and profit)
pub fn write_projected_record<W: Write>(out: &mut W, record: &YearRecord) -> Result<()> {
    writeln!(out, "{} Data:", record.period)?;
    writeln!(out, "{}: {}", title_case("transactions"), record.transactions)?;
    money_line(out, "transaction_revenue", record.transaction_revenue)?;
    money_line(out, "trash_revenue", record.trash_revenue)?;
    money_line(out, "total_revenue", record.total_revenue())?;
    money_line(out, "fixed_cost", record.fixed_cost)?;
    money_line(out, "variable_cost", record.variable_cost)?;
    money_line(out, "ebit", record.ebit)?;
    money_line(out, "tax", record.tax)?;
    money_line(out, "total_cost", record.total_cost())?;
    money_line(out, "net_income", record.net_income())?;
    writeln!(out)?;
    Ok(())
}

/// Environmental and financial block for one period
pub fn write_period_report<W: Write>(out: &mut W, report: &PeriodReport) -> Result<()> {
    writeln!(out, "Year: {}", report.period)?;
    writeln!(out, "{}: {}", title_case("transactions"), report.transactions)?;
    writeln!(out, "Total PET Collected Annually: {:.2} kg", report.total_pet_collected_kg)?;
    writeln!(out, "Carbon Offset Annually: {:.2} tonnes", report.carbon_offset_tonnes)?;
    for (source, income) in &report.revenue_sources {
        money_line(out, source, *income)?;
    }
    money_line(out, "fixed_cost", report.fixed_cost)?;
    money_line(out, "variable_cost", report.variable_cost)?;
    money_line(out, "ebit", report.ebit)?;
    money_line(out, "tax", report.tax)?;
    money_line(out, "total_cost", report.total_cost)?;
    money_line(out, "net_income", report.net_income)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &HorizonSummary) -> Result<()> {
    writeln!(out, "Summary ({} periods):", summary.periods)?;
    writeln!(out, "  Total Transactions: {}", summary.total_transactions)?;
    writeln!(out, "  Total PET Collected: {:.2} kg", summary.total_pet_collected_kg)?;
    writeln!(out, "  Total Carbon Offset: {:.2} tonnes", summary.total_carbon_offset_tonnes)?;
    writeln!(out, "  Total Revenue: {:.2} {}", summary.total_revenue, LOCAL_CURRENCY)?;
    writeln!(out, "  Total Cost: {:.2} {}", summary.total_cost, LOCAL_CURRENCY)?;
    writeln!(out, "  Total Net Income: {:.2} {}", summary.total_net_income, LOCAL_CURRENCY)?;
    writeln!(out)?;
    Ok(())
}

/// Inputs and results of one investment estimate
pub fn write_impact<W: Write>(out: &mut W, params: &ImpactParameters, result: &ImpactResult) -> Result<()> {
    writeln!(
        out,
        "Investment: {} {} ({:.2} {})",
        params.investment_amount, FOREIGN_CURRENCY, result.investment_local, LOCAL_CURRENCY
    )?;
    writeln!(out, "Estimated GDP Increase: {:.2} {}", result.gdp_increase, LOCAL_CURRENCY)?;
    writeln!(out, "New GDP: {:.2} {}", result.new_gdp, LOCAL_CURRENCY)?;
    writeln!(out, "GDP Change Percentage: {:.6}%", result.gdp_change_percent)?;
    writeln!(out, "Estimated SDG Index Score Improvement: {:.2}", result.sdg_improvement)?;
    writeln!(out, "New SDG Index Score: {:.2}", result.new_sdg_index_score)?;
    writeln!(out, "SDG Index Score Change Percentage: {:.6}%", result.sdg_change_percent)?;
    Ok(())
}

/// Flat CSV row for a period report
#[derive(Debug, Serialize)]
struct ReportCsvRow<'a> {
    period: &'a str,
    transactions: u64,
    total_pet_collected_kg: String,
    carbon_offset_tonnes: String,
    app_transaction_income: String,
    trash_recycling_income: String,
    fixed_cost: String,
    variable_cost: String,
    ebit: String,
    tax: String,
    total_cost: String,
    net_income: String,
}

fn two_dp(v: f64) -> String {
    format!("{:.2}", v)
}

/// Write one CSV row per period report, with a header
pub fn write_report_csv<W, I>(out: W, reports: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = PeriodReport>,
{
    let mut writer = csv::Writer::from_writer(out);

    for r in reports {
        let source = |key: &str| two_dp(r.revenue_sources.get(key).copied().unwrap_or(0.0));
        writer.serialize(ReportCsvRow {
            period: &r.period,
            transactions: r.transactions,
            total_pet_collected_kg: two_dp(r.total_pet_collected_kg),
            carbon_offset_tonnes: two_dp(r.carbon_offset_tonnes),
            app_transaction_income: source(crate::impact::APP_TRANSACTION_INCOME),
            trash_recycling_income: source(crate::impact::TRASH_RECYCLING_INCOME),
            fixed_cost: two_dp(r.fixed_cost),
            variable_cost: two_dp(r.variable_cost),
            ebit: two_dp(r.ebit),
            tax: two_dp(r.tax),
            total_cost: two_dp(r.total_cost),
            net_income: two_dp(r.net_income),
        })?;
    }

    writer.flush()?;
    Ok(())
}
