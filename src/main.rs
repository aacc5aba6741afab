//! PET Impact CLI
//!
//! Projects the recycling business forward, prints the yearly environmental and
//! financial report, and estimates an investment's effect on GDP and SDG Index Score.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pet_impact::{
    config::RunConfig,
    impact::ImpactCalculator,
    presentation::{write_impact, write_period_report, write_projected_record, write_report_csv, write_summary},
    projection::extrapolate,
    records::{base_dataset, load_records},
};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pet_impact", version, about = "PET recycling projections and investment impact estimates")]
struct Cli {
    /// Base yearly records (.json or .csv); defaults to the built-in Year1..Year5 plan
    #[arg(long)]
    data: Option<PathBuf>,

    /// JSON run configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Years to project beyond the base records
    #[arg(long)]
    years: Option<usize>,

    /// Growth rate for transactions, costs, EBIT and tax (0.27 = 27%)
    #[arg(long)]
    growth_primary: Option<f64>,

    /// Growth rate for PET volume and trash revenue
    #[arg(long)]
    growth_secondary: Option<f64>,

    /// kg CO2 saved per kg PET recycled
    #[arg(long)]
    carbon_factor: Option<f64>,

    /// Also write the yearly report as CSV to this path
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Print a single JSON document instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    config: &'a RunConfig,
    periods: Vec<pet_impact::PeriodReport>,
    summary: pet_impact::HorizonSummary,
    impact: pet_impact::ImpactResult,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RunConfig::from_json_path(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(years) = cli.years {
        config.years_to_add = years;
    }
    if let Some(rate) = cli.growth_primary {
        config.growth_rate_primary = rate;
    }
    if let Some(rate) = cli.growth_secondary {
        config.growth_rate_secondary = rate;
    }
    if let Some(factor) = cli.carbon_factor {
        config.carbon_saved_per_kg_pet = factor;
    }

    let base = match &cli.data {
        Some(path) => load_records(path)
            .with_context(|| format!("failed to load records from {}", path.display()))?,
        None => base_dataset(),
    };
    info!("Projecting {} base periods forward {} years", base.len(), config.years_to_add);

    let records = extrapolate(&base, config.years_to_add, config.growth())?;
    let calculator = ImpactCalculator::with_carbon_factor(records, config.baseline, config.carbon_saved_per_kg_pet)?;
    let impact = calculator.estimate_impact(&config.investment)?;

    if let Some(path) = &cli.csv_out {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        write_report_csv(file, calculator.report())?;
        info!("Yearly report written to {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        let output = JsonOutput {
            config: &config,
            periods: calculator.report().collect(),
            summary: calculator.summary(),
            impact,
        };
        serde_json::to_writer_pretty(&mut out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    for record in calculator.records() {
        write_projected_record(&mut out, record)?;
    }
    for period in calculator.report() {
        write_period_report(&mut out, &period)?;
    }
    write_summary(&mut out, &calculator.summary())?;
    write_impact(&mut out, &config.investment, &impact)?;

    Ok(())
}
