//! Estimate an investment's effect on GDP and SDG Index Score
//!
//! Accepts inputs via environment variables:
//!   INVESTMENT_AMOUNT, EXCHANGE_RATE, SDG_IMPACT_FACTOR, GDP_MULTIPLIER,
//!   CURRENT_GDP, CURRENT_SDG_INDEX_SCORE
//! Prints JSON instead of text when run with --json

use anyhow::{Context, Result};
use pet_impact::{
    estimate_impact,
    presentation::write_impact,
    ImpactParameters, NationalBaseline,
};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

#[derive(Serialize)]
struct EstimateResponse {
    baseline: NationalBaseline,
    params: ImpactParameters,
    result: pet_impact::ImpactResult,
}

/// Read an f64 from the environment, falling back to `default` when unset
fn env_f64(name: &str, default: f64) -> Result<f64> {
    match env::var(name) {
        Ok(s) => s.trim().parse().with_context(|| format!("{} is not a number: {:?}", name, s)),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");

    let defaults = ImpactParameters::default();
    let params = ImpactParameters {
        investment_amount: env_f64("INVESTMENT_AMOUNT", defaults.investment_amount)?,
        exchange_rate: env_f64("EXCHANGE_RATE", defaults.exchange_rate)?,
        sdg_impact_factor: env_f64("SDG_IMPACT_FACTOR", defaults.sdg_impact_factor)?,
        gdp_multiplier: env_f64("GDP_MULTIPLIER", defaults.gdp_multiplier)?,
    };

    let default_baseline = NationalBaseline::default();
    let baseline = NationalBaseline {
        current_gdp: env_f64("CURRENT_GDP", default_baseline.current_gdp)?,
        current_sdg_index_score: env_f64("CURRENT_SDG_INDEX_SCORE", default_baseline.current_sdg_index_score)?,
    };

    let result = estimate_impact(&baseline, &params)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json_output {
        let response = EstimateResponse { baseline, params, result };
        serde_json::to_writer_pretty(&mut out, &response)?;
        writeln!(out)?;
    } else {
        write_impact(&mut out, &params, &result)?;
    }

    Ok(())
}
