//! Investment impact on national GDP and SDG Index Score

use crate::error::{ImpactError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Thailand GDP (Baht), September 2024
pub const DEFAULT_CURRENT_GDP: f64 = 49_276_000_000_000.0;

/// Thailand SDG Index Score, Sustainable Development Report 2024
pub const DEFAULT_SDG_INDEX_SCORE: f64 = 74.67;

/// Reference national figures an estimate is measured against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NationalBaseline {
    /// GDP in local currency (Baht)
    pub current_gdp: f64,
    /// SDG Index Score, roughly 0-100
    pub current_sdg_index_score: f64,
}

impl Default for NationalBaseline {
    fn default() -> Self {
        Self {
            current_gdp: DEFAULT_CURRENT_GDP,
            current_sdg_index_score: DEFAULT_SDG_INDEX_SCORE,
        }
    }
}

/// Inputs to one investment estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactParameters {
    /// Investment in foreign currency (USD)
    pub investment_amount: f64,
    /// Local currency units per foreign unit
    pub exchange_rate: f64,
    /// SDG Index points gained per million local currency invested
    pub sdg_impact_factor: f64,
    /// Fractional GDP gain per local currency unit invested
    pub gdp_multiplier: f64,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            investment_amount: 1_000_000.0,
            exchange_rate: 33.69,
            sdg_impact_factor: 0.01,
            gdp_multiplier: 0.0001,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactResult {
    pub investment_local: f64,
    pub gdp_increase: f64,
    pub new_gdp: f64,
    pub gdp_change_percent: f64,
    pub sdg_improvement: f64,
    pub new_sdg_index_score: f64,
    pub sdg_change_percent: f64,
}

impl ImpactResult {
    /// Fails when the inputs were large enough to overflow any field
    fn check_finite(&self) -> Result<()> {
        check_finite("investment_local", self.investment_local)?;
        check_finite("gdp_increase", self.gdp_increase)?;
        check_finite("new_gdp", self.new_gdp)?;
        check_finite("gdp_change_percent", self.gdp_change_percent)?;
        check_finite("sdg_improvement", self.sdg_improvement)?;
        check_finite("new_sdg_index_score", self.new_sdg_index_score)?;
        check_finite("sdg_change_percent", self.sdg_change_percent)
    }

    /// Baseline as it would stand after this investment. Estimates never
    /// update a baseline on their own; chain this explicitly to compound.
    pub fn updated_baseline(&self) -> NationalBaseline {
        NationalBaseline {
            current_gdp: self.new_gdp,
            current_sdg_index_score: self.new_sdg_index_score,
        }
    }
}

/// Estimate GDP and SDG Index change from an investment against a fixed baseline
pub fn estimate_impact(baseline: &NationalBaseline, params: &ImpactParameters) -> Result<ImpactResult> {
    check_finite("current_gdp", baseline.current_gdp)?;
    check_finite("current_sdg_index_score", baseline.current_sdg_index_score)?;
    check_finite("investment_amount", params.investment_amount)?;
    check_finite("exchange_rate", params.exchange_rate)?;
    check_finite("sdg_impact_factor", params.sdg_impact_factor)?;
    check_finite("gdp_multiplier", params.gdp_multiplier)?;

    if baseline.current_gdp == 0.0 {
        return Err(ImpactError::DivisionByZero("current_gdp"));
    }
    if baseline.current_sdg_index_score == 0.0 {
        return Err(ImpactError::DivisionByZero("current_sdg_index_score"));
    }

    let investment_local = params.investment_amount * params.exchange_rate;
    debug!("Investment {} -> {:.2} local", params.investment_amount, investment_local);

    let gdp_increase = investment_local * params.gdp_multiplier;
    let new_gdp = baseline.current_gdp + gdp_increase;
    let gdp_change_percent = gdp_increase / baseline.current_gdp * 100.0;

    let sdg_improvement = investment_local / 1_000_000.0 * params.sdg_impact_factor;
    let new_sdg_index_score = baseline.current_sdg_index_score + sdg_improvement;
    let sdg_change_percent = sdg_improvement / baseline.current_sdg_index_score * 100.0;

    let result = ImpactResult {
        investment_local,
        gdp_increase,
        new_gdp,
        gdp_change_percent,
        sdg_improvement,
        new_sdg_index_score,
        sdg_change_percent,
    };
    result.check_finite()?;
    Ok(result)
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ImpactError::InvalidInput(format!("{} must be finite, got {}", name, value)))
    }
}
