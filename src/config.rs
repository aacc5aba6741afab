//! Run configuration: carbon factor, growth rates, baseline and investment inputs
//!
//! Every field is optional in JSON; missing values fall back to the business plan defaults.

use crate::error::Result;
use crate::impact::{ImpactParameters, NationalBaseline};
use crate::projection::{GrowthRates, DEFAULT_GROWTH_RATE_PRIMARY, DEFAULT_GROWTH_RATE_SECONDARY};
use crate::records::DEFAULT_CARBON_SAVED_PER_KG_PET;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// kg CO2 saved per kg PET recycled (default: 2.0)
    #[serde(default = "default_carbon_factor")]
    pub carbon_saved_per_kg_pet: f64,

    /// Years to project beyond the base records (default: 5)
    #[serde(default = "default_years_to_add")]
    pub years_to_add: usize,

    /// Growth for transactions, costs, EBIT and tax (default: 27%)
    #[serde(default = "default_growth_primary")]
    pub growth_rate_primary: f64,

    /// Growth for PET volume and trash revenue (default: 12%)
    #[serde(default = "default_growth_secondary")]
    pub growth_rate_secondary: f64,

    #[serde(default)]
    pub baseline: NationalBaseline,

    #[serde(default)]
    pub investment: ImpactParameters,
}

fn default_carbon_factor() -> f64 { DEFAULT_CARBON_SAVED_PER_KG_PET }
fn default_years_to_add() -> usize { 5 }
fn default_growth_primary() -> f64 { DEFAULT_GROWTH_RATE_PRIMARY }
fn default_growth_secondary() -> f64 { DEFAULT_GROWTH_RATE_SECONDARY }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            carbon_saved_per_kg_pet: default_carbon_factor(),
            years_to_add: default_years_to_add(),
            growth_rate_primary: default_growth_primary(),
            growth_rate_secondary: default_growth_secondary(),
            baseline: NationalBaseline::default(),
            investment: ImpactParameters::default(),
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading run configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn growth(&self) -> GrowthRates {
        GrowthRates {
            primary: self.growth_rate_primary,
            secondary: self.growth_rate_secondary,
        }
    }
}
