//! Impact calculator holding a record set and a fixed national baseline
//!
//! Records and baseline are set once at construction; every report or
//! estimate is computed fresh from them.

use super::estimator::{estimate_impact, ImpactParameters, ImpactResult, NationalBaseline};
use super::report::{report, summarize, HorizonSummary, PeriodReports};
use crate::error::{ImpactError, Result};
use crate::records::{YearRecord, DEFAULT_CARBON_SAVED_PER_KG_PET};

/// Pre-loaded calculator for repeated reports and estimates
///
/// # Example
/// ```ignore
/// let records = extrapolate(&base_dataset(), 5, GrowthRates::default())?;
/// let calc = ImpactCalculator::new(records, NationalBaseline::default())?;
///
/// for period in calc.report() {
///     println!("{}: {:.2} t CO2", period.period, period.carbon_offset_tonnes);
/// }
/// let impact = calc.estimate_impact(&ImpactParameters::default())?;
/// ```
#[derive(Debug, Clone)]
pub struct ImpactCalculator {
    records: Vec<YearRecord>,
    carbon_saved_per_kg_pet: f64,
    baseline: NationalBaseline,
}

impl ImpactCalculator {
    /// Create a calculator with the default carbon factor (2.0 kg CO2 per kg PET)
    pub fn new(records: Vec<YearRecord>, baseline: NationalBaseline) -> Result<Self> {
        Self::with_carbon_factor(records, baseline, DEFAULT_CARBON_SAVED_PER_KG_PET)
    }

    pub fn with_carbon_factor(
        records: Vec<YearRecord>,
        baseline: NationalBaseline,
        carbon_saved_per_kg_pet: f64,
    ) -> Result<Self> {
        if records.is_empty() {
            return Err(ImpactError::InvalidInput("calculator needs at least one yearly record".to_string()));
        }
        if !carbon_saved_per_kg_pet.is_finite() || carbon_saved_per_kg_pet < 0.0 {
            return Err(ImpactError::InvalidInput(format!(
                "carbon_saved_per_kg_pet must be a non-negative number, got {}",
                carbon_saved_per_kg_pet
            )));
        }

        Ok(Self {
            records,
            carbon_saved_per_kg_pet,
            baseline,
        })
    }

    pub fn report(&self) -> PeriodReports<'_> {
        report(&self.records, self.carbon_saved_per_kg_pet)
    }

    pub fn summary(&self) -> HorizonSummary {
        summarize(self.report())
    }

    /// Estimate against the calculator's baseline, which is never modified
    pub fn estimate_impact(&self, params: &ImpactParameters) -> Result<ImpactResult> {
        estimate_impact(&self.baseline, params)
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn baseline(&self) -> &NationalBaseline {
        &self.baseline
    }

    pub fn carbon_saved_per_kg_pet(&self) -> f64 {
        self.carbon_saved_per_kg_pet
    }
}
