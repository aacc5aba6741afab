//! PET Impact - projections for a PET recycling incentive business
//!
//! This library provides:
//! - Yearly financial records with validation and JSON/CSV loading
//! - Multi-year extrapolation with fixed growth rates
//! - Per-year PET collected, carbon offset and profit breakdown
//! - Investment impact estimates on national GDP and SDG Index Score

pub mod error;
pub mod records;
pub mod projection;
pub mod impact;
pub mod presentation;
pub mod config;

// Re-export commonly used types
pub use error::{ImpactError, Result};
pub use records::{YearRecord, RawRecord, base_dataset};
pub use projection::{extrapolate, GrowthRates};
pub use impact::{
    estimate_impact, report, HorizonSummary, ImpactCalculator, ImpactParameters, ImpactResult,
    NationalBaseline, PeriodReport,
};
pub use config::RunConfig;
