//! Projection builder for extending yearly records with fixed growth rates

mod engine;

pub use engine::{extrapolate, next_period_label, GrowthRates, DEFAULT_GROWTH_RATE_PRIMARY, DEFAULT_GROWTH_RATE_SECONDARY};
