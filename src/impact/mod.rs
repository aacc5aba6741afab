//! Impact calculator: per-year environmental/financial report and investment estimates

mod report;
mod estimator;
mod calculator;

pub use report::{report, summarize, HorizonSummary, PeriodReport, PeriodReports, APP_TRANSACTION_INCOME, TRASH_RECYCLING_INCOME};
pub use estimator::{estimate_impact, ImpactParameters, ImpactResult, NationalBaseline, DEFAULT_CURRENT_GDP, DEFAULT_SDG_INDEX_SCORE};
pub use calculator::ImpactCalculator;
