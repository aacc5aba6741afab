//! Yearly record data model, validation and loading

mod data;
mod base;
pub mod loader;

pub use data::{YearRecord, RawRecord, RawValue, DEFAULT_CARBON_SAVED_PER_KG_PET};
pub use base::base_dataset;
pub use loader::{load_records, load_records_csv, load_records_json, load_records_from_reader, records_from_json_str};
