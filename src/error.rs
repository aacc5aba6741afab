//! Error taxonomy shared by the loaders, the projection builder and the impact calculator

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImpactError {
    /// Required field missing, or an empty collection where one is required
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A field holds a value that cannot be read as its numeric type
    #[error("cannot convert {field} value {value:?} to {expected}")]
    ValueConversion {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A baseline denominator is zero
    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImpactError>;
