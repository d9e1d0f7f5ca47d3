//! Error types for series validation, threshold configuration and range queries.

use thiserror::Error;

/// Errors raised while validating inputs or issuing checked range queries.
///
/// Every variant is detected before bulk computation starts, so a matrix is
/// either fully built or not built at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PassageError {
    #[error("Empty input: a series needs at least one sample")]
    EmptyInput,

    #[error("Non-finite sample {value} at index {index}")]
    NonFiniteSample { index: usize, value: f64 },

    #[error("Invalid threshold {threshold}: {reason}")]
    InvalidThreshold { threshold: f64, reason: &'static str },

    #[error("Invalid threshold set: at least one threshold is required")]
    NoThresholds,

    #[error("Range [{start}, {end}] is out of bounds for a series of length {len}")]
    IndexOutOfRange { start: usize, end: usize, len: usize },
}

pub type PassageResult<T> = std::result::Result<T, PassageError>;
