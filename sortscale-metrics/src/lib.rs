use thiserror::Error;

pub mod analyzer;
pub mod table;

pub use analyzer::{analyze, select_problem_size, ScalingPoint, ScalingSeries};
pub use table::{MetricsTable, Observation, RawRow};

/// Error types for loading rows into a [`MetricsTable`].
///
/// Row indices are 0-based positions in the input data (the header line of a
/// CSV source does not count).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("column {0:?} not found in input header")]
    MissingColumn(String),

    #[error("row {row}: missing field {field:?}")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: cannot parse field {field:?} value {value:?}")]
    NotNumeric { row: usize, field: String, value: String },

    #[error("row {row}: {field} must be positive (got {value})")]
    NonPositive { row: usize, field: &'static str, value: i64 },

    #[error("row {row}: time must be non-negative and finite (got {value})")]
    InvalidTime { row: usize, value: f64 },
}

/// Error types for problem-size selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("problem size {0} not present in the table")]
    UnknownProblemSize(u64),

    #[error("table contains no observations")]
    EmptyTable,
}

/// The chosen problem size matched zero observations.
///
/// Fatal for that problem size only; the caller may retry with another one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no observations for problem size {n}")]
pub struct InsufficientDataError {
    pub n: u64,
}
