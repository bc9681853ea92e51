use std::path::PathBuf;
use thiserror::Error;

use sortscale_metrics::{InsufficientDataError, SchemaError, SelectionError};

pub mod export;
pub mod loader;

/// Errors surfaced by the report pipeline.
///
/// Core errors pass through unchanged so callers can match on them; only the
/// file-level failures originate here.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    InsufficientData(#[from] InsufficientDataError),
}
