//! Error types shared by the loader, the inferencer and the view builder.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Input is not valid comma-separated text. No table is produced.
    #[error("Failed to parse CSV: {0}")]
    Parse(String),

    /// A derived view referenced a column that is missing or has the wrong type.
    #[error("Invalid column '{column}': {reason}")]
    InvalidColumn { column: String, reason: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl ExplorerError {
    pub(crate) fn missing_column(column: &str) -> Self {
        ExplorerError::InvalidColumn {
            column: column.to_string(),
            reason: "column does not exist",
        }
    }

    pub(crate) fn not_numeric(column: &str) -> Self {
        ExplorerError::InvalidColumn {
            column: column.to_string(),
            reason: "column is not numeric",
        }
    }
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;
