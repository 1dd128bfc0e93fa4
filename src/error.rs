//! Error types for review analysis.
//!
//! "Nothing entered" and "not enough data" are outcomes, not errors; see
//! [`crate::pipeline::SingleOutcome`] and [`crate::recommender::Verdict`].

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failures that abort a batch analysis before any output is produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The uploaded table has no column with the requested name.
    #[error("the uploaded file must have a column named '{column}'")]
    MissingColumn { column: String },

    /// The source could not be turned into a table.
    #[error("unsupported input: {reason}")]
    UnsupportedInput { reason: String },

    /// The table parsed but has more rows than the configured limit.
    #[error("batch has {rows} rows, the limit is {limit}")]
    TooManyRows { rows: usize, limit: usize },

    /// Writing the augmented table failed.
    #[error("export failed: {0}")]
    Export(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    pub fn unsupported(reason: impl Into<String>) -> Self {
        AnalysisError::UnsupportedInput {
            reason: reason.into(),
        }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(value: csv::Error) -> Self {
        AnalysisError::UnsupportedInput {
            reason: format!("could not parse CSV: {}", value),
        }
    }
}

impl From<calamine::Error> for AnalysisError {
    fn from(value: calamine::Error) -> Self {
        AnalysisError::UnsupportedInput {
            reason: format!("could not read workbook: {}", value),
        }
    }
}
