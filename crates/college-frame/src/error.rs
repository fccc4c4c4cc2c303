//! Error types for college-frame

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Missing column: {column} (required by {stage})")]
    MissingColumn { column: String, stage: String },

    #[error("Arithmetic anomaly in {column}: {rows} row(s) with a zero denominator")]
    ArithmeticAnomaly { column: String, rows: usize },

    #[error("Render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a load error for the given path
    pub fn load(path: impl AsRef<std::path::Path>, reason: impl ToString) -> Self {
        Self::Load {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>, stage: &str) -> Self {
        Self::MissingColumn {
            column: column.into(),
            stage: stage.to_string(),
        }
    }
}
