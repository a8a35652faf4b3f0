use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InkError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("mix proportions sum to {sum}, expected 1 (tolerance {tolerance})")]
    InvalidMix { sum: Decimal, tolerance: Decimal },

    #[error("unknown {kind} '{key}'")]
    NotFound { kind: &'static str, key: String },

    #[error("internal consistency check failed: {0}")]
    InternalConsistency(String),

    #[error("failed to load mix from {path}: {reason}")]
    MixLoad { path: PathBuf, reason: String },

    #[error("failed to load price table from {path}: {reason}")]
    PriceLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl InkError {
    pub(crate) fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        InkError::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// A product or quotient left the representable decimal range.
    pub(crate) fn out_of_range(what: &str) -> Self {
        InkError::InvalidInput(format!("{} is out of range", what))
    }
}
