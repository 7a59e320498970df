//! Structured error types for the fixture harness

use std::path::PathBuf;

use ecka_kem::Error as KemError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{case}: bad hex in {field}: {source}")]
    Hex {
        case: String,
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("{case}: unknown variant tag {variant:?}")]
    UnknownVariant { case: String, variant: String },

    #[error("{case}: {operation} mismatch - expected: {expected}, got: {actual}")]
    Mismatch {
        case: String,
        operation: &'static str,
        expected: String,
        actual: String,
    },

    #[error("{case}: {operation} failed: {source}")]
    Agreement {
        case: String,
        operation: &'static str,
        #[source]
        source: KemError,
    },

    #[error("{case}: expected {expected}, got {actual}")]
    UnexpectedOutcome {
        case: String,
        expected: String,
        actual: String,
    },

    #[error("{} of {total} fixtures failed: {}", .failed.len(), .failed.join(", "))]
    Failures { total: usize, failed: Vec<String> },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
