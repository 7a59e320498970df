//! Validation utilities for key-agreement operations

use super::{Error, Result};

/// Validate a decoded peer key
pub fn point(condition: bool, algorithm: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidPoint { algorithm, reason });
    }
    Ok(())
}

/// Validate a private key length
pub fn scalar_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidScalarLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a variant can run on a curve
pub fn variant(condition: bool, variant: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::UnsupportedVariant { variant, reason });
    }
    Ok(())
}

// Re-export primitive validations for convenience
pub use ecka_api::error::validate::{length, max_length, min_length, parameter};
