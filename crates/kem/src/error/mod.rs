//! Error handling for key-agreement operations

use core::fmt;
use ecka_algorithms::error::Error as PrimitiveError;
use ecka_api::error::Error as CoreError;

/// Error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Arithmetic-core error with no more specific meaning here
    Primitive(PrimitiveError),

    /// Peer public key does not decode to an acceptable curve point
    InvalidPoint {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Private key length does not match the variant's scalar length
    InvalidScalarLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Private key value outside the accepted range
    InvalidScalar {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// Agreement produced the all-zero (or no) shared secret
    DegenerateSharedSecret {
        algorithm: &'static str,
    },

    /// Variant and curve cannot be combined
    UnsupportedVariant {
        variant: &'static str,
        reason: &'static str,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidPoint { algorithm, reason } => {
                write!(f, "Invalid {} public key: {}", algorithm, reason)
            }
            Error::InvalidScalarLength { algorithm, expected, actual } => {
                write!(
                    f,
                    "Invalid {} private key length: expected {}, got {}",
                    algorithm, expected, actual
                )
            }
            Error::InvalidScalar { algorithm, reason } => {
                write!(f, "Invalid {} private key: {}", algorithm, reason)
            }
            Error::DegenerateSharedSecret { algorithm } => {
                write!(f, "{} produced a degenerate shared secret", algorithm)
            }
            Error::UnsupportedVariant { variant, reason } => {
                write!(f, "Unsupported variant {}: {}", variant, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

// Point and scalar rejections from the core keep their meaning here
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::Point { context, reason } => Error::InvalidPoint {
                algorithm: context,
                reason,
            },
            PrimitiveError::Scalar { context, reason } => Error::InvalidScalar {
                algorithm: context,
                reason,
            },
            other => Error::Primitive(other),
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidPoint { algorithm, reason } => CoreError::InvalidPoint {
                context: algorithm,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::InvalidScalarLength { algorithm, expected, actual } => CoreError::InvalidLength {
                context: algorithm,
                expected,
                actual,
            },
            Error::InvalidScalar { algorithm, reason } => CoreError::InvalidScalar {
                context: algorithm,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::DegenerateSharedSecret { algorithm } => {
                CoreError::DegenerateSharedSecret { context: algorithm }
            }
            Error::UnsupportedVariant { variant, reason } => CoreError::UnsupportedVariant {
                context: variant,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
