//! Error handling for the arithmetic core

use alloc::borrow::Cow;

use core::fmt;

use ecka_api::Error as CoreError;

/// The error type for field and curve arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Encoding that is not a point of the curve
    Point {
        /// Curve or codec that rejected the encoding
        context: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Scalar outside the accepted range
    Scalar {
        /// Curve the scalar was meant for
        context: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Processing error during an arithmetic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a Point error
    pub fn point(context: &'static str, reason: &'static str) -> Self {
        Error::Point { context, reason }
    }
}

/// Result type for arithmetic operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Point { context, reason } => {
                write!(f, "Invalid point for {}: {}", context, reason)
            }
            Error::Scalar { context, reason } => {
                write!(f, "Invalid scalar for {}: {}", context, reason)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "curve parameters",
                },
                #[cfg(feature = "std")]
                message: reason.into_owned(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Point { context, reason } => CoreError::InvalidPoint {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Scalar { context, reason } => CoreError::InvalidScalar {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "arithmetic",
                #[cfg(feature = "std")]
                message: msg.to_string(),
            },
        }
    }
}

pub mod validate;
