//! Error type definitions for key-agreement operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for key-agreement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Encoded point does not decode to a valid point of the curve
    InvalidPoint {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Private scalar outside the range the scheme accepts
    InvalidScalar {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Shared secret came out as the all-zero string
    DegenerateSharedSecret {
        context: &'static str,
    },

    /// Variant or curve pairing the engine does not provide
    UnsupportedVariant {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for key-agreement operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Returns the context string every variant carries.
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::InvalidScalar { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::DegenerateSharedSecret { context }
            | Self::UnsupportedVariant { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    /// Replace the context, keeping the variant and any message
    pub fn with_context(mut self, context: &'static str) -> Self {
        match &mut self {
            Self::InvalidKey { context: slot, .. }
            | Self::InvalidPoint { context: slot, .. }
            | Self::InvalidScalar { context: slot, .. }
            | Self::InvalidLength { context: slot, .. }
            | Self::DegenerateSharedSecret { context: slot }
            | Self::UnsupportedVariant { context: slot, .. }
            | Self::InvalidParameter { context: slot, .. }
            | Self::Other { context: slot, .. } => *slot = context,
        }
        self
    }

    /// Reclassify a rejected scalar or point as a bad key encoding.
    ///
    /// Other variants pass through unchanged.
    pub fn into_invalid_key(self) -> Self {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidScalar { context, message } | Self::InvalidPoint { context, message } => {
                Self::InvalidKey { context, message }
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidScalar { context } | Self::InvalidPoint { context } => {
                Self::InvalidKey { context }
            }
            other => other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidPoint { context, message } => {
                write!(f, "Invalid point: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidPoint { context } => {
                write!(f, "Invalid point: {}", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidScalar { context, message } => {
                write!(f, "Invalid scalar: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidScalar { context } => {
                write!(f, "Invalid scalar: {}", context)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::DegenerateSharedSecret { context } => {
                write!(f, "{}: shared secret is all zero", context)
            }
            #[cfg(feature = "std")]
            Self::UnsupportedVariant { context, message } => {
                write!(f, "Unsupported variant: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::UnsupportedVariant { context } => {
                write!(f, "Unsupported variant: {}", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
