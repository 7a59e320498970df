//! # ecka
//!
//! Elliptic-curve key agreement over a single canonical short-Weierstrass
//! arithmetic core. Montgomery-native curves (Curve25519, Curve448) are
//! carried onto that core through an explicit isomorphism, so X25519, X448
//! and ECC CDH share one set of field and point routines.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecka = "0.3"
//! ```
//!
//! ## Features
//!
//! - `traditional` (default): X25519, X448 and ECC CDH over the shipped curves
//! - `algorithms`: the arithmetic core only
//! - `kem`: the agreement engine without the typed schemes' defaults
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecka-api`]: Error type and the `KeyAgreement` trait
//! - [`ecka-params`]: Curve domain parameters
//! - [`ecka-algorithms`]: Field, point, ladder and isomorphism arithmetic
//! - [`ecka-kem`]: The agreement engine and typed schemes

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ecka_api as api;
pub use ecka_common as common;
pub use ecka_internal as internal;
pub use ecka_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecka_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use ecka_kem as kem;

// Workspace dependencies that appear in the public API
#[cfg(feature = "full")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for ecka users
pub mod prelude {
    pub use crate::api::{Error, KeyAgreement, Result, Serialize, SerializeSecret};

    pub use crate::common::SecretBuffer;

    #[cfg(feature = "alloc")]
    pub use crate::common::SecretVec;

    #[cfg(feature = "kem")]
    pub use crate::kem::{EcdhEngine, EcdhOptions, EcdhVariant};
}
