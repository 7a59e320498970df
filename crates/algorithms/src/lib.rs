//! Constant-time arithmetic core for elliptic-curve key agreement
//!
//! This crate provides a runtime-parameterised prime field, points on the
//! canonical short-Weierstrass model with complete addition formulas, a
//! constant-time Montgomery ladder, and the isomorphism that lets
//! Montgomery curves such as Curve25519 and Curve448 run on the same code.
//! The library is usable in both `std` and `no_std` + `alloc` environments;
//! the shared curve catalog needs `std`.
//!
//! # Security Features
//!
//! - Secret scalars live in zeroizing buffers
//! - Field and point operations never branch on secret data
//! - Ladder length depends only on the scalar's byte length

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::{
    AffinePoint, Clamping, Curve, CurveModel, FieldElement, MontgomeryMap, MontgomeryPoint,
    PrimeField, ProjectivePoint, Scalar,
};
#[cfg(feature = "std")]
pub use ec::{catalog, curve, CurveCatalog};
