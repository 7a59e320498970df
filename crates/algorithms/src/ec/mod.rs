//! Generic elliptic-curve arithmetic
//!
//! Every curve, whatever model it is published in, is computed on as a
//! short-Weierstrass curve `y² = x³ + a·x + b` over a runtime-sized prime
//! field. The layers build on each other:
//!
//! - [`field`]: constant-time Montgomery-form field arithmetic;
//! - [`point`]: affine and projective points with complete formulas;
//! - [`ladder`]: the constant-time Montgomery ladder;
//! - [`isomorphism`]: the map between Montgomery and Weierstrass models;
//! - [`curve`]: validated curve contexts and the shared catalog.

mod limbs;

pub mod curve;
pub mod field;
pub mod isomorphism;
mod ladder;
pub mod point;
pub mod scalar;

pub use curve::{Curve, CurveModel};
#[cfg(feature = "std")]
pub use curve::catalog::{catalog, curve, CurveCatalog};
pub use field::{FieldBytes, FieldElement, PrimeField};
pub use isomorphism::{MontgomeryMap, MontgomeryPoint};
pub use limbs::MAX_FIELD_BYTES;
pub use point::{AffinePoint, PointFormat, ProjectivePoint};
pub use scalar::{Clamping, Scalar, MAX_SCALAR_BYTES};
