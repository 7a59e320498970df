//! Constant values for the ecka library
//!
//! Curve domain parameters are published here as big-endian byte strings.
//! Nothing in this crate does arithmetic; `ecka-algorithms` loads and
//! validates the sets before use.

#![no_std]

pub mod traditional;

pub use traditional::curves::{find_curve, CurveParams, MontgomeryParams, CATALOG};
