//! Internal utilities shared by the ecka crates.
//!
//! Nothing in here is part of the public API contract; the helpers exist so
//! that the field, point and protocol layers agree on one set of
//! constant-time primitives.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_is_zero, ct_lt_be};
