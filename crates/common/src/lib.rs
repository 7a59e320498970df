//! Common implementations and shared functionality for the ecka library
//!
//! Holds the zeroizing containers that carry private scalars and shared
//! secrets between the arithmetic core and the protocol layer.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

pub use security::SecretBuffer;

#[cfg(feature = "alloc")]
pub use security::SecretVec;
