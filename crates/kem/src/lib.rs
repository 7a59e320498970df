//! Elliptic-curve key agreement
//!
//! This crate implements the protocol layer of the ecka engine: X25519 and
//! X448 (RFC 7748) and ECC CDH (SP 800-56A) over the curves in the shared
//! catalog, all computed on one short-Weierstrass arithmetic core.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ecdh;
pub mod error;

// Re-exports
pub use ecdh::{EcdhEngine, EcdhOptions, EcdhVariant};
#[cfg(feature = "nist")]
pub use ecdh::{EcdhP224, EcdhP256, EcdhP384};
#[cfg(feature = "x25519")]
pub use ecdh::X25519;
#[cfg(feature = "x448")]
pub use ecdh::X448;
pub use error::{Error, Result};
