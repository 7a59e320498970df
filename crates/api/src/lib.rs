//! Public API traits and types for the ecka library
//!
//! This crate provides the public API surface for the ecka ecosystem: the
//! error type every outer layer reports with, and the traits implemented by
//! the typed key-agreement schemes.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{KeyAgreement, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{key_agreement, serialize};
