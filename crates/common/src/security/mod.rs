//! Security primitives for handling secret material

pub mod secret;

pub use secret::SecretBuffer;

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
