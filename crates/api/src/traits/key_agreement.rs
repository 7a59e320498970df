// File: crates/api/src/traits/key_agreement.rs

//! Trait definition for Diffie-Hellman style key agreement with typed keys
//!
//! Every scheme exposes the same two protocol operations: deriving the
//! public value for a private key, and combining a private key with a peer's
//! public value into a shared secret.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for elliptic-curve key agreement with domain-specific types.
///
/// # Security Design
///
/// Public keys are validated when they are combined, never trusted on
/// decode alone. Secret keys and shared secrets zeroize on drop.
pub trait KeyAgreement {
    /// Public key type.
    type PublicKey: Clone + Serialize;

    /// Secret key type. Must wipe itself.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// # Security Note
    /// The raw secret is a curve coordinate, not a uniformly random string.
    /// It should be fed through a KDF before use as a key.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Returns the scheme name, e.g. `"X25519/WEI25519"`.
    fn name() -> &'static str;

    /// Generate a fresh keypair from the provided CSPRNG.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Derive the public value belonging to `secret_key`.
    ///
    /// Deterministic: the same secret key always yields the same bytes.
    fn derive_public(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Combine our secret key with the peer's public value.
    ///
    /// # Security Requirements
    /// - The peer value must be validated as a point of the curve.
    /// - Scalar multiplication must be constant-time in the secret key.
    fn compute_shared(
        secret_key: &Self::SecretKey,
        peer_public: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
