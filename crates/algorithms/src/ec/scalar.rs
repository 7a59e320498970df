//! Secret scalars
//!
//! A [`Scalar`] is a big-endian integer of fixed byte length held in a
//! zeroizing buffer. Its length, not its value, fixes the number of ladder
//! steps. Range rules differ between protocols, so the constructors are
//! explicit about which one they apply:
//!
//! - [`Scalar::from_be_bytes`] takes any integer as is (cofactors, orders);
//! - [`Scalar::from_clamped_le`] applies RFC 7748 clamping;
//! - [`Scalar::new_in_range`] demands `1 ≤ k < n` with the order's length.

use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

use ecka_common::security::SecretBuffer;
use ecka_internal::constant_time::{ct_is_zero, ct_lt_be};

use crate::ec::curve::Curve;
use crate::ec::limbs::MAX_FIELD_BYTES;
use crate::error::{validate, Error, Result};

/// Longest scalar the engine accepts
pub const MAX_SCALAR_BYTES: usize = MAX_FIELD_BYTES;

/// Attempts before giving up on rejection sampling
const MAX_SAMPLING_ATTEMPTS: usize = 128;

/// RFC 7748 clamping rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clamping {
    /// Clear bits 0-2 and 255, set bit 254 (32-byte keys)
    X25519,
    /// Clear bits 0-1, set bit 447 (56-byte keys)
    X448,
}

impl Clamping {
    /// Key length the rule applies to
    pub const fn key_len(self) -> usize {
        match self {
            Clamping::X25519 => 32,
            Clamping::X448 => 56,
        }
    }

    /// Clamp a little-endian key in place.
    ///
    /// # Panics
    /// Panics if `key` is not [`Self::key_len`] bytes; callers validate first.
    pub fn apply(self, key: &mut [u8]) {
        assert_eq!(key.len(), self.key_len(), "clamping applied to a key of the wrong length");
        match self {
            Clamping::X25519 => {
                key[0] &= 248;
                key[31] &= 127;
                key[31] |= 64;
            }
            Clamping::X448 => {
                key[0] &= 252;
                key[55] |= 128;
            }
        }
    }
}

/// Secret scalar, big-endian
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar {
    bytes: SecretBuffer<MAX_SCALAR_BYTES>,
    len: usize,
}

impl Scalar {
    /// Take a big-endian integer as is
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        validate::max_length("scalar", bytes.len(), MAX_SCALAR_BYTES)?;
        let bytes_buf = SecretBuffer::from_prefix(bytes)
            .ok_or(Error::Other("scalar exceeds buffer"))?;
        Ok(Self {
            bytes: bytes_buf,
            len: bytes.len(),
        })
    }

    /// Take a little-endian integer as is
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        validate::max_length("scalar", bytes.len(), MAX_SCALAR_BYTES)?;
        let mut buf = SecretBuffer::<MAX_SCALAR_BYTES>::zeroed();
        for (dst, src) in buf.as_mut_slice().iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Ok(Self {
            bytes: buf,
            len: bytes.len(),
        })
    }

    /// Clamp a little-endian private key and take it as a scalar.
    ///
    /// The value is not reduced modulo the order.
    pub fn from_clamped_le(key: &[u8], rule: Clamping) -> Result<Self> {
        validate::length("clamped scalar", key.len(), rule.key_len())?;
        let mut clamped = SecretBuffer::<MAX_SCALAR_BYTES>::from_prefix(key)
            .ok_or(Error::Other("scalar exceeds buffer"))?;
        rule.apply(&mut clamped.as_mut_slice()[..key.len()]);
        Self::from_le_bytes(&clamped.as_slice()[..key.len()])
    }

    /// Take a big-endian private key that must lie in `[1, n − 1]` and be
    /// exactly as long as the order.
    pub fn new_in_range(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        validate::length("scalar", bytes.len(), curve.order_len())?;
        let in_range = ct_lt_be(bytes, curve.order_bytes()) & !ct_is_zero(bytes);
        validate::scalar(bool::from(in_range), curve.name(), "scalar is not in [1, n-1]")?;
        Self::from_be_bytes(bytes)
    }

    /// Uniform scalar in `[1, n − 1]` by rejection sampling.
    ///
    /// Excess high bits beyond the order's bit length are masked before the
    /// range check, so at least half of the draws succeed.
    pub fn random<R: RngCore + CryptoRng>(curve: &Curve, rng: &mut R) -> Result<Self> {
        let order = curve.order_bytes();
        let top_mask = 0xffu8 >> order[0].leading_zeros();
        let mut buf = SecretBuffer::<MAX_SCALAR_BYTES>::zeroed();
        let candidate = &mut buf.as_mut_slice()[..order.len()];
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            rng.fill_bytes(candidate);
            candidate[0] &= top_mask;
            if let Ok(k) = Self::new_in_range(curve, candidate) {
                return Ok(k);
            }
        }
        Err(Error::Processing {
            operation: "scalar sampling",
            details: "rejection sampling did not terminate",
        })
    }

    /// The scalar's big-endian bytes
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.bytes.as_slice()[..self.len]
    }

    /// Byte length, which fixes the ladder length
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for a zero-length scalar
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        ct_is_zero(self.as_be_bytes())
    }
}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar({} bytes)[REDACTED]", self.len)
    }
}
