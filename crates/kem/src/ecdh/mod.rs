//! Elliptic-curve Diffie-Hellman over the canonical arithmetic core
//!
//! [`EcdhEngine`] binds one algorithm variant to one loaded curve and runs
//! the two protocol operations on raw byte strings:
//!
//! ```text
//! derive_public:  private key → scalar → k·G → native encoding
//! compute_shared: peer bytes → point → validated point → k·Q → secret bytes
//! ```
//!
//! X25519 and X448 keep their RFC 7748 wire format; the isomorphism layer
//! carries u-coordinates onto the short-Weierstrass model and back. ECC CDH
//! (SP 800-56A) uses SEC1 points and multiplies by the cofactor.
//!
//! The typed agreements in the submodules wrap an engine behind the
//! [`KeyAgreement`](ecka_api::KeyAgreement) trait.

use alloc::vec::Vec;
use core::fmt;

use ecka_algorithms::ec::{AffinePoint, Clamping, Curve, CurveModel, ProjectivePoint, Scalar};
use ecka_common::security::SecretVec;
use ecka_internal::constant_time::ct_is_zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};

#[macro_use]
mod typed;

#[cfg(feature = "nist")]
pub mod nist;
#[cfg(feature = "x25519")]
pub mod x25519;
#[cfg(feature = "x448")]
pub mod x448;

#[cfg(feature = "nist")]
pub use nist::{
    EcdhP224, EcdhP224PublicKey, EcdhP224SecretKey, EcdhP224SharedSecret, EcdhP256,
    EcdhP256PublicKey, EcdhP256SecretKey, EcdhP256SharedSecret, EcdhP384, EcdhP384PublicKey,
    EcdhP384SecretKey, EcdhP384SharedSecret,
};
#[cfg(feature = "x25519")]
pub use x25519::{X25519, X25519PublicKey, X25519SecretKey, X25519SharedSecret};
#[cfg(feature = "x448")]
pub use x448::{X448, X448PublicKey, X448SecretKey, X448SharedSecret};

/// Key-agreement algorithm variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcdhVariant {
    /// RFC 7748 X25519
    X25519,
    /// RFC 7748 X448
    X448,
    /// SP 800-56A cofactor Diffie-Hellman with SEC1 public keys
    Ecccdh,
}

impl EcdhVariant {
    /// Canonical tag, as used in fixture files
    pub const fn name(self) -> &'static str {
        match self {
            EcdhVariant::X25519 => "X25519",
            EcdhVariant::X448 => "X448",
            EcdhVariant::Ecccdh => "ECCCDH",
        }
    }

    /// Parse a tag; ASCII case is ignored
    pub fn from_name(name: &str) -> Option<Self> {
        [EcdhVariant::X25519, EcdhVariant::X448, EcdhVariant::Ecccdh]
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }

    /// RFC 7748 clamping rule, for the x-only variants
    pub const fn clamping(self) -> Option<Clamping> {
        match self {
            EcdhVariant::X25519 => Some(Clamping::X25519),
            EcdhVariant::X448 => Some(Clamping::X448),
            EcdhVariant::Ecccdh => None,
        }
    }
}

impl fmt::Display for EcdhVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime protocol options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdhOptions {
    /// Fail with [`Error::DegenerateSharedSecret`] when an x-only agreement
    /// yields the all-zero string (RFC 7748 §6.1)
    pub reject_degenerate: bool,
}

impl Default for EcdhOptions {
    fn default() -> Self {
        Self {
            reject_degenerate: true,
        }
    }
}

/// A variant bound to a loaded curve
#[derive(Debug, Clone, Copy)]
pub struct EcdhEngine<'c> {
    variant: EcdhVariant,
    curve: &'c Curve,
    options: EcdhOptions,
}

impl<'c> EcdhEngine<'c> {
    /// Bind `variant` to `curve`.
    ///
    /// The x-only variants need a Montgomery-native curve whose field width
    /// matches their key length; ECC CDH runs on any curve.
    pub fn new(variant: EcdhVariant, curve: &'c Curve) -> Result<Self> {
        if let Some(rule) = variant.clamping() {
            validate::variant(
                curve.model() == CurveModel::Montgomery,
                variant.name(),
                "x-only agreement needs a Montgomery-native curve",
            )?;
            validate::variant(
                curve.field_len() == rule.key_len(),
                variant.name(),
                "curve field width does not match the key length",
            )?;
        }
        Ok(Self {
            variant,
            curve,
            options: EcdhOptions::default(),
        })
    }

    /// Replace the protocol options
    pub fn with_options(mut self, options: EcdhOptions) -> Self {
        self.options = options;
        self
    }

    /// Return all-zero x-only secrets instead of failing
    pub fn allow_degenerate_secret(mut self) -> Self {
        self.options.reject_degenerate = false;
        self
    }

    /// The bound variant
    pub fn variant(&self) -> EcdhVariant {
        self.variant
    }

    /// The bound curve
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Active options
    pub fn options(&self) -> EcdhOptions {
        self.options
    }

    /// Private key length in bytes
    pub fn private_key_len(&self) -> usize {
        match self.variant.clamping() {
            Some(rule) => rule.key_len(),
            None => self.curve.order_len(),
        }
    }

    /// Length of the public keys this engine produces
    pub fn public_key_len(&self) -> usize {
        match self.variant {
            EcdhVariant::Ecccdh => 1 + 2 * self.curve.field_len(),
            _ => self.curve.field_len(),
        }
    }

    /// Shared secret length in bytes
    pub fn shared_secret_len(&self) -> usize {
        self.curve.field_len()
    }

    fn private_scalar(&self, private_key: &[u8]) -> Result<Scalar> {
        validate::scalar_length(self.variant.name(), private_key.len(), self.private_key_len())?;
        let scalar = match self.variant.clamping() {
            Some(rule) => Scalar::from_clamped_le(private_key, rule)?,
            None => Scalar::new_in_range(self.curve, private_key)?,
        };
        Ok(scalar)
    }

    /// Check a private key without using it
    pub fn validate_private(&self, private_key: &[u8]) -> Result<()> {
        self.private_scalar(private_key).map(drop)
    }

    /// Draw a fresh private key.
    ///
    /// x-only variants take uniform bytes (clamping happens on use); ECC CDH
    /// keys are sampled uniformly from `[1, n − 1]`.
    pub fn generate_private<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let mut key = Zeroizing::new(alloc::vec![0u8; self.private_key_len()]);
        match self.variant.clamping() {
            Some(_) => rng.fill_bytes(&mut key),
            None => {
                let k = Scalar::random(self.curve, rng)?;
                key.copy_from_slice(k.as_be_bytes());
            }
        }
        Ok(key)
    }

    /// Public key for `private_key`, in the variant's wire format
    pub fn derive_public(&self, private_key: &[u8]) -> Result<Vec<u8>> {
        let k = self.private_scalar(private_key)?;
        let public = ProjectivePoint::generator(self.curve).mul(&k).to_affine();

        match self.curve.montgomery_map().filter(|_| self.variant != EcdhVariant::Ecccdh) {
            Some(map) => Ok(map.encode_u(&map.u_coordinate(&public)).as_ref().to_vec()),
            None => Ok(public.to_uncompressed()),
        }
    }

    /// Shared secret between `private_key` and `peer_public`
    pub fn compute_shared(&self, private_key: &[u8], peer_public: &[u8]) -> Result<SecretVec> {
        let k = self.private_scalar(private_key)?;
        match self.variant {
            EcdhVariant::X25519 | EcdhVariant::X448 => self.shared_x_only(&k, peer_public),
            EcdhVariant::Ecccdh => self.shared_cofactor(&k, peer_public),
        }
    }

    /// RFC 7748 §5: decode u, lift onto the curve, multiply, encode u
    fn shared_x_only(&self, k: &Scalar, peer_public: &[u8]) -> Result<SecretVec> {
        let algorithm = self.variant.name();
        let map = self.curve.montgomery_map().ok_or(Error::UnsupportedVariant {
            variant: algorithm,
            reason: "curve has no Montgomery form",
        })?;

        let u = map.decode_u(peer_public, self.variant == EcdhVariant::X25519)?;
        let peer = Option::<AffinePoint<'_>>::from(map.lift_u(&u)).ok_or_else(|| {
            log::debug!("{}: peer u-coordinate lies on the quadratic twist", algorithm);
            Error::InvalidPoint {
                algorithm,
                reason: "u-coordinate is not on the curve",
            }
        })?;

        let shared = peer.to_projective().mul(k).to_affine();
        let secret = map.encode_u(&map.u_coordinate(&shared));

        if self.options.reject_degenerate && bool::from(ct_is_zero(secret.as_ref())) {
            log::debug!("{}: rejecting all-zero shared secret", algorithm);
            return Err(Error::DegenerateSharedSecret { algorithm });
        }
        Ok(SecretVec::from_slice(secret.as_ref()))
    }

    /// SP 800-56A §5.7.1.2: P = h·d·Q, secret is x(P)
    fn shared_cofactor(&self, d: &Scalar, peer_public: &[u8]) -> Result<SecretVec> {
        let algorithm = self.variant.name();
        let q = AffinePoint::from_sec1(self.curve, peer_public)?;
        validate::point(
            !bool::from(q.is_identity()),
            algorithm,
            "peer key is the point at infinity",
        )?;

        let h = Scalar::from_be_bytes(self.curve.cofactor_bytes())?;
        let p = q.to_projective().mul(&h).mul(d).to_affine();

        // There is no x-coordinate to return for the identity, so this holds
        // whatever the options say.
        if bool::from(p.is_identity()) {
            log::debug!("{} on {}: h·d·Q is the identity", algorithm, self.curve.name());
            return Err(Error::DegenerateSharedSecret { algorithm });
        }
        Ok(SecretVec::from_slice(p.x_bytes().as_ref()))
    }
}

#[cfg(feature = "std")]
impl EcdhEngine<'static> {
    /// Bind `variant` to a curve from the shared catalog
    pub fn for_variant(variant: EcdhVariant, curve_name: &str) -> Result<Self> {
        let curve = ecka_algorithms::ec::curve(curve_name).map_err(|e| {
            log::warn!("{}: no curve named {:?} in the catalog", variant, curve_name);
            match e {
                ecka_algorithms::Error::Parameter { .. } => Error::UnsupportedVariant {
                    variant: variant.name(),
                    reason: "curve is not in the catalog",
                },
                other => Error::from(other),
            }
        })?;
        Self::new(variant, curve)
    }
}
