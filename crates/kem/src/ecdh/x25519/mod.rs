//! X25519 (RFC 7748) on the short-Weierstrass form of Curve25519
//!
//! Keys and shared secrets are 32-byte little-endian strings. The private
//! key is clamped on every use; the peer's top bit is ignored and
//! non-canonical u-coordinates are reduced. A peer value on the quadratic
//! twist is rejected as an invalid point, and the all-zero shared secret is
//! rejected unless the engine was built with
//! [`allow_degenerate_secret`](super::EcdhEngine::allow_degenerate_secret).

use ecka_params::traditional::ecdh::X25519_KEY_SIZE;

use super::EcdhVariant;

ecdh_agreement! {
    /// X25519 key agreement
    scheme: X25519,
    public_key: X25519PublicKey,
    secret_key: X25519SecretKey,
    shared_secret: X25519SharedSecret,
    variant: EcdhVariant::X25519,
    curve: "WEI25519",
    name: "X25519/WEI25519",
    public_lens: [X25519_KEY_SIZE],
    secret_len: X25519_KEY_SIZE,
    shared_len: X25519_KEY_SIZE,
}
