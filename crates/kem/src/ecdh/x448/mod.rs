//! X448 (RFC 7748) on the short-Weierstrass form of Curve448
//!
//! 56-byte little-endian keys. Unlike X25519, no bit of the peer value is
//! masked.

use ecka_params::traditional::ecdh::X448_KEY_SIZE;

use super::EcdhVariant;

ecdh_agreement! {
    /// X448 key agreement
    scheme: X448,
    public_key: X448PublicKey,
    secret_key: X448SecretKey,
    shared_secret: X448SharedSecret,
    variant: EcdhVariant::X448,
    curve: "WEI448",
    name: "X448/WEI448",
    public_lens: [X448_KEY_SIZE],
    secret_len: X448_KEY_SIZE,
    shared_len: X448_KEY_SIZE,
}
