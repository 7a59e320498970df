//! ECC CDH over the NIST prime curves
//!
//! Public keys are SEC1 points; [`derive_public`](ecka_api::KeyAgreement::derive_public)
//! produces the uncompressed form and both forms are accepted from peers.
//! Private keys are big-endian, exactly as long as the group order, and
//! must lie in `[1, n − 1]`. The shared secret is the big-endian
//! x-coordinate of `h·d·Q`.

use ecka_params::traditional::ecdh::{
    ECDH_P224_COMPRESSED_PUBLIC_KEY_SIZE, ECDH_P224_PRIVATE_KEY_SIZE, ECDH_P224_PUBLIC_KEY_SIZE,
    ECDH_P224_SHARED_SECRET_SIZE, ECDH_P256_COMPRESSED_PUBLIC_KEY_SIZE,
    ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SIZE, ECDH_P256_SHARED_SECRET_SIZE,
    ECDH_P384_COMPRESSED_PUBLIC_KEY_SIZE, ECDH_P384_PRIVATE_KEY_SIZE, ECDH_P384_PUBLIC_KEY_SIZE,
    ECDH_P384_SHARED_SECRET_SIZE,
};

use super::EcdhVariant;

ecdh_agreement! {
    /// ECC CDH with NIST P-224
    scheme: EcdhP224,
    public_key: EcdhP224PublicKey,
    secret_key: EcdhP224SecretKey,
    shared_secret: EcdhP224SharedSecret,
    variant: EcdhVariant::Ecccdh,
    curve: "SECP224R1",
    name: "ECCCDH/SECP224R1",
    public_lens: [ECDH_P224_PUBLIC_KEY_SIZE, ECDH_P224_COMPRESSED_PUBLIC_KEY_SIZE],
    secret_len: ECDH_P224_PRIVATE_KEY_SIZE,
    shared_len: ECDH_P224_SHARED_SECRET_SIZE,
}

ecdh_agreement! {
    /// ECC CDH with NIST P-256
    scheme: EcdhP256,
    public_key: EcdhP256PublicKey,
    secret_key: EcdhP256SecretKey,
    shared_secret: EcdhP256SharedSecret,
    variant: EcdhVariant::Ecccdh,
    curve: "SECP256R1",
    name: "ECCCDH/SECP256R1",
    public_lens: [ECDH_P256_PUBLIC_KEY_SIZE, ECDH_P256_COMPRESSED_PUBLIC_KEY_SIZE],
    secret_len: ECDH_P256_PRIVATE_KEY_SIZE,
    shared_len: ECDH_P256_SHARED_SECRET_SIZE,
}

ecdh_agreement! {
    /// ECC CDH with NIST P-384
    scheme: EcdhP384,
    public_key: EcdhP384PublicKey,
    secret_key: EcdhP384SecretKey,
    shared_secret: EcdhP384SharedSecret,
    variant: EcdhVariant::Ecccdh,
    curve: "SECP384R1",
    name: "ECCCDH/SECP384R1",
    public_lens: [ECDH_P384_PUBLIC_KEY_SIZE, ECDH_P384_COMPRESSED_PUBLIC_KEY_SIZE],
    secret_len: ECDH_P384_PRIVATE_KEY_SIZE,
    shared_len: ECDH_P384_SHARED_SECRET_SIZE,
}
