//! Constants for Elliptic Curve Diffie-Hellman

/// Size of an X25519 private key, public value and shared secret in bytes
pub const X25519_KEY_SIZE: usize = 32;

/// Size of an X448 private key, public value and shared secret in bytes
pub const X448_KEY_SIZE: usize = 56;

/// Size of shared secret for ECDH using P-224 in bytes
pub const ECDH_P224_SHARED_SECRET_SIZE: usize = 28;

/// Size of shared secret for ECDH using P-256 in bytes
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 32;

/// Size of shared secret for ECDH using P-384 in bytes
pub const ECDH_P384_SHARED_SECRET_SIZE: usize = 48;

/// Size of public key for ECDH using P-224 in bytes (uncompressed format)
pub const ECDH_P224_PUBLIC_KEY_SIZE: usize = 57;

/// Size of public key for ECDH using P-256 in bytes (uncompressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 65;

/// Size of public key for ECDH using P-384 in bytes (uncompressed format)
pub const ECDH_P384_PUBLIC_KEY_SIZE: usize = 97;

/// Size of private key for ECDH using P-224 in bytes
pub const ECDH_P224_PRIVATE_KEY_SIZE: usize = 28;

/// Size of private key for ECDH using P-256 in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of private key for ECDH using P-384 in bytes
pub const ECDH_P384_PRIVATE_KEY_SIZE: usize = 48;

/// Size of a compressed P-224 public key in bytes
pub const ECDH_P224_COMPRESSED_PUBLIC_KEY_SIZE: usize = 29;

/// Size of a compressed P-256 public key in bytes
pub const ECDH_P256_COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Size of a compressed P-384 public key in bytes
pub const ECDH_P384_COMPRESSED_PUBLIC_KEY_SIZE: usize = 49;
