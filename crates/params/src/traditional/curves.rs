//! Curve domain parameters
//!
//! Every set describes a short-Weierstrass curve `y^2 = x^3 + a*x + b` over
//! GF(p). Sets published in Montgomery form `B*v^2 = u^3 + A*u^2 + u` also
//! carry the Montgomery coefficients and the two constants of the map onto
//! the Weierstrass form:
//!
//! ```text
//! x = u * gamma + alpha        alpha = A / (3B)
//! y = v * gamma                gamma = 1 / B
//! ```
//!
//! All values are big-endian. Field-sized values are exactly as long as the
//! prime; the order is exactly as long as itself.

/// Montgomery-form coefficients and isomorphism constants.
#[derive(Debug, Clone, Copy)]
pub struct MontgomeryParams {
    /// Coefficient A
    pub a: &'static [u8],
    /// Coefficient B
    pub b: &'static [u8],
    /// u-coordinate of the base point
    pub base_u: &'static [u8],
    /// A / (3B) mod p
    pub alpha: &'static [u8],
    /// 1 / B mod p
    pub gamma: &'static [u8],
}

/// One short-Weierstrass domain parameter set.
#[derive(Debug, Clone, Copy)]
pub struct CurveParams {
    /// Canonical catalog name, e.g. `"WEI25519"`
    pub name: &'static str,
    /// Other names the set answers to
    pub aliases: &'static [&'static str],
    /// Field prime
    pub p: &'static [u8],
    /// Coefficient a
    pub a: &'static [u8],
    /// Coefficient b
    pub b: &'static [u8],
    /// Generator x-coordinate
    pub g_x: &'static [u8],
    /// Generator y-coordinate
    pub g_y: &'static [u8],
    /// Prime order of the generator
    pub n: &'static [u8],
    /// Cofactor
    pub h: &'static [u8],
    /// Present when the set is the image of a Montgomery curve
    pub montgomery: Option<MontgomeryParams>,
}

impl CurveParams {
    /// Byte length of field elements
    pub const fn field_len(&self) -> usize {
        self.p.len()
    }

    /// Byte length of scalars reduced modulo the order
    pub const fn order_len(&self) -> usize {
        self.n.len()
    }

    /// Whether `name` refers to this set. ASCII case is ignored.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

// ----------------------------------------------------------------------
// WEI25519
// ----------------------------------------------------------------------

/// Field prime
pub const WEI25519_P: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xed,
];
/// Weierstrass coefficient a
pub const WEI25519_A: [u8; 32] = [
    0x2a, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0x98, 0x49, 0x14, 0xa1, 0x44,
];
/// Weierstrass coefficient b
pub const WEI25519_B: [u8; 32] = [
    0x7b, 0x42, 0x5e, 0xd0, 0x97, 0xb4, 0x25, 0xed, 0x09, 0x7b, 0x42, 0x5e,
    0xd0, 0x97, 0xb4, 0x25, 0xed, 0x09, 0x7b, 0x42, 0x5e, 0xd0, 0x97, 0xb4,
    0x26, 0x0b, 0x5e, 0x9c, 0x77, 0x10, 0xc8, 0x64,
];
/// Generator x-coordinate
pub const WEI25519_G_X: [u8; 32] = [
    0x2a, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xad, 0x24, 0x5a,
];
/// Generator y-coordinate
pub const WEI25519_G_Y: [u8; 32] = [
    0x20, 0xae, 0x19, 0xa1, 0xb8, 0xa0, 0x86, 0xb4, 0xe0, 0x1e, 0xdd, 0x2c,
    0x77, 0x48, 0xd1, 0x4c, 0x92, 0x3d, 0x4d, 0x7e, 0x6d, 0x7c, 0x61, 0xb2,
    0x29, 0xe9, 0xc5, 0xa2, 0x7e, 0xce, 0xd3, 0xd9,
];
/// Order of the generator
pub const WEI25519_N: [u8; 32] = [
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6,
    0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5, 0xd3, 0xed,
];
/// Montgomery coefficient A
pub const WEI25519_MONT_A: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x6d, 0x06,
];
/// Montgomery coefficient B
pub const WEI25519_MONT_B: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];
/// Montgomery base point u-coordinate
pub const WEI25519_MONT_U: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
];
/// Isomorphism shift alpha = A / 3B
pub const WEI25519_ALPHA: [u8; 32] = [
    0x2a, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xad, 0x24, 0x51,
];
/// Isomorphism scale gamma = 1 / B
pub const WEI25519_GAMMA: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

/// Short-Weierstrass image of Curve25519 (RFC 7748 section 4.1).
pub static WEI25519: CurveParams = CurveParams {
    name: "WEI25519",
    aliases: &[],
    p: &WEI25519_P,
    a: &WEI25519_A,
    b: &WEI25519_B,
    g_x: &WEI25519_G_X,
    g_y: &WEI25519_G_Y,
    n: &WEI25519_N,
    h: &[8],
    montgomery: Some(MontgomeryParams {
        a: &WEI25519_MONT_A,
        b: &WEI25519_MONT_B,
        base_u: &WEI25519_MONT_U,
        alpha: &WEI25519_ALPHA,
        gamma: &WEI25519_GAMMA,
    }),
};

// ----------------------------------------------------------------------
// WEI448
// ----------------------------------------------------------------------

/// Field prime
pub const WEI448_P: [u8; 56] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];
/// Weierstrass coefficient a
pub const WEI448_A: [u8; 56] = [
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xa9, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0x1a, 0x76, 0xd4, 0x1f,
];
/// Weierstrass coefficient b
pub const WEI448_B: [u8; 56] = [
    0x5e, 0xd0, 0x97, 0xb4, 0x25, 0xed, 0x09, 0x7b, 0x42, 0x5e, 0xd0, 0x97,
    0xb4, 0x25, 0xed, 0x09, 0x7b, 0x42, 0x5e, 0xd0, 0x97, 0xb4, 0x25, 0xed,
    0x09, 0x7b, 0x42, 0x5e, 0x71, 0xc7, 0x1c, 0x71, 0xc7, 0x1c, 0x71, 0xc7,
    0x1c, 0x71, 0xc7, 0x1c, 0x71, 0xc7, 0x1c, 0x71, 0xc7, 0x1c, 0x71, 0xc7,
    0x1c, 0x72, 0xc8, 0x7b, 0x7c, 0xc6, 0x9f, 0x70,
];
/// Generator x-coordinate
pub const WEI448_G_X: [u8; 56] = [
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xcb, 0x91,
];
/// Generator y-coordinate
pub const WEI448_G_Y: [u8; 56] = [
    0x82, 0xdc, 0xa2, 0xed, 0x6a, 0x0a, 0x4e, 0x09, 0x93, 0x67, 0x54, 0x91,
    0xa7, 0xcd, 0x90, 0x31, 0x34, 0x51, 0xa2, 0xcb, 0x0a, 0xaa, 0xba, 0x2f,
    0x9f, 0x08, 0xa2, 0x3c, 0x72, 0x0c, 0x09, 0x12, 0x47, 0xfd, 0x81, 0xdc,
    0xb9, 0xbc, 0xf2, 0xde, 0xec, 0xed, 0x3b, 0x4e, 0xaf, 0x98, 0x85, 0x08,
    0x90, 0x28, 0xdd, 0xc2, 0xba, 0x84, 0xa4, 0xe5,
];
/// Order of the generator
pub const WEI448_N: [u8; 56] = [
    0x3f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0x7c, 0xca, 0x23, 0xe9, 0xc4, 0x4e, 0xdb, 0x49,
    0xae, 0xd6, 0x36, 0x90, 0x21, 0x6c, 0xc2, 0x72, 0x8d, 0xc5, 0x8f, 0x55,
    0x23, 0x78, 0xc2, 0x92, 0xab, 0x58, 0x44, 0xf3,
];
/// Montgomery coefficient A
pub const WEI448_MONT_A: [u8; 56] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x62, 0xa6,
];
/// Montgomery coefficient B
pub const WEI448_MONT_B: [u8; 56] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];
/// Montgomery base point u-coordinate
pub const WEI448_MONT_U: [u8; 56] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05,
];
/// Isomorphism shift alpha = A / 3B
pub const WEI448_ALPHA: [u8; 56] = [
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa, 0xaa,
    0xaa, 0xaa, 0xaa, 0xaa, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xcb, 0x8c,
];
/// Isomorphism scale gamma = 1 / B
pub const WEI448_GAMMA: [u8; 56] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

/// Short-Weierstrass image of Curve448 (RFC 7748 section 4.2).
pub static WEI448: CurveParams = CurveParams {
    name: "WEI448",
    aliases: &[],
    p: &WEI448_P,
    a: &WEI448_A,
    b: &WEI448_B,
    g_x: &WEI448_G_X,
    g_y: &WEI448_G_Y,
    n: &WEI448_N,
    h: &[4],
    montgomery: Some(MontgomeryParams {
        a: &WEI448_MONT_A,
        b: &WEI448_MONT_B,
        base_u: &WEI448_MONT_U,
        alpha: &WEI448_ALPHA,
        gamma: &WEI448_GAMMA,
    }),
};

// ----------------------------------------------------------------------
// SECP224R1
// ----------------------------------------------------------------------

/// Field prime
pub const SECP224R1_P: [u8; 28] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01,
];
/// Weierstrass coefficient a
pub const SECP224R1_A: [u8; 28] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe,
];
/// Weierstrass coefficient b
pub const SECP224R1_B: [u8; 28] = [
    0xb4, 0x05, 0x0a, 0x85, 0x0c, 0x04, 0xb3, 0xab, 0xf5, 0x41, 0x32, 0x56,
    0x50, 0x44, 0xb0, 0xb7, 0xd7, 0xbf, 0xd8, 0xba, 0x27, 0x0b, 0x39, 0x43,
    0x23, 0x55, 0xff, 0xb4,
];
/// Generator x-coordinate
pub const SECP224R1_G_X: [u8; 28] = [
    0xb7, 0x0e, 0x0c, 0xbd, 0x6b, 0xb4, 0xbf, 0x7f, 0x32, 0x13, 0x90, 0xb9,
    0x4a, 0x03, 0xc1, 0xd3, 0x56, 0xc2, 0x11, 0x22, 0x34, 0x32, 0x80, 0xd6,
    0x11, 0x5c, 0x1d, 0x21,
];
/// Generator y-coordinate
pub const SECP224R1_G_Y: [u8; 28] = [
    0xbd, 0x37, 0x63, 0x88, 0xb5, 0xf7, 0x23, 0xfb, 0x4c, 0x22, 0xdf, 0xe6,
    0xcd, 0x43, 0x75, 0xa0, 0x5a, 0x07, 0x47, 0x64, 0x44, 0xd5, 0x81, 0x99,
    0x85, 0x00, 0x7e, 0x34,
];
/// Order of the generator
pub const SECP224R1_N: [u8; 28] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0x16, 0xa2, 0xe0, 0xb8, 0xf0, 0x3e, 0x13, 0xdd, 0x29, 0x45,
    0x5c, 0x5c, 0x2a, 0x3d,
];

/// NIST P-224 (SEC 2 secp224r1).
pub static SECP224R1: CurveParams = CurveParams {
    name: "SECP224R1",
    aliases: &["P-224", "NIST-P224"],
    p: &SECP224R1_P,
    a: &SECP224R1_A,
    b: &SECP224R1_B,
    g_x: &SECP224R1_G_X,
    g_y: &SECP224R1_G_Y,
    n: &SECP224R1_N,
    h: &[1],
    montgomery: None,
};

// ----------------------------------------------------------------------
// SECP256R1
// ----------------------------------------------------------------------

/// Field prime
pub const SECP256R1_P: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];
/// Weierstrass coefficient a
pub const SECP256R1_A: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc,
];
/// Weierstrass coefficient b
pub const SECP256R1_B: [u8; 32] = [
    0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55,
    0x76, 0x98, 0x86, 0xbc, 0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6,
    0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2, 0x60, 0x4b,
];
/// Generator x-coordinate
pub const SECP256R1_G_X: [u8; 32] = [
    0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5,
    0x63, 0xa4, 0x40, 0xf2, 0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0,
    0xf4, 0xa1, 0x39, 0x45, 0xd8, 0x98, 0xc2, 0x96,
];
/// Generator y-coordinate
pub const SECP256R1_G_Y: [u8; 32] = [
    0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a,
    0x7c, 0x0f, 0x9e, 0x16, 0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce,
    0xcb, 0xb6, 0x40, 0x68, 0x37, 0xbf, 0x51, 0xf5,
];
/// Order of the generator
pub const SECP256R1_N: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84,
    0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63, 0x25, 0x51,
];

/// NIST P-256 (SEC 2 secp256r1).
pub static SECP256R1: CurveParams = CurveParams {
    name: "SECP256R1",
    aliases: &["P-256", "NIST-P256", "PRIME256V1"],
    p: &SECP256R1_P,
    a: &SECP256R1_A,
    b: &SECP256R1_B,
    g_x: &SECP256R1_G_X,
    g_y: &SECP256R1_G_Y,
    n: &SECP256R1_N,
    h: &[1],
    montgomery: None,
};

// ----------------------------------------------------------------------
// SECP384R1
// ----------------------------------------------------------------------

/// Field prime
pub const SECP384R1_P: [u8; 48] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
];
/// Weierstrass coefficient a
pub const SECP384R1_A: [u8; 48] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xfc,
];
/// Weierstrass coefficient b
pub const SECP384R1_B: [u8; 48] = [
    0xb3, 0x31, 0x2f, 0xa7, 0xe2, 0x3e, 0xe7, 0xe4, 0x98, 0x8e, 0x05, 0x6b,
    0xe3, 0xf8, 0x2d, 0x19, 0x18, 0x1d, 0x9c, 0x6e, 0xfe, 0x81, 0x41, 0x12,
    0x03, 0x14, 0x08, 0x8f, 0x50, 0x13, 0x87, 0x5a, 0xc6, 0x56, 0x39, 0x8d,
    0x8a, 0x2e, 0xd1, 0x9d, 0x2a, 0x85, 0xc8, 0xed, 0xd3, 0xec, 0x2a, 0xef,
];
/// Generator x-coordinate
pub const SECP384R1_G_X: [u8; 48] = [
    0xaa, 0x87, 0xca, 0x22, 0xbe, 0x8b, 0x05, 0x37, 0x8e, 0xb1, 0xc7, 0x1e,
    0xf3, 0x20, 0xad, 0x74, 0x6e, 0x1d, 0x3b, 0x62, 0x8b, 0xa7, 0x9b, 0x98,
    0x59, 0xf7, 0x41, 0xe0, 0x82, 0x54, 0x2a, 0x38, 0x55, 0x02, 0xf2, 0x5d,
    0xbf, 0x55, 0x29, 0x6c, 0x3a, 0x54, 0x5e, 0x38, 0x72, 0x76, 0x0a, 0xb7,
];
/// Generator y-coordinate
pub const SECP384R1_G_Y: [u8; 48] = [
    0x36, 0x17, 0xde, 0x4a, 0x96, 0x26, 0x2c, 0x6f, 0x5d, 0x9e, 0x98, 0xbf,
    0x92, 0x92, 0xdc, 0x29, 0xf8, 0xf4, 0x1d, 0xbd, 0x28, 0x9a, 0x14, 0x7c,
    0xe9, 0xda, 0x31, 0x13, 0xb5, 0xf0, 0xb8, 0xc0, 0x0a, 0x60, 0xb1, 0xce,
    0x1d, 0x7e, 0x81, 0x9d, 0x7a, 0x43, 0x1d, 0x7c, 0x90, 0xea, 0x0e, 0x5f,
];
/// Order of the generator
pub const SECP384R1_N: [u8; 48] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xc7, 0x63, 0x4d, 0x81, 0xf4, 0x37, 0x2d, 0xdf, 0x58, 0x1a, 0x0d, 0xb2,
    0x48, 0xb0, 0xa7, 0x7a, 0xec, 0xec, 0x19, 0x6a, 0xcc, 0xc5, 0x29, 0x73,
];

/// NIST P-384 (SEC 2 secp384r1).
pub static SECP384R1: CurveParams = CurveParams {
    name: "SECP384R1",
    aliases: &["P-384", "NIST-P384"],
    p: &SECP384R1_P,
    a: &SECP384R1_A,
    b: &SECP384R1_B,
    g_x: &SECP384R1_G_X,
    g_y: &SECP384R1_G_Y,
    n: &SECP384R1_N,
    h: &[1],
    montgomery: None,
};

/// Every parameter set the engine ships with
pub static CATALOG: &[&CurveParams] = &[&WEI25519, &WEI448, &SECP224R1, &SECP256R1, &SECP384R1];

/// Look up a parameter set by name or alias
pub fn find_curve(name: &str) -> Option<&'static CurveParams> {
    CATALOG.iter().copied().find(|c| c.answers_to(name))
}
