//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the lengths are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns 1 when every byte of `bytes` is zero.
///
/// The all-zero check on a shared secret goes through here, so the loop must
/// touch every byte regardless of where the first non-zero one sits.
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let acc = bytes.iter().fold(0u8, |acc, b| acc | b);
    acc.ct_eq(&0u8)
}

/// Constant-time `a < b` for equal-length big-endian byte strings.
///
/// # Panics
/// Panics if the slices differ in length.
pub fn ct_lt_be(a: &[u8], b: &[u8]) -> Choice {
    assert_eq!(a.len(), b.len());

    // Walk from the least significant byte, propagating a borrow.
    let mut borrow = 0u16;
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        let diff = (*x as u16).wrapping_sub(*y as u16).wrapping_sub(borrow);
        borrow = (diff >> 15) & 1;
    }
    Choice::from(borrow as u8)
}
