//! Fixed-width multi-precision helpers
//!
//! Values are little-endian arrays of 64-bit limbs. Every routine takes the
//! number of active limbs `n` explicitly so one array type serves every
//! field width up to [`MAX_LIMBS`].

use subtle::{Choice, ConditionallySelectable};

/// Widest supported modulus: 9 x 64 = 576 bits
pub const MAX_LIMBS: usize = 9;

/// Widest supported field element encoding in bytes
pub const MAX_FIELD_BYTES: usize = MAX_LIMBS * 8;

/// Little-endian limb array
pub type Limbs = [u64; MAX_LIMBS];

/* ================================================================= */
/*  Word primitives                                                  */
/* ================================================================= */

/// a + b + carry, returning (sum, carry_out)
#[inline(always)]
pub(crate) fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// a - b - borrow, returning (diff, borrow_out) with borrow in {0, 1}
#[inline(always)]
pub(crate) fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, ((t >> 64) as u64) & 1)
}

/// acc + a * b + carry, returning (low, high)
#[inline(always)]
pub(crate) fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (acc as u128) + (a as u128) * (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/* ================================================================= */
/*  Array helpers                                                    */
/* ================================================================= */

/// Add the low `n` limbs; returns the final carry
#[inline]
pub(crate) fn add_n(a: &Limbs, b: &Limbs, n: usize) -> (Limbs, u64) {
    let mut out = [0u64; MAX_LIMBS];
    let mut carry = 0u64;
    for i in 0..n {
        let (s, c) = adc(a[i], b[i], carry);
        out[i] = s;
        carry = c;
    }
    (out, carry)
}

/// Subtract the low `n` limbs; returns the final borrow
#[inline]
pub(crate) fn sub_n(a: &Limbs, b: &Limbs, n: usize) -> (Limbs, u64) {
    let mut out = [0u64; MAX_LIMBS];
    let mut borrow = 0u64;
    for i in 0..n {
        let (d, br) = sbb(a[i], b[i], borrow);
        out[i] = d;
        borrow = br;
    }
    (out, borrow)
}

/// Subtract a small value; returns the final borrow
pub(crate) fn sub_word(a: &Limbs, w: u64, n: usize) -> (Limbs, u64) {
    let mut b = [0u64; MAX_LIMBS];
    b[0] = w;
    sub_n(a, &b, n)
}

/// Constant-time limb-wise select: `b` when `choice` is set
#[inline]
pub(crate) fn select(a: &Limbs, b: &Limbs, choice: Choice) -> Limbs {
    let mut out = [0u64; MAX_LIMBS];
    for i in 0..MAX_LIMBS {
        out[i] = u64::conditional_select(&a[i], &b[i], choice);
    }
    out
}

/// Constant-time `a < b` on the low `n` limbs
#[inline]
pub(crate) fn lt(a: &Limbs, b: &Limbs, n: usize) -> Choice {
    let (_, borrow) = sub_n(a, b, n);
    Choice::from(borrow as u8)
}

/// Logical right shift by `bits` (< 64 * MAX_LIMBS). Variable time in `bits`.
pub(crate) fn shr(a: &Limbs, bits: usize) -> Limbs {
    let words = bits / 64;
    let rem = bits % 64;
    let mut out = [0u64; MAX_LIMBS];
    for i in 0..MAX_LIMBS.saturating_sub(words) {
        let lo = a[i + words] >> rem;
        let hi = if rem > 0 && i + words + 1 < MAX_LIMBS {
            a[i + words + 1] << (64 - rem)
        } else {
            0
        };
        out[i] = lo | hi;
    }
    out
}

/// Position of the highest set bit plus one. Variable time; public values only.
pub(crate) fn bit_len(a: &Limbs) -> usize {
    for i in (0..MAX_LIMBS).rev() {
        if a[i] != 0 {
            return i * 64 + (64 - a[i].leading_zeros() as usize);
        }
    }
    0
}

/// Bit `i` of `a` as 0 or 1
#[inline(always)]
pub(crate) fn bit(a: &Limbs, i: usize) -> u64 {
    (a[i / 64] >> (i % 64)) & 1
}

/// Number of trailing zero bits. Variable time; public values only.
pub(crate) fn trailing_zeros(a: &Limbs) -> usize {
    for (i, limb) in a.iter().enumerate() {
        if *limb != 0 {
            return i * 64 + limb.trailing_zeros() as usize;
        }
    }
    MAX_LIMBS * 64
}

/// Whether every limb is zero. Variable time; public values only.
pub(crate) fn is_zero_vartime(a: &Limbs) -> bool {
    a.iter().all(|&w| w == 0)
}

/* ================================================================= */
/*  Byte conversion                                                  */
/* ================================================================= */

/// Load a big-endian byte string of at most [`MAX_FIELD_BYTES`] bytes.
///
/// Callers check the length; excess leading bytes are ignored here.
pub(crate) fn from_be_bytes(bytes: &[u8]) -> Limbs {
    let mut out = [0u64; MAX_LIMBS];
    for (i, b) in bytes.iter().rev().take(MAX_FIELD_BYTES).enumerate() {
        out[i / 8] |= (*b as u64) << (8 * (i % 8));
    }
    out
}

/// Write the low `out.len()` bytes of `a` big-endian into `out`.
pub(crate) fn to_be_bytes(a: &Limbs, out: &mut [u8]) {
    let len = out.len();
    for (i, slot) in out.iter_mut().rev().enumerate() {
        debug_assert!(i < MAX_FIELD_BYTES, "output wider than {}", len);
        *slot = (a[i / 8] >> (8 * (i % 8))) as u8;
    }
}
