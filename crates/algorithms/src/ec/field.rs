//! Prime-field arithmetic over a runtime modulus
//!
//! [`PrimeField`] holds the modulus and every precomputed constant the
//! Montgomery-form arithmetic needs. [`FieldElement`] borrows its field, so
//! elements of different fields cannot be mixed by accident, and is `Copy`
//! so the point formulas read like the textbook.
//!
//! All operations on elements are constant-time in the element values.
//! Exponents passed to [`FieldElement::pow_vartime`] are public.

use core::fmt;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::limbs::{self, Limbs, MAX_FIELD_BYTES, MAX_LIMBS};
use crate::error::{validate, Error, Result};

/// Largest non-residue candidate tried while deriving square-root constants
const NON_RESIDUE_SEARCH_LIMIT: u64 = 1000;

/// Modulus and Montgomery constants of GF(p)
#[derive(Clone, Debug)]
pub struct PrimeField {
    /// p, little-endian limbs
    modulus: Limbs,
    /// Active limb count
    nlimbs: usize,
    /// Byte length of canonical encodings
    byte_len: usize,
    /// −p⁻¹ mod 2⁶⁴
    inv: u64,
    /// R mod p, i.e. one in Montgomery form
    r: Limbs,
    /// R² mod p
    r2: Limbs,
    /// p − 2, the inversion exponent
    p_minus_2: Limbs,
    /// Largest c1 with 2^c1 | p − 1
    two_adicity: usize,
    /// (c2 − 1) / 2 where p − 1 = c2 · 2^c1
    sqrt_exp: Limbs,
    /// c4^c2 for the smallest non-residue c4, Montgomery form
    sqrt_root: Limbs,
}

impl PrimeField {
    /// Derive all constants for the prime given as big-endian bytes.
    ///
    /// Primality is not tested; the catalog only carries published primes.
    /// The value must be odd, greater than 3, and at most 576 bits wide.
    pub fn new(modulus_be: &[u8]) -> Result<Self> {
        validate::max_length("field modulus", modulus_be.len(), MAX_FIELD_BYTES)?;
        let modulus = limbs::from_be_bytes(modulus_be);
        validate::parameter(!limbs::is_zero_vartime(&modulus), "field modulus", "modulus is zero")?;
        validate::parameter(modulus[0] & 1 == 1, "field modulus", "modulus must be odd")?;

        let bits = limbs::bit_len(&modulus);
        validate::parameter(bits > 2, "field modulus", "modulus must exceed 3")?;
        let nlimbs = (bits + 63) / 64;
        let byte_len = (bits + 7) / 8;
        validate::length("field modulus", modulus_be.len(), byte_len)?;

        // Newton iteration doubles the correct low bits each round: 1 → 64.
        let mut inv = 1u64;
        for _ in 0..6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(modulus[0].wrapping_mul(inv)));
        }
        let inv = inv.wrapping_neg();

        // R mod p and R² mod p by repeated modular doubling of 1.
        let mut acc = [0u64; MAX_LIMBS];
        acc[0] = 1;
        for _ in 0..64 * nlimbs {
            acc = double_mod(&acc, &modulus, nlimbs);
        }
        let r = acc;
        for _ in 0..64 * nlimbs {
            acc = double_mod(&acc, &modulus, nlimbs);
        }
        let r2 = acc;

        let (p_minus_1, _) = limbs::sub_word(&modulus, 1, nlimbs);
        let (p_minus_2, _) = limbs::sub_word(&modulus, 2, nlimbs);
        let two_adicity = limbs::trailing_zeros(&p_minus_1);
        let odd_part = limbs::shr(&p_minus_1, two_adicity);
        let sqrt_exp = limbs::shr(&odd_part, 1);

        let mut field = PrimeField {
            modulus,
            nlimbs,
            byte_len,
            inv,
            r,
            r2,
            p_minus_2,
            two_adicity,
            sqrt_exp,
            sqrt_root: [0u64; MAX_LIMBS],
        };

        let sqrt_root = {
            let euler_exp = limbs::shr(&p_minus_1, 1);
            let minus_one = FieldElement::one(&field).neg();
            let mut found = None;
            for candidate in 2..NON_RESIDUE_SEARCH_LIMIT {
                let c = FieldElement::from_u64(&field, candidate);
                if bool::from(c.pow_vartime(&euler_exp).ct_eq(&minus_one)) {
                    found = Some(c.pow_vartime(&odd_part).limbs);
                    break;
                }
            }
            found.ok_or_else(|| Error::param("field modulus", "no quadratic non-residue found"))?
        };
        field.sqrt_root = sqrt_root;

        log::trace!(
            "prime field loaded: {} bits, {} limbs, 2-adicity {}",
            bits,
            nlimbs,
            two_adicity
        );
        Ok(field)
    }

    /// Byte length of canonical element encodings
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Modulus bit length
    pub fn bit_len(&self) -> usize {
        limbs::bit_len(&self.modulus)
    }

    /// Largest c1 with 2^c1 | p − 1
    pub fn two_adicity(&self) -> usize {
        self.two_adicity
    }

    /// The modulus as big-endian bytes
    pub fn modulus_bytes(&self) -> FieldBytes {
        let mut out = FieldBytes::zeroed(self.byte_len);
        limbs::to_be_bytes(&self.modulus, out.as_mut());
        out
    }

    /* ---------------------------------------------------------------- */
    /*  Montgomery core                                                 */
    /* ---------------------------------------------------------------- */

    /// CIOS Montgomery multiplication: a · b · R⁻¹ mod p
    ///
    /// Inputs must be below R; the output is fully reduced whenever
    /// a · b < R · p, which holds for every caller.
    fn mont_mul(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let n = self.nlimbs;
        let mut t = [0u64; MAX_LIMBS + 2];

        for i in 0..n {
            let mut carry = 0u64;
            for j in 0..n {
                let (lo, hi) = limbs::mac(t[j], a[j], b[i], carry);
                t[j] = lo;
                carry = hi;
            }
            let (lo, hi) = limbs::adc(t[n], carry, 0);
            t[n] = lo;
            t[n + 1] = hi;

            let m = t[0].wrapping_mul(self.inv);
            let (_, mut carry) = limbs::mac(t[0], m, self.modulus[0], 0);
            for j in 1..n {
                let (lo, hi) = limbs::mac(t[j], m, self.modulus[j], carry);
                t[j - 1] = lo;
                carry = hi;
            }
            let (lo, hi) = limbs::adc(t[n], carry, 0);
            t[n - 1] = lo;
            t[n] = t[n + 1] + hi;
        }

        let mut res = [0u64; MAX_LIMBS];
        res[..n].copy_from_slice(&t[..n]);
        self.reduce_once(&res, t[n])
    }

    /// Subtract p once if `carry:a` ≥ p
    #[inline]
    fn reduce_once(&self, a: &Limbs, carry: u64) -> Limbs {
        let (diff, borrow) = limbs::sub_n(a, &self.modulus, self.nlimbs);
        let need_reduce = (carry | (borrow ^ 1)) & 1;
        limbs::select(a, &diff, Choice::from(need_reduce as u8))
    }

    fn to_montgomery(&self, a: &Limbs) -> Limbs {
        self.mont_mul(a, &self.r2)
    }

    fn from_montgomery(&self, a: &Limbs) -> Limbs {
        let mut one = [0u64; MAX_LIMBS];
        one[0] = 1;
        self.mont_mul(a, &one)
    }
}

/// (a + a) mod p for a < p
fn double_mod(a: &Limbs, modulus: &Limbs, n: usize) -> Limbs {
    let (sum, carry) = limbs::add_n(a, a, n);
    let (diff, borrow) = limbs::sub_n(&sum, modulus, n);
    let need_reduce = (carry | (borrow ^ 1)) & 1;
    limbs::select(&sum, &diff, Choice::from(need_reduce as u8))
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

impl Eq for PrimeField {}

/// Big-endian field element encoding sized to its field
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct FieldBytes {
    bytes: [u8; MAX_FIELD_BYTES],
    len: usize,
}

impl FieldBytes {
    pub(crate) fn zeroed(len: usize) -> Self {
        Self {
            bytes: [0u8; MAX_FIELD_BYTES],
            len,
        }
    }

    /// Number of meaningful bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a loaded field
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for FieldBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl AsMut<[u8]> for FieldBytes {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }
}

impl fmt::Debug for FieldBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.as_ref() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Element of GF(p), held in Montgomery form
#[derive(Clone, Copy)]
pub struct FieldElement<'f> {
    field: &'f PrimeField,
    limbs: Limbs,
}

impl<'f> FieldElement<'f> {
    /* ================================================================= */
    /*  Construction                                                     */
    /* ================================================================= */

    /// The additive identity: 0
    #[inline]
    pub fn zero(field: &'f PrimeField) -> Self {
        Self {
            field,
            limbs: [0u64; MAX_LIMBS],
        }
    }

    /// The multiplicative identity: 1
    #[inline]
    pub fn one(field: &'f PrimeField) -> Self {
        Self {
            field,
            limbs: field.r,
        }
    }

    /// Build an element from a small literal. Values ≥ p are reduced.
    pub fn from_u64(field: &'f PrimeField, n: u64) -> Self {
        let mut raw = [0u64; MAX_LIMBS];
        raw[0] = n;
        Self::from_raw_reduced(field, &raw)
    }

    /// Create a field element from big-endian bytes.
    ///
    /// The encoding must be exactly `field.byte_len()` bytes and encode a
    /// value below p.
    pub fn from_bytes(field: &'f PrimeField, bytes: &[u8]) -> Result<Self> {
        validate::length("field element", bytes.len(), field.byte_len)?;
        let raw = limbs::from_be_bytes(bytes);
        let in_range = limbs::lt(&raw, &field.modulus, field.nlimbs);
        if !bool::from(in_range) {
            return Err(Error::param("field element", "value is not below the modulus"));
        }
        Ok(Self {
            field,
            limbs: field.to_montgomery(&raw),
        })
    }

    /// Interpret big-endian bytes as an integer and reduce it modulo p.
    ///
    /// Accepts up to `8 · nlimbs` bytes, so any value below R.
    pub fn from_bytes_reduced(field: &'f PrimeField, bytes: &[u8]) -> Result<Self> {
        validate::max_length("field element", bytes.len(), field.nlimbs * 8)?;
        Ok(Self::from_raw_reduced(field, &limbs::from_be_bytes(bytes)))
    }

    /// x < R gives x · R² · R⁻¹ < 2p; one conditional subtraction suffices
    fn from_raw_reduced(field: &'f PrimeField, raw: &Limbs) -> Self {
        let mont = field.to_montgomery(raw);
        Self { field, limbs: mont }
    }

    /// Canonical big-endian encoding
    pub fn to_bytes(&self) -> FieldBytes {
        let mut out = FieldBytes::zeroed(self.field.byte_len);
        let normal = self.field.from_montgomery(&self.limbs);
        limbs::to_be_bytes(&normal, out.as_mut());
        out
    }

    /// The field this element belongs to
    pub fn field(&self) -> &'f PrimeField {
        self.field
    }

    /// Rebuild an element from limbs captured with [`Self::montgomery_limbs`]
    #[inline]
    pub(crate) fn from_montgomery_limbs(field: &'f PrimeField, limbs: Limbs) -> Self {
        Self { field, limbs }
    }

    /// Raw Montgomery-form limbs, for storage in long-lived contexts
    #[inline]
    pub(crate) fn montgomery_limbs(&self) -> Limbs {
        self.limbs
    }

    /* ================================================================= */
    /*  Predicates                                                       */
    /* ================================================================= */

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        let mut acc = 0u64;
        for limb in self.limbs.iter() {
            acc |= limb;
        }
        acc.ct_eq(&0)
    }

    /// Parity of the canonical value
    pub fn is_odd(&self) -> Choice {
        let normal = self.field.from_montgomery(&self.limbs);
        Choice::from((normal[0] & 1) as u8)
    }

    /* ================================================================= */
    /*  Arithmetic                                                       */
    /* ================================================================= */

    /// Constant-time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = limbs::add_n(&self.limbs, &other.limbs, self.field.nlimbs);
        Self {
            field: self.field,
            limbs: self.field.reduce_once(&sum, carry),
        }
    }

    /// Constant-time subtraction: (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let n = self.field.nlimbs;
        let (diff, borrow) = limbs::sub_n(&self.limbs, &other.limbs, n);
        // On borrow, add p back.
        let (fixed, _) = limbs::add_n(&diff, &self.field.modulus, n);
        Self {
            field: self.field,
            limbs: limbs::select(&diff, &fixed, Choice::from(borrow as u8)),
        }
    }

    /// Negation: −self mod p
    pub fn neg(&self) -> Self {
        Self::zero(self.field).sub(self)
    }

    /// 2 · self
    #[inline]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Montgomery multiplication
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            field: self.field,
            limbs: self.field.mont_mul(&self.limbs, &other.limbs),
        }
    }

    /// Squaring
    #[inline]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// self^exp for a public exponent in little-endian limbs
    ///
    /// Square-and-multiply; the running time depends on `exp` only.
    pub fn pow_vartime(&self, exp: &Limbs) -> Self {
        let mut res = Self::one(self.field);
        for i in (0..limbs::bit_len(exp)).rev() {
            res = res.square();
            if limbs::bit(exp, i) == 1 {
                res = res.mul(self);
            }
        }
        res
    }

    /// Multiplicative inverse via Fermat's little theorem.
    ///
    /// The exponent p − 2 is public, so the ladder of squarings is fixed.
    /// Zero has no inverse; the `CtOption` is then unset.
    pub fn invert(&self) -> CtOption<Self> {
        let inv = self.pow_vartime(&self.field.p_minus_2);
        CtOption::new(inv, !self.is_zero())
    }

    /// Inverse, with zero mapping to zero
    pub(crate) fn invert_or_zero(&self) -> Self {
        self.pow_vartime(&self.field.p_minus_2)
    }

    /// Square root, constant-time Tonelli-Shanks (RFC 9380 appendix I.4).
    ///
    /// Runs the same sequence of operations for every input. The returned
    /// root is unset when `self` is not a square.
    pub fn sqrt(&self) -> CtOption<Self> {
        let field = self.field;
        let one = Self::one(field);

        let mut z = self.pow_vartime(&field.sqrt_exp);
        let mut t = z.square().mul(self);
        z = z.mul(self);
        let mut b = t;
        let mut c = Self {
            field,
            limbs: field.sqrt_root,
        };

        for k in (2..=field.two_adicity).rev() {
            for _ in 0..(k - 2) {
                b = b.square();
            }
            let e = b.ct_eq(&one);
            let zc = z.mul(&c);
            z = Self::conditional_select(&zc, &z, e);
            c = c.square();
            let tc = t.mul(&c);
            t = Self::conditional_select(&tc, &t, e);
            b = t;
        }

        let is_root = z.square().ct_eq(self);
        CtOption::new(z, is_root)
    }

    /// Whether `self` is a square (zero counts as one)
    pub fn is_square(&self) -> Choice {
        self.sqrt().is_some()
    }
}

impl ConstantTimeEq for FieldElement<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0u64;
        for i in 0..MAX_LIMBS {
            acc |= self.limbs[i] ^ other.limbs[i];
        }
        acc.ct_eq(&0)
    }
}

impl ConditionallySelectable for FieldElement<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            field: a.field,
            limbs: limbs::select(&a.limbs, &b.limbs, choice),
        }
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement<'_> {}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:?})", self.to_bytes())
    }
}
