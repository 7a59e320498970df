//! Birational map between Montgomery and short-Weierstrass models
//!
//! For a Montgomery curve `B·v² = u³ + A·u² + u` the map
//!
//! ```text
//! φ(u, v)   = (u·γ + α, v·γ)          α = A / (3B), γ = 1 / B
//! φ⁻¹(x, y) = ((x − α)·B, y·B)
//! ```
//!
//! lands on `y² = x³ + a·x + b` with `a = (3 − A²) / (3B²)` and
//! `b = (2A³ − 9A) / (27B³)`. The point at infinity maps to itself. Every
//! scalar multiplication runs on the Weierstrass side; this module only
//! moves coordinates across and handles the RFC 7748 u-coordinate wire
//! format.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::ec::curve::{Curve, MontgomeryConstants};
use crate::ec::field::{FieldBytes, FieldElement};
use crate::ec::point::AffinePoint;
use crate::error::{validate, Error, Result};

/// Affine point on the Montgomery model, or the identity
#[derive(Clone, Copy, Debug)]
pub struct MontgomeryPoint<'c> {
    u: FieldElement<'c>,
    v: FieldElement<'c>,
    infinity: Choice,
}

impl<'c> MontgomeryPoint<'c> {
    /// The point at infinity
    pub fn identity(curve: &'c Curve) -> Self {
        let zero = FieldElement::zero(curve.field());
        Self {
            u: zero,
            v: zero,
            infinity: Choice::from(1),
        }
    }

    /// u-coordinate (zero for the identity)
    pub fn u(&self) -> FieldElement<'c> {
        self.u
    }

    /// v-coordinate (zero for the identity)
    pub fn v(&self) -> FieldElement<'c> {
        self.v
    }

    /// Identity flag
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }
}

impl ConstantTimeEq for MontgomeryPoint<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_inf = self.infinity & other.infinity;
        let neither_inf = !self.infinity & !other.infinity;
        both_inf | (neither_inf & self.u.ct_eq(&other.u) & self.v.ct_eq(&other.v))
    }
}

impl PartialEq for MontgomeryPoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

/// The map φ and its inverse for one loaded curve
#[derive(Clone, Copy, Debug)]
pub struct MontgomeryMap<'c> {
    curve: &'c Curve,
    consts: &'c MontgomeryConstants,
}

impl<'c> MontgomeryMap<'c> {
    pub(crate) fn new(curve: &'c Curve, consts: &'c MontgomeryConstants) -> Self {
        Self { curve, consts }
    }

    fn fe(&self, limbs: &crate::ec::limbs::Limbs) -> FieldElement<'c> {
        FieldElement::from_montgomery_limbs(self.curve.field(), *limbs)
    }

    /// Montgomery coefficient A
    pub fn a(&self) -> FieldElement<'c> {
        self.fe(&self.consts.a)
    }

    /// Montgomery coefficient B
    pub fn b(&self) -> FieldElement<'c> {
        self.fe(&self.consts.b)
    }

    /// Shift constant α = A / (3B)
    pub fn alpha(&self) -> FieldElement<'c> {
        self.fe(&self.consts.alpha)
    }

    /// Scale constant γ = 1 / B
    pub fn gamma(&self) -> FieldElement<'c> {
        self.fe(&self.consts.gamma)
    }

    /// The curve the map lands on
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Base point in the native model
    pub fn base_point(&self) -> MontgomeryPoint<'c> {
        self.to_montgomery(&self.curve.generator())
    }

    /* ---------------------------------------------------------------- */
    /*  Coordinates                                                     */
    /* ---------------------------------------------------------------- */

    /// u ↦ x = u·γ + α
    pub fn u_to_x(&self, u: &FieldElement<'c>) -> FieldElement<'c> {
        u.mul(&self.gamma()).add(&self.alpha())
    }

    /// x ↦ u = (x − α)·B
    pub fn x_to_u(&self, x: &FieldElement<'c>) -> FieldElement<'c> {
        x.sub(&self.alpha()).mul(&self.b())
    }

    /// B·v² = u³ + A·u² + u, or the identity
    pub fn is_on_curve(&self, p: &MontgomeryPoint<'c>) -> Choice {
        let lhs = self.b().mul(&p.v.square());
        let one = FieldElement::one(self.curve.field());
        let rhs = p.u.square().add(&self.a().mul(&p.u)).add(&one).mul(&p.u);
        lhs.ct_eq(&rhs) | p.infinity
    }

    /// Build a native point, rejecting pairs not on the Montgomery curve
    pub fn point(&self, u: FieldElement<'c>, v: FieldElement<'c>) -> Result<MontgomeryPoint<'c>> {
        let p = MontgomeryPoint {
            u,
            v,
            infinity: Choice::from(0),
        };
        validate::point(
            bool::from(self.is_on_curve(&p)),
            self.curve.name(),
            "coordinates do not satisfy the Montgomery equation",
        )?;
        Ok(p)
    }

    /* ---------------------------------------------------------------- */
    /*  Points                                                          */
    /* ---------------------------------------------------------------- */

    /// φ: native point to canonical point
    pub fn to_weierstrass(&self, p: &MontgomeryPoint<'c>) -> AffinePoint<'c> {
        let x = self.u_to_x(&p.u);
        let y = p.v.mul(&self.gamma());
        let finite = AffinePoint::from_coordinates_unchecked(self.curve, x, y);
        AffinePoint::conditional_select(&finite, &AffinePoint::identity(self.curve), p.infinity)
    }

    /// φ⁻¹: canonical point to native point
    pub fn to_montgomery(&self, p: &AffinePoint<'c>) -> MontgomeryPoint<'c> {
        let zero = FieldElement::zero(self.curve.field());
        let inf = p.is_identity();
        let u = FieldElement::conditional_select(&self.x_to_u(&p.x()), &zero, inf);
        let v = FieldElement::conditional_select(&p.y().mul(&self.b()), &zero, inf);
        MontgomeryPoint { u, v, infinity: inf }
    }

    /// Native u-coordinate of a canonical point; the identity encodes as 0
    pub fn u_coordinate(&self, p: &AffinePoint<'c>) -> FieldElement<'c> {
        self.to_montgomery(p).u
    }

    /// Recover a canonical point from a u-coordinate alone.
    ///
    /// Either of the two points ±P is returned; the x-only protocols only
    /// ever read the u-coordinate of a multiple, which is the same for both.
    /// The result is unset when u belongs to the quadratic twist.
    pub fn lift_u(&self, u: &FieldElement<'c>) -> CtOption<AffinePoint<'c>> {
        let x = self.u_to_x(u);
        let rhs = self.curve.weierstrass_rhs(&x);
        let y = rhs.sqrt();
        let is_some = y.is_some();
        let y = y.unwrap_or(FieldElement::zero(self.curve.field()));
        CtOption::new(AffinePoint::from_coordinates_unchecked(self.curve, x, y), is_some)
    }

    /* ---------------------------------------------------------------- */
    /*  RFC 7748 wire format                                            */
    /* ---------------------------------------------------------------- */

    /// Decode a little-endian u-coordinate.
    ///
    /// With `mask_top_bit` the most significant bit of the final byte is
    /// ignored (X25519). Values at or above p are reduced.
    pub fn decode_u(&self, bytes: &[u8], mask_top_bit: bool) -> Result<FieldElement<'c>> {
        let field_len = self.curve.field_len();
        validate::length("u-coordinate", bytes.len(), field_len)?;
        let mut be = FieldBytes::zeroed(field_len);
        for (dst, src) in be.as_mut().iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        if mask_top_bit {
            be.as_mut()[0] &= 0x7f;
        }
        FieldElement::from_bytes_reduced(self.curve.field(), be.as_ref())
            .map_err(|_| Error::point(self.curve.name(), "u-coordinate does not fit the field"))
    }

    /// Little-endian encoding of a u-coordinate
    pub fn encode_u(&self, u: &FieldElement<'c>) -> FieldBytes {
        let mut out = u.to_bytes();
        out.as_mut().reverse();
        out
    }

    /* ---------------------------------------------------------------- */
    /*  Load-time checks                                                */
    /* ---------------------------------------------------------------- */

    /// Re-derive a, b, α and γ from A and B and compare with the stored set
    pub(crate) fn validate_constants(&self, curve: &Curve) -> Result<()> {
        let field = curve.field();
        let small = |n: u64| FieldElement::from_u64(field, n);
        let big_a = self.a();
        let big_b = self.b();

        let b_inv = Option::<FieldElement<'_>>::from(big_b.invert())
            .ok_or_else(|| Error::param("Montgomery coefficient B", "B must be non-zero"))?;
        validate::parameter(
            !bool::from(big_a.square().ct_eq(&small(4))),
            "Montgomery coefficient A",
            "A² = 4 gives a singular curve",
        )?;

        let three_inv = Option::<FieldElement<'_>>::from(small(3).invert())
            .ok_or_else(|| Error::param("field modulus", "3 is not invertible"))?;
        let b_inv2 = b_inv.square();
        let b_inv3 = b_inv2.mul(&b_inv);

        // a = (3 − A²) / (3B²)
        let a = small(3).sub(&big_a.square()).mul(&three_inv).mul(&b_inv2);
        // b = (2A³ − 9A) / (27B³)
        let a3 = big_a.square().mul(&big_a);
        let b = a3
            .double()
            .sub(&small(9).mul(&big_a))
            .mul(&three_inv.square().mul(&three_inv))
            .mul(&b_inv3);
        let alpha = big_a.mul(&three_inv).mul(&b_inv);
        let gamma = b_inv;

        validate::parameter(
            bool::from(a.ct_eq(&curve.a())),
            "curve coefficient a",
            "does not match the Montgomery coefficients",
        )?;
        validate::parameter(
            bool::from(b.ct_eq(&curve.b())),
            "curve coefficient b",
            "does not match the Montgomery coefficients",
        )?;
        validate::parameter(
            bool::from(alpha.ct_eq(&self.alpha())),
            "isomorphism alpha",
            "alpha differs from A / 3B",
        )?;
        validate::parameter(
            bool::from(gamma.ct_eq(&self.gamma())),
            "isomorphism gamma",
            "gamma differs from 1 / B",
        )?;

        let base_u = self.fe(&self.consts.base_u);
        validate::parameter(
            bool::from(self.u_to_x(&base_u).ct_eq(&curve.generator().x())),
            "Montgomery base u",
            "base point does not map onto the generator",
        )?;
        Ok(())
    }
}
