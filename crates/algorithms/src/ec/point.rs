//! Canonical short-Weierstrass points
//!
//! [`ProjectivePoint`] uses homogeneous coordinates (X : Y : Z) with the
//! identity at (0 : 1 : 0). Addition and doubling are the complete formulas
//! of Renes, Costello and Batina (ePrint 2015/1060, algorithms 1 and 3),
//! valid for every `a`, so neither secret-dependent branching between add
//! and double nor special handling of the identity is needed.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::ec::curve::Curve;
use crate::ec::field::{FieldBytes, FieldElement};
use crate::ec::ladder;
use crate::ec::scalar::Scalar;
use crate::error::{Error, Result};

/// Format of a SEC1 point encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// The single byte `0x00`
    Identity,
    /// `0x04 ∥ x ∥ y`
    Uncompressed,
    /// `0x02/0x03 ∥ x`
    Compressed,
}

/// Affine point in the canonical model, or the identity
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<'c> {
    curve: &'c Curve,
    x: FieldElement<'c>,
    y: FieldElement<'c>,
    infinity: Choice,
}

/// Projective point in the canonical model
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint<'c> {
    curve: &'c Curve,
    x: FieldElement<'c>,
    y: FieldElement<'c>,
    z: FieldElement<'c>,
}

impl<'c> AffinePoint<'c> {
    /// The point at infinity
    pub fn identity(curve: &'c Curve) -> Self {
        let field = curve.field();
        Self {
            curve,
            x: FieldElement::zero(field),
            y: FieldElement::zero(field),
            infinity: Choice::from(1),
        }
    }

    /// Build a point from coordinates, rejecting pairs not on the curve
    pub fn new(curve: &'c Curve, x: FieldElement<'c>, y: FieldElement<'c>) -> Result<Self> {
        let p = Self::from_coordinates_unchecked(curve, x, y);
        if !bool::from(p.is_on_curve()) {
            return Err(Error::point(curve.name(), "coordinates do not satisfy the curve equation"));
        }
        Ok(p)
    }

    pub(crate) fn from_coordinates_unchecked(
        curve: &'c Curve,
        x: FieldElement<'c>,
        y: FieldElement<'c>,
    ) -> Self {
        Self {
            curve,
            x,
            y,
            infinity: Choice::from(0),
        }
    }

    /// Build a point from big-endian coordinate encodings
    pub fn from_coordinates(curve: &'c Curve, x: &[u8], y: &[u8]) -> Result<Self> {
        let field = curve.field();
        let x = FieldElement::from_bytes(field, x)
            .map_err(|_| Error::point(curve.name(), "x is not a field element"))?;
        let y = FieldElement::from_bytes(field, y)
            .map_err(|_| Error::point(curve.name(), "y is not a field element"))?;
        Self::new(curve, x, y)
    }

    /// The curve this point belongs to
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Identity flag
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// x-coordinate (zero for the identity)
    pub fn x(&self) -> FieldElement<'c> {
        self.x
    }

    /// y-coordinate (zero for the identity)
    pub fn y(&self) -> FieldElement<'c> {
        self.y
    }

    /// Big-endian x-coordinate
    pub fn x_bytes(&self) -> FieldBytes {
        self.x.to_bytes()
    }

    /// Big-endian y-coordinate
    pub fn y_bytes(&self) -> FieldBytes {
        self.y.to_bytes()
    }

    /// y² = x³ + a·x + b, or the identity
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = self.curve.weierstrass_rhs(&self.x);
        lhs.ct_eq(&rhs) | self.infinity
    }

    /// −P
    pub fn neg(&self) -> Self {
        Self {
            y: self.y.neg(),
            ..*self
        }
    }

    /// Lift to projective coordinates
    pub fn to_projective(&self) -> ProjectivePoint<'c> {
        let p = ProjectivePoint {
            curve: self.curve,
            x: self.x,
            y: self.y,
            z: FieldElement::one(self.curve.field()),
        };
        let identity = ProjectivePoint::identity(self.curve);
        ProjectivePoint::conditional_select(&p, &identity, self.infinity)
    }

    /* ---------------------------------------------------------------- */
    /*  SEC1 encoding                                                   */
    /* ---------------------------------------------------------------- */

    /// Classify a SEC1 encoding by its prefix and length
    pub fn detect_format(curve: &Curve, bytes: &[u8]) -> Result<PointFormat> {
        let l = curve.field_len();
        match (bytes.first().copied(), bytes.len()) {
            (Some(0x00), 1) => Ok(PointFormat::Identity),
            (Some(0x04), n) if n == 1 + 2 * l => Ok(PointFormat::Uncompressed),
            (Some(0x02 | 0x03), n) if n == 1 + l => Ok(PointFormat::Compressed),
            (None, _) => Err(Error::point(curve.name(), "empty point encoding")),
            _ => Err(Error::point(curve.name(), "unrecognised point encoding")),
        }
    }

    /// Decode a SEC1 point, verifying it lies on the curve.
    ///
    /// The single byte `0x00` decodes to the identity; callers that must not
    /// accept it check [`Self::is_identity`].
    pub fn from_sec1(curve: &'c Curve, bytes: &[u8]) -> Result<Self> {
        let l = curve.field_len();
        match Self::detect_format(curve, bytes)? {
            PointFormat::Identity => Ok(Self::identity(curve)),
            PointFormat::Uncompressed => {
                Self::from_coordinates(curve, &bytes[1..1 + l], &bytes[1 + l..])
            }
            PointFormat::Compressed => {
                let x = FieldElement::from_bytes(curve.field(), &bytes[1..])
                    .map_err(|_| Error::point(curve.name(), "x is not a field element"))?;
                let rhs = curve.weierstrass_rhs(&x);
                let y = Option::<FieldElement<'c>>::from(rhs.sqrt())
                    .ok_or_else(|| Error::point(curve.name(), "x has no matching y on the curve"))?;
                let want_odd = Choice::from(bytes[0] & 1);
                let flip = y.is_odd() ^ want_odd;
                let y = FieldElement::conditional_select(&y, &y.neg(), flip);
                Ok(Self::from_coordinates_unchecked(curve, x, y))
            }
        }
    }

    /// SEC1 uncompressed encoding `0x04 ∥ x ∥ y`, or `0x00` for the identity
    #[cfg(feature = "alloc")]
    pub fn to_uncompressed(&self) -> Vec<u8> {
        if bool::from(self.infinity) {
            return Vec::from([0x00u8]);
        }
        let mut out = Vec::with_capacity(1 + 2 * self.curve.field_len());
        out.push(0x04);
        out.extend_from_slice(self.x.to_bytes().as_ref());
        out.extend_from_slice(self.y.to_bytes().as_ref());
        out
    }

    /// SEC1 compressed encoding `0x02/0x03 ∥ x`, or `0x00` for the identity
    #[cfg(feature = "alloc")]
    pub fn to_compressed(&self) -> Vec<u8> {
        if bool::from(self.infinity) {
            return Vec::from([0x00u8]);
        }
        let mut out = Vec::with_capacity(1 + self.curve.field_len());
        out.push(0x02 | self.y.is_odd().unwrap_u8());
        out.extend_from_slice(self.x.to_bytes().as_ref());
        out
    }
}

impl ConstantTimeEq for AffinePoint<'_> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_inf = self.infinity & other.infinity;
        let neither_inf = !self.infinity & !other.infinity;
        both_inf | (neither_inf & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl PartialEq for AffinePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConditionallySelectable for AffinePoint<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            curve: a.curve,
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: (a.infinity & !choice) | (b.infinity & choice),
        }
    }
}

impl<'c> ProjectivePoint<'c> {
    /// Identity (0 : 1 : 0)
    pub fn identity(curve: &'c Curve) -> Self {
        let field = curve.field();
        Self {
            curve,
            x: FieldElement::zero(field),
            y: FieldElement::one(field),
            z: FieldElement::zero(field),
        }
    }

    /// The curve's base point
    pub fn generator(curve: &'c Curve) -> Self {
        curve.generator().to_projective()
    }

    /// The curve this point belongs to
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Z = 0
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Whether the affine y-coordinate is zero on a finite point, i.e. the
    /// point has order two
    pub(crate) fn is_two_torsion(&self) -> Choice {
        self.y.is_zero() & !self.z.is_zero()
    }

    /// Normalize to affine coordinates with one constant-time inversion.
    ///
    /// Any Z = 0 representative, including the degenerate (0 : 0 : 0),
    /// normalizes to the identity.
    pub fn to_affine(&self) -> AffinePoint<'c> {
        let z_inv = self.z.invert_or_zero();
        let x = self.x.mul(&z_inv);
        let y = self.y.mul(&z_inv);
        AffinePoint {
            curve: self.curve,
            x,
            y,
            infinity: self.z.is_zero(),
        }
    }

    /// −P
    pub fn neg(&self) -> Self {
        Self {
            y: self.y.neg(),
            ..*self
        }
    }

    /// Complete addition (RCB algorithm 1)
    pub fn add(&self, other: &Self) -> Self {
        let a = self.curve.a();
        let b3 = self.curve.b3();
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let mut t0 = x1.mul(x2);
        let mut t1 = y1.mul(y2);
        let mut t2 = z1.mul(z2);
        let t3 = x1.add(y1).mul(&x2.add(y2)).sub(&t0.add(&t1));
        let mut t4 = x1.add(z1).mul(&x2.add(z2)).sub(&t0.add(&t2));
        let t5 = y1.add(z1).mul(&y2.add(z2)).sub(&t1.add(&t2));

        let mut z3 = a.mul(&t4);
        let mut x3 = b3.mul(&t2);
        z3 = x3.add(&z3);
        x3 = t1.sub(&z3);
        z3 = t1.add(&z3);
        let mut y3 = x3.mul(&z3);

        t1 = t0.double().add(&t0);
        t2 = a.mul(&t2);
        t4 = b3.mul(&t4);
        t1 = t1.add(&t2);
        t2 = t0.sub(&t2);
        t2 = a.mul(&t2);
        t4 = t4.add(&t2);
        t0 = t1.mul(&t4);
        y3 = y3.add(&t0);

        t0 = t5.mul(&t4);
        x3 = t3.mul(&x3);
        x3 = x3.sub(&t0);
        t0 = t3.mul(&t1);
        z3 = t5.mul(&z3);
        z3 = z3.add(&t0);

        Self {
            curve: self.curve,
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Complete doubling (RCB algorithm 3)
    pub fn double(&self) -> Self {
        let a = self.curve.a();
        let b3 = self.curve.b3();
        let (x, y, z) = (&self.x, &self.y, &self.z);

        let mut t0 = x.square();
        let t1 = y.square();
        let mut t2 = z.square();
        let mut t3 = x.mul(y).double();
        let mut z3 = x.mul(z).double();

        let mut x3 = a.mul(&z3);
        let mut y3 = b3.mul(&t2);
        y3 = x3.add(&y3);
        x3 = t1.sub(&y3);
        y3 = t1.add(&y3);
        y3 = x3.mul(&y3);
        x3 = t3.mul(&x3);

        z3 = b3.mul(&z3);
        t2 = a.mul(&t2);
        t3 = t0.sub(&t2);
        t3 = a.mul(&t3);
        t3 = t3.add(&z3);

        z3 = t0.double();
        t0 = z3.add(&t0);
        t0 = t0.add(&t2);
        t0 = t0.mul(&t3);
        y3 = y3.add(&t0);

        t2 = y.mul(z).double();
        t0 = t2.mul(&t3);
        x3 = x3.sub(&t0);
        z3 = t2.mul(&t1);
        z3 = z3.double().double();

        Self {
            curve: self.curve,
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Constant-time scalar multiplication `k · self`
    pub fn mul(&self, k: &Scalar) -> Self {
        ladder::mul(self, k)
    }
}

impl ConstantTimeEq for ProjectivePoint<'_> {
    /// Cross-multiplied comparison; independent of the representative
    fn ct_eq(&self, other: &Self) -> Choice {
        let x_eq = self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z));
        let y_eq = self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z));
        x_eq & y_eq
    }
}

impl PartialEq for ProjectivePoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConditionallySelectable for ProjectivePoint<'_> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            curve: a.curve,
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
