//! Loaded curve contexts
//!
//! A [`Curve`] is a validated [`CurveParams`] set together with its prime
//! field and every derived constant the point layer needs. Points and
//! field elements borrow the curve, so one loaded context can serve any
//! number of concurrent agreements.

use core::fmt;

use ecka_params::CurveParams;
use subtle::ConstantTimeEq;

use crate::ec::field::{FieldElement, PrimeField};
use crate::ec::isomorphism::MontgomeryMap;
use crate::ec::limbs::{self, Limbs};
use crate::ec::point::AffinePoint;
use crate::ec::scalar::Scalar;
use crate::error::{validate, Error, Result};

/// Curve model a parameter set is natively published in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveModel {
    /// y² = x³ + a·x + b; the canonical model itself
    ShortWeierstrass,
    /// B·v² = u³ + A·u² + u, mapped onto the canonical model
    Montgomery,
}

/// Montgomery coefficients and map constants, Montgomery-form limbs
#[derive(Clone, Debug)]
pub(crate) struct MontgomeryConstants {
    pub(crate) a: Limbs,
    pub(crate) b: Limbs,
    pub(crate) base_u: Limbs,
    pub(crate) alpha: Limbs,
    pub(crate) gamma: Limbs,
}

/// A validated curve context
pub struct Curve {
    params: &'static CurveParams,
    field: PrimeField,
    a: Limbs,
    b: Limbs,
    b3: Limbs,
    g_x: Limbs,
    g_y: Limbs,
    montgomery: Option<MontgomeryConstants>,
}

impl Curve {
    /// Load and validate a parameter set.
    ///
    /// Checks that the curve is non-singular, that the generator lies on the
    /// curve and has the published order, and, for Montgomery-native sets,
    /// that the stored Weierstrass coefficients and map constants agree with
    /// the ones re-derived from A and B.
    pub fn load(params: &'static CurveParams) -> Result<Self> {
        let field = PrimeField::new(params.p)?;

        let decode = |name: &'static str, bytes: &[u8]| -> Result<Limbs> {
            FieldElement::from_bytes(&field, bytes)
                .map(|fe| fe.montgomery_limbs())
                .map_err(|_| Error::param(name, "not a canonical field element"))
        };
        let a = decode("curve coefficient a", params.a)?;
        let b = decode("curve coefficient b", params.b)?;
        let g_x = decode("generator x", params.g_x)?;
        let g_y = decode("generator y", params.g_y)?;
        let b3 = {
            let b = FieldElement::from_montgomery_limbs(&field, b);
            b.double().add(&b).montgomery_limbs()
        };

        let montgomery = match params.montgomery {
            None => None,
            Some(m) => Some(MontgomeryConstants {
                a: decode("Montgomery coefficient A", m.a)?,
                b: decode("Montgomery coefficient B", m.b)?,
                base_u: decode("Montgomery base u", m.base_u)?,
                alpha: decode("isomorphism alpha", m.alpha)?,
                gamma: decode("isomorphism gamma", m.gamma)?,
            }),
        };

        let curve = Curve {
            params,
            field,
            a,
            b,
            b3,
            g_x,
            g_y,
            montgomery,
        };
        curve.validate()?;

        log::debug!(
            "loaded curve {} ({:?}, {}-byte field, {}-byte order)",
            curve.name(),
            curve.model(),
            curve.field_len(),
            curve.order_len()
        );
        Ok(curve)
    }

    fn validate(&self) -> Result<()> {
        let name = self.params.name;

        // 4a³ + 27b² ≠ 0
        let a = self.a();
        let b = self.b();
        let four = FieldElement::from_u64(&self.field, 4);
        let twenty_seven = FieldElement::from_u64(&self.field, 27);
        let disc = four.mul(&a.square().mul(&a)).add(&twenty_seven.mul(&b.square()));
        validate::parameter(!bool::from(disc.is_zero()), "curve", "curve is singular")?;

        let order = limbs::from_be_bytes(self.params.n);
        validate::parameter(
            !limbs::is_zero_vartime(&order) && order[0] & 1 == 1,
            "curve order",
            "order must be odd and non-zero",
        )?;
        validate::parameter(!self.params.h.is_empty(), "cofactor", "cofactor is missing")?;

        let g = self.generator();
        validate::parameter(
            bool::from(g.is_on_curve()),
            "generator",
            "generator is not on the curve",
        )?;
        let n = Scalar::from_be_bytes(self.params.n)?;
        let ng = g.to_projective().mul(&n);
        validate::parameter(
            bool::from(ng.is_identity()),
            "curve order",
            "generator does not have the published order",
        )?;

        if let Some(map) = self.montgomery_map() {
            map.validate_constants(self)?;
        }

        log::trace!("curve {} passed validation", name);
        Ok(())
    }

    /* ---------------------------------------------------------------- */
    /*  Accessors                                                       */
    /* ---------------------------------------------------------------- */

    /// Catalog name, e.g. `"WEI25519"`
    pub fn name(&self) -> &'static str {
        self.params.name
    }

    /// The parameter set this context was loaded from
    pub fn params(&self) -> &'static CurveParams {
        self.params
    }

    /// Native model of the parameter set
    pub fn model(&self) -> CurveModel {
        match self.montgomery {
            Some(_) => CurveModel::Montgomery,
            None => CurveModel::ShortWeierstrass,
        }
    }

    /// The prime field
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Byte length of field elements
    pub fn field_len(&self) -> usize {
        self.field.byte_len()
    }

    /// Byte length of the order
    pub fn order_len(&self) -> usize {
        self.params.n.len()
    }

    /// The order n, big-endian
    pub fn order_bytes(&self) -> &'static [u8] {
        self.params.n
    }

    /// The cofactor h, big-endian
    pub fn cofactor_bytes(&self) -> &'static [u8] {
        self.params.h
    }

    /// Coefficient a
    pub fn a(&self) -> FieldElement<'_> {
        FieldElement::from_montgomery_limbs(&self.field, self.a)
    }

    /// Coefficient b
    pub fn b(&self) -> FieldElement<'_> {
        FieldElement::from_montgomery_limbs(&self.field, self.b)
    }

    /// 3·b, used by the complete formulas
    pub(crate) fn b3(&self) -> FieldElement<'_> {
        FieldElement::from_montgomery_limbs(&self.field, self.b3)
    }

    /// The base point G in the canonical model
    pub fn generator(&self) -> AffinePoint<'_> {
        AffinePoint::from_coordinates_unchecked(
            self,
            FieldElement::from_montgomery_limbs(&self.field, self.g_x),
            FieldElement::from_montgomery_limbs(&self.field, self.g_y),
        )
    }

    /// x³ + a·x + b
    pub fn weierstrass_rhs<'c>(&'c self, x: &FieldElement<'c>) -> FieldElement<'c> {
        x.square().add(&self.a()).mul(x).add(&self.b())
    }

    /// Map to and from the native Montgomery model, when there is one
    pub fn montgomery_map(&self) -> Option<MontgomeryMap<'_>> {
        self.montgomery
            .as_ref()
            .map(|consts| MontgomeryMap::new(self, consts))
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
            || (self.field == other.field
                && bool::from(self.a().ct_eq(&other.a()) & self.b().ct_eq(&other.b())))
    }
}

impl Eq for Curve {}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.params.name)
            .field("model", &self.model())
            .finish()
    }
}

/// Lookup by name over a process-wide, load-once catalog
#[cfg(feature = "std")]
pub mod catalog {
    use super::Curve;
    use crate::error::{Error, Result};
    use once_cell::sync::Lazy;
    use std::vec::Vec;

    /// Every curve in [`ecka_params::CATALOG`], loaded and validated
    pub struct CurveCatalog {
        curves: Vec<Curve>,
    }

    impl CurveCatalog {
        /// Load every shipped parameter set. Fails on the first invalid set.
        pub fn load() -> Result<Self> {
            let curves = ecka_params::CATALOG
                .iter()
                .map(|params| Curve::load(*params))
                .collect::<Result<Vec<_>>>()?;
            Ok(Self { curves })
        }

        /// Find a curve by name or alias; ASCII case is ignored
        pub fn get(&self, name: &str) -> Option<&Curve> {
            self.curves.iter().find(|c| c.params().answers_to(name))
        }

        /// All loaded curves in catalog order
        pub fn iter(&self) -> impl Iterator<Item = &Curve> {
            self.curves.iter()
        }
    }

    static CATALOG: Lazy<core::result::Result<CurveCatalog, Error>> = Lazy::new(|| {
        let loaded = CurveCatalog::load();
        if let Err(e) = &loaded {
            log::error!("curve catalog failed to load: {}", e);
        }
        loaded
    });

    /// The shared catalog, loaded on first use
    pub fn catalog() -> Result<&'static CurveCatalog> {
        Lazy::force(&CATALOG).as_ref().map_err(Clone::clone)
    }

    /// Shorthand for `catalog()?.get(name)`
    pub fn curve(name: &str) -> Result<&'static Curve> {
        catalog()?
            .get(name)
            .ok_or_else(|| Error::param("curve", "no curve with that name in the catalog"))
    }
}
