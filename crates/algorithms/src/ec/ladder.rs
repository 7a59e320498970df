//! Montgomery ladder over the canonical model
//!
//! Every scalar bit costs one complete addition and one complete doubling
//! with two conditional swaps around them, so the operation sequence depends
//! only on the scalar's byte length. A zero scalar and an identity input
//! both fall out of the formulas as the identity without a separate path.

use subtle::{Choice, ConditionallySelectable};

use crate::ec::point::ProjectivePoint;
use crate::ec::scalar::Scalar;

/// `k · p` in constant time for a fixed `k` length
pub(crate) fn mul<'c>(p: &ProjectivePoint<'c>, k: &Scalar) -> ProjectivePoint<'c> {
    let bytes = k.as_be_bytes();
    let identity = ProjectivePoint::identity(p.curve());

    let mut r0 = identity;
    let mut r1 = *p;
    for byte in bytes {
        for i in (0..8).rev() {
            let bit = Choice::from((byte >> i) & 1);
            ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
            r1 = r0.add(&r1);
            r0 = r0.double();
            ProjectivePoint::conditional_swap(&mut r0, &mut r1, bit);
        }
    }

    // The ladder keeps R1 − R0 = P. When P has order two the complete
    // addition meets its one exceptional input and returns (0 : 0 : 0);
    // the true result is P for odd k and O otherwise.
    let odd = Choice::from(bytes.last().map_or(0, |b| b & 1));
    let torsion_result = ProjectivePoint::conditional_select(&identity, p, odd);
    ProjectivePoint::conditional_select(&r0, &torsion_result, p.is_two_torsion())
}
