//! Property-based tests for the agreement engine and the isomorphism layer

use ecka_algorithms::ec::{self, Clamping, ProjectivePoint, Scalar};
use ecka_kem::ecdh::{EcdhEngine, EcdhVariant};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const NIST_CURVES: &[&str] = &["SECP224R1", "SECP256R1", "SECP384R1"];

fn engine(variant: EcdhVariant, curve: &str) -> EcdhEngine<'static> {
    EcdhEngine::for_variant(variant, curve).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn x25519_agreement_commutes(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let e = engine(EcdhVariant::X25519, "WEI25519");
        let pa = e.derive_public(&a).unwrap();
        let pb = e.derive_public(&b).unwrap();
        prop_assert_eq!(e.compute_shared(&a, &pb).unwrap(), e.compute_shared(&b, &pa).unwrap());
    }

    #[test]
    fn x448_agreement_commutes(seed in any::<u64>()) {
        let e = engine(EcdhVariant::X448, "WEI448");
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let a = e.generate_private(&mut rng).unwrap();
        let b = e.generate_private(&mut rng).unwrap();
        let pa = e.derive_public(&a).unwrap();
        let pb = e.derive_public(&b).unwrap();
        prop_assert_eq!(e.compute_shared(&a, &pb).unwrap(), e.compute_shared(&b, &pa).unwrap());
    }

    #[test]
    fn ecccdh_agreement_commutes(
        seed in any::<u64>(),
        curve in prop::sample::select(NIST_CURVES)
    ) {
        let e = engine(EcdhVariant::Ecccdh, curve);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let a = e.generate_private(&mut rng).unwrap();
        let b = e.generate_private(&mut rng).unwrap();
        let pa = e.derive_public(&a).unwrap();
        let pb = e.derive_public(&b).unwrap();
        prop_assert_eq!(pa.len(), e.public_key_len());
        prop_assert_eq!(e.compute_shared(&a, &pb).unwrap(), e.compute_shared(&b, &pa).unwrap());
    }

    #[test]
    fn agreement_is_deterministic(k in any::<[u8; 32]>(), peer_seed in any::<[u8; 32]>()) {
        let e = engine(EcdhVariant::X25519, "WEI25519");
        let peer = e.derive_public(&peer_seed).unwrap();
        prop_assert_eq!(e.derive_public(&k).unwrap(), e.derive_public(&k).unwrap());
        prop_assert_eq!(e.compute_shared(&k, &peer).unwrap(), e.compute_shared(&k, &peer).unwrap());
    }

    #[test]
    fn clamping_is_idempotent(
        k in any::<[u8; 32]>(),
        k448 in prop::collection::vec(any::<u8>(), 56)
    ) {
        let mut once = k;
        Clamping::X25519.apply(&mut once);
        let mut twice = once;
        Clamping::X25519.apply(&mut twice);
        prop_assert_eq!(once, twice);

        let mut once = k448.clone();
        Clamping::X448.apply(&mut once);
        let mut twice = once.clone();
        Clamping::X448.apply(&mut twice);
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn clamped_and_raw_keys_agree(k in any::<[u8; 32]>()) {
        let e = engine(EcdhVariant::X25519, "WEI25519");
        let mut clamped = k;
        Clamping::X25519.apply(&mut clamped);
        prop_assert_eq!(e.derive_public(&k).unwrap(), e.derive_public(&clamped).unwrap());
    }

    #[test]
    fn isomorphism_round_trips(
        k in any::<[u8; 32]>(),
        curve in prop::sample::select(vec!["WEI25519", "WEI448"])
    ) {
        let curve = ec::curve(curve).unwrap();
        let map = curve.montgomery_map().unwrap();
        let scalar = Scalar::from_be_bytes(&k).unwrap();
        let p = ProjectivePoint::generator(curve).mul(&scalar).to_affine();

        let m = map.to_montgomery(&p);
        prop_assert!(bool::from(map.is_on_curve(&m)));
        prop_assert_eq!(map.to_weierstrass(&m), p);
    }
}
