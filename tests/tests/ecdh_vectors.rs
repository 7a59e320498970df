//! Fixture harness over the compiled-in vectors and the JSON fixture file

use ecka_api::{Error as ApiError, KeyAgreement, Serialize, SerializeSecret};
use ecka_kem::ecdh::{X25519PublicKey, X25519SecretKey};
use ecka_kem::X25519;
use ecka_params::traditional::ecdh::{
    ECDH_P224_PRIVATE_KEY_SIZE, ECDH_P224_PUBLIC_KEY_SIZE, ECDH_P224_SHARED_SECRET_SIZE,
    ECDH_P256_PRIVATE_KEY_SIZE, ECDH_P256_PUBLIC_KEY_SIZE, ECDH_P256_SHARED_SECRET_SIZE,
    ECDH_P384_PRIVATE_KEY_SIZE, ECDH_P384_PUBLIC_KEY_SIZE, ECDH_P384_SHARED_SECRET_SIZE,
    X25519_KEY_SIZE, X448_KEY_SIZE,
};
use ecka_tests::suites::ecdh::{loader, EcdhTestCase, HarnessError, Runner};
use ecka_tests::vectors;

#[test]
fn test_compiled_fixtures() {
    let passed = Runner::new()
        .run_all(vectors::all_cases().copied())
        .expect("compiled-in ECDH fixtures failed");
    assert_eq!(passed, 9);
}

#[test]
fn test_fixture_names_follow_variant_and_curve() {
    let names: Vec<&str> = vectors::X25519_CASES.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        [
            "X25519/WEI25519 0",
            "X25519/WEI25519 1",
            "X25519/WEI25519 2",
            "X25519/WEI25519 3",
        ]
    );

    for case in vectors::all_cases() {
        let prefix = format!("{}/{} ", case.variant, case.curve);
        assert!(case.name.starts_with(&prefix), "{} lacks prefix {:?}", case.name, prefix);
    }
}

#[test]
fn test_json_fixtures() {
    let cases = loader::load_fixtures_by_name("ecdh_fixtures.json")
        .expect("Failed to load ecdh_fixtures.json");
    assert!(cases.iter().any(|c| c.expected_error.is_some()));

    Runner::new()
        .run_all(cases.iter().map(|c| c.as_case()))
        .expect("JSON ECDH fixtures failed");
}

#[test]
fn test_fixture_lengths_match_parameter_sizes() {
    for case in vectors::all_cases() {
        let (private, public, shared) = match case.curve {
            "WEI25519" => (X25519_KEY_SIZE, X25519_KEY_SIZE, X25519_KEY_SIZE),
            "WEI448" => (X448_KEY_SIZE, X448_KEY_SIZE, X448_KEY_SIZE),
            "SECP224R1" => (
                ECDH_P224_PRIVATE_KEY_SIZE,
                ECDH_P224_PUBLIC_KEY_SIZE,
                ECDH_P224_SHARED_SECRET_SIZE,
            ),
            "SECP256R1" => (
                ECDH_P256_PRIVATE_KEY_SIZE,
                ECDH_P256_PUBLIC_KEY_SIZE,
                ECDH_P256_SHARED_SECRET_SIZE,
            ),
            "SECP384R1" => (
                ECDH_P384_PRIVATE_KEY_SIZE,
                ECDH_P384_PUBLIC_KEY_SIZE,
                ECDH_P384_SHARED_SECRET_SIZE,
            ),
            other => panic!("fixture {} on unexpected curve {}", case.name, other),
        };
        assert_eq!(case.our_priv_key.len(), private, "{}", case.name);
        assert_eq!(case.peer_pub_key.len(), public, "{}", case.name);
        assert_eq!(case.exp_our_pub_key.len(), public, "{}", case.name);
        assert_eq!(case.exp_shared_secret.len(), shared, "{}", case.name);
    }
}

#[test]
fn test_runner_reports_every_failure() {
    let good = vectors::X25519_CASES[0];
    let wrong_public = EcdhTestCase {
        name: "wrong public",
        exp_our_pub_key: vectors::X25519_CASES[1].exp_our_pub_key,
        ..good
    };
    let wrong_secret = EcdhTestCase {
        name: "wrong secret",
        exp_shared_secret: vectors::X25519_CASES[2].exp_shared_secret,
        ..good
    };
    let missing_error = EcdhTestCase {
        name: "missing error",
        expected_error: Some("InvalidPoint"),
        ..good
    };

    let result = Runner::new()
        .quiet()
        .run_all([wrong_public, good, wrong_secret, missing_error]);
    match result {
        Err(HarnessError::Failures { total, failed }) => {
            assert_eq!(total, 4);
            assert_eq!(failed, vec!["wrong public", "wrong secret", "missing error"]);
        }
        other => panic!("expected aggregated failures, got {:?}", other),
    }
}

#[test]
fn test_runner_checks_error_kind() {
    let mut twist = [0u8; 32];
    twist[0] = 2;
    let case = EcdhTestCase {
        name: "twist with wrong expectation",
        peer_pub_key: &twist,
        expected_error: Some("DegenerateSharedSecret"),
        ..vectors::X25519_CASES[0]
    };
    assert!(matches!(
        Runner::new().run_case(&case),
        Err(HarnessError::UnexpectedOutcome { .. })
    ));

    let case = EcdhTestCase {
        expected_error: Some("InvalidPoint"),
        ..case
    };
    assert!(Runner::new().run_case(&case).is_ok());
}

#[test]
fn test_unknown_variant_tag() {
    let case = EcdhTestCase {
        variant: "X9000",
        ..vectors::X25519_CASES[0]
    };
    assert!(matches!(
        Runner::new().run_case(&case),
        Err(HarnessError::UnknownVariant { .. })
    ));
}

#[test]
fn test_loader_rejects_bad_hex() {
    let json = r#"{ "tests": [ {
        "name": "broken",
        "variant": "X25519",
        "curve": "WEI25519",
        "ourPrivKey": "zz",
        "peerPubKey": "00"
    } ] }"#;
    match loader::parse_fixtures(json) {
        Err(HarnessError::Hex { case, field, .. }) => {
            assert_eq!(case, "broken");
            assert_eq!(field, "ourPrivKey");
        }
        other => panic!("expected a hex error, got {:?}", other),
    }
    assert!(matches!(loader::parse_fixtures("{"), Err(HarnessError::Json(_))));
}

#[test]
fn test_rfc7748_literal_scenario() {
    let private =
        hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a").unwrap();
    let peer =
        hex::decode("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f").unwrap();

    let sk = X25519SecretKey::from_bytes(&private).unwrap();
    let pk = X25519::derive_public(&sk).unwrap();
    assert_eq!(
        hex::encode(pk.to_bytes()),
        "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a"
    );

    let peer = X25519PublicKey::from_bytes(&peer).unwrap();
    let shared = X25519::compute_shared(&sk, &peer).unwrap();
    assert_eq!(
        hex::encode(shared.as_bytes()),
        "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742"
    );
}

#[test]
fn test_x25519_twist_peer_is_invalid_point() {
    let sk = X25519SecretKey::from_bytes(vectors::X25519_CASES[0].our_priv_key).unwrap();
    let mut u = [0u8; 32];
    u[0] = 3;
    let peer = X25519PublicKey::from_bytes(&u).unwrap();
    assert!(matches!(
        X25519::compute_shared(&sk, &peer),
        Err(ApiError::InvalidPoint { .. })
    ));
}
