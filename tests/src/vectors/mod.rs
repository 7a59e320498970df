//! Compiled-in agreement fixtures
//!
//! Each module holds the fixed vectors for one algorithm family. The JSON
//! fixtures under `ecdh_json/` add negative scenarios and are read at run
//! time by [`crate::suites::ecdh::loader`].

pub mod ecccdh;
pub mod x25519;

pub use ecccdh::ECCCDH_CASES;
pub use x25519::X25519_CASES;
pub use x448::X448_CASES;

use crate::suites::ecdh::EcdhTestCase;

/// Every compiled-in fixture, in family order
pub fn all_cases() -> impl Iterator<Item = &'static EcdhTestCase<'static>> {
    X25519_CASES
        .iter()
        .chain(X448_CASES.iter())
        .chain(ECCCDH_CASES.iter())
}
