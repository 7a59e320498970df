//! Re-export the public surface so callers can do
//! `use ecka_tests::suites::ecdh::*;`.

pub mod error;
pub mod model;

pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
