//! Fixture harness and shared test tooling for the ecka workspace
//!
//! [`suites::ecdh`] runs named agreement fixtures through the protocol layer
//! and reports every failure; [`vectors`] holds the compiled-in fixtures.

pub mod vectors;
