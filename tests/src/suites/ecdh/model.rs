//! Data model for key-agreement fixtures.
//! No dependency on the rest of the harness beyond its error type.

use serde::Deserialize;

use super::error::{HarnessError, Result};

/// One agreement fixture, borrowed from static data or a decoded JSON case.
///
/// An empty `exp_our_pub_key` skips the public-key check. When
/// `expected_error` is set the agreement must fail with that error kind and
/// `exp_shared_secret` is ignored.
#[derive(Debug, Clone, Copy)]
pub struct EcdhTestCase<'a> {
    pub name: &'a str,
    pub variant: &'a str,
    pub curve: &'a str,
    pub our_priv_key: &'a [u8],
    pub peer_pub_key: &'a [u8],
    pub exp_our_pub_key: &'a [u8],
    pub exp_shared_secret: &'a [u8],
    pub expected_error: Option<&'a str>,
}

/// Fixture as it appears on disk: byte strings are lowercase hex
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonTestCase {
    pub name: String,
    pub variant: String,
    pub curve: String,
    pub our_priv_key: String,
    pub peer_pub_key: String,
    #[serde(default)]
    pub exp_our_pub_key: Option<String>,
    #[serde(default)]
    pub exp_shared_secret: Option<String>,
    #[serde(default)]
    pub expected_error: Option<String>,
}

/// Whole fixture file
#[derive(Debug, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub source: Option<String>,
    pub tests: Vec<JsonTestCase>,
}

/// A JSON fixture with its hex strings decoded
#[derive(Debug, Clone)]
pub struct OwnedTestCase {
    pub name: String,
    pub variant: String,
    pub curve: String,
    pub our_priv_key: Vec<u8>,
    pub peer_pub_key: Vec<u8>,
    pub exp_our_pub_key: Vec<u8>,
    pub exp_shared_secret: Vec<u8>,
    pub expected_error: Option<String>,
}

impl JsonTestCase {
    pub fn decode(&self) -> Result<OwnedTestCase> {
        let field = |field: &'static str, value: &str| {
            hex::decode(value).map_err(|source| HarnessError::Hex {
                case: self.name.clone(),
                field,
                source,
            })
        };
        let optional = |name: &'static str, value: &Option<String>| match value {
            Some(v) => field(name, v),
            None => Ok(Vec::new()),
        };

        Ok(OwnedTestCase {
            name: self.name.clone(),
            variant: self.variant.clone(),
            curve: self.curve.clone(),
            our_priv_key: field("ourPrivKey", &self.our_priv_key)?,
            peer_pub_key: field("peerPubKey", &self.peer_pub_key)?,
            exp_our_pub_key: optional("expOurPubKey", &self.exp_our_pub_key)?,
            exp_shared_secret: optional("expSharedSecret", &self.exp_shared_secret)?,
            expected_error: self.expected_error.clone(),
        })
    }
}

impl OwnedTestCase {
    pub fn as_case(&self) -> EcdhTestCase<'_> {
        EcdhTestCase {
            name: &self.name,
            variant: &self.variant,
            curve: &self.curve,
            our_priv_key: &self.our_priv_key,
            peer_pub_key: &self.peer_pub_key,
            exp_our_pub_key: &self.exp_our_pub_key,
            exp_shared_secret: &self.exp_shared_secret,
            expected_error: self.expected_error.as_deref(),
        }
    }
}
