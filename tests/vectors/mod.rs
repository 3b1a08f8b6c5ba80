//! Test vector types for StrKey tests.
//!
//! These types deserialize the JSON suites stored next to this module.

// Some fields are only needed for deserialization
#![allow(dead_code)]

use serde::Deserialize;
use strkey::{PrefixByte, StrKeyError};

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for plain key encodings.
#[derive(Debug, Deserialize)]
pub struct EncodingTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    /// Prefix character the encoding is decoded against.
    pub prefix: String,
    /// Hex-encoded payload (null for fail tests)
    pub payload: Option<String>,
    /// Encoded text
    pub encoded: String,
    /// Expected error kind for fail tests
    #[serde(default)]
    pub error: Option<String>,
}

/// Test vector for seed encodings.
#[derive(Debug, Deserialize)]
pub struct SeedTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    /// Public prefix character (null for fail tests)
    pub prefix: Option<String>,
    /// Hex-encoded 256-byte raw seed (null for fail tests)
    pub seed: Option<String>,
    /// Encoded seed text
    pub encoded: String,
    /// Expected error kind for fail tests
    #[serde(default)]
    pub error: Option<String>,
}

/// Test vector for decorated credential bundles.
#[derive(Debug, Deserialize)]
pub struct CredsTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    /// Full bundle text with `\n` line endings
    pub bundle: String,
    /// Expected seed text (null when the bundle has none)
    pub seed: Option<String>,
    /// Expected token text
    pub token: String,
}

/// Decode a hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Map a one-character prefix field to a `PrefixByte`.
pub fn parse_prefix(s: &str) -> PrefixByte {
    s.bytes().next().map_or(PrefixByte::Unknown, PrefixByte::from_u8)
}

/// Name of an error variant, for comparison with the `error` field.
pub fn error_kind(err: &StrKeyError) -> String {
    let debug = format!("{err:?}");
    debug
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vectors from {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vectors from {path}: {e}"))
}
