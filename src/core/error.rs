//! Error types for StrKey operations.
//!
//! This module provides a unified error type for the codec, both key-pair
//! variants and the credential parser. Messages are intentionally vague
//! and never carry key material, seed text or token text.

use thiserror::Error;

/// Errors that can occur when encoding, decoding or using keys.
#[derive(Debug, Error)]
pub enum StrKeyError {
    /// The tag byte is not a recognized category, or is not the one expected.
    #[error("Invalid prefix byte")]
    InvalidPrefix,

    /// A raw seed handed to the encoder is not exactly 256 bytes.
    #[error("Invalid seed length")]
    InvalidSeedLength,

    /// The decoded buffer is not a seed, or names a non-public category.
    #[error("Invalid seed")]
    InvalidSeed,

    /// The text is not lowercase hex, or decodes to fewer than 4 bytes.
    #[error("Invalid encoding")]
    InvalidEncoding,

    /// The trailing checksum does not match the preceding bytes.
    #[error("Invalid checksum")]
    InvalidChecksum,

    /// The encoded text is not a public key of a public category.
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Seed or private key export attempted on a public-only key pair.
    #[error("Public key only")]
    PublicKeyOnly,

    /// Signing attempted on a public-only key pair.
    #[error("Cannot sign with a public key only")]
    CannotSign,

    /// Signature verification failed.
    #[error("Signature verification failed")]
    InvalidSignature,

    /// The signature does not have the fixed `r || s` width.
    #[error("Invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The key pair's category is not one of the expected categories.
    #[error("Incompatible key")]
    IncompatibleKey,

    /// The decorated bundle contains no seed.
    #[error("No seed found")]
    NoSeedFound,

    /// The key pair was wiped and can no longer be used.
    #[error("Key pair has been wiped")]
    Wiped,

    /// The entropy source failed to produce seed bytes.
    #[error("Entropy source failure: {0}")]
    Entropy(#[from] rand_core::Error),

    /// Generic cryptographic error.
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for StrKey operations.
pub type StrKeyResult<T> = Result<T, StrKeyError>;
