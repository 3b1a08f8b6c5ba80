//! P-384 ECDSA key derivation, signing and verification.
//!
//! Both key-pair variants sign and verify with the same primitive:
//! - P-384 (secp384r1) curve arithmetic
//! - ECDSA with SHA-384 and RFC 6979 deterministic nonces
//! - Fixed-width `r || s` signatures
//!
//! Derived keys are never cached. Every call re-derives from the raw seed.

use p384::ecdsa::signature::{Signer, Verifier};
use p384::ecdsa::{Signature, SigningKey, VerifyingKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::error::{StrKeyError, StrKeyResult};

/// Size of a P-384 scalar in bytes.
pub const SCALAR_LENGTH: usize = 48;

/// Size of an encoded private key payload (big-endian scalar).
pub const PRIVATE_KEY_LENGTH: usize = SCALAR_LENGTH;

/// Size of an uncompressed SEC1 public key: `0x04 || x || y`.
pub const PUBLIC_KEY_LENGTH: usize = 1 + 2 * SCALAR_LENGTH;

/// Size of a signature: `r || s`.
pub const SIGNATURE_LENGTH: usize = 2 * SCALAR_LENGTH;

/// Derives the signing key from a raw seed.
///
/// The seed is read as an entropy stream in scalar-sized windows and the
/// first window that is a valid non-zero scalar below the group order is
/// taken. The same seed always yields the same key.
///
/// # Errors
///
/// Returns `StrKeyError::CryptoError` if no window is a valid scalar.
pub fn derive_signing_key(raw_seed: &[u8]) -> StrKeyResult<SigningKey> {
    for (window, candidate) in raw_seed.chunks_exact(SCALAR_LENGTH).enumerate() {
        if let Ok(key) = SigningKey::from_slice(candidate) {
            if window > 0 {
                debug!(window, "seed window rejected, derived from a later window");
            }
            return Ok(key);
        }
    }
    Err(StrKeyError::CryptoError)
}

/// Returns the uncompressed SEC1 encoding of the signing key's public point.
#[must_use]
pub fn public_key_bytes(key: &SigningKey) -> Vec<u8> {
    key.verifying_key()
        .to_encoded_point(false)
        .as_bytes()
        .to_vec()
}

/// Returns the private scalar as fixed-width big-endian bytes.
#[must_use]
pub fn private_key_bytes(key: &SigningKey) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(key.to_bytes().to_vec())
}

/// Signs `message` and returns the `r || s` signature bytes.
///
/// # Errors
///
/// Returns `StrKeyError::CryptoError` if the signing primitive fails.
pub fn sign(key: &SigningKey, message: &[u8]) -> StrKeyResult<Vec<u8>> {
    let signature: Signature = key.try_sign(message).map_err(|_| StrKeyError::CryptoError)?;
    Ok(signature.to_bytes().to_vec())
}

/// Verifies `signature` over `message` against `key`.
///
/// # Errors
///
/// Returns `StrKeyError::InvalidSignatureLength` if the signature is not
/// exactly [`SIGNATURE_LENGTH`] bytes, and `StrKeyError::InvalidSignature`
/// if it does not validate.
pub fn verify(key: &VerifyingKey, message: &[u8], signature: &[u8]) -> StrKeyResult<()> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(StrKeyError::InvalidSignatureLength {
            expected: SIGNATURE_LENGTH,
            actual: signature.len(),
        });
    }

    let signature = Signature::from_slice(signature).map_err(|_| StrKeyError::InvalidSignature)?;
    key.verify(message, &signature)
        .map_err(|_| StrKeyError::InvalidSignature)
}

/// Parses an uncompressed (or compressed) SEC1 public key.
///
/// # Errors
///
/// Returns `StrKeyError::InvalidPublicKey` if the bytes are not a point on
/// the curve.
pub fn verifying_key_from_bytes(bytes: &[u8]) -> StrKeyResult<VerifyingKey> {
    VerifyingKey::from_sec1_bytes(bytes).map_err(|_| StrKeyError::InvalidPublicKey)
}
