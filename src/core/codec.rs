//! StrKey encoding and decoding.
//!
//! Every encoded value is a lowercase hex rendering of
//! `[prefix][payload][crc16 little-endian]`. Seeds carry a second tag:
//! `[Seed][public prefix][256-byte raw seed][crc16 little-endian]`.
//! The checksum covers every byte that precedes it.

use tracing::trace;
use zeroize::Zeroize;

use crate::core::checksum::{crc16, validate};
use crate::core::error::{StrKeyError, StrKeyResult};
use crate::core::prefix::{check_public_prefix, check_valid_prefix, PrefixByte, SEED_MARKER_MASK};
use crate::core::types::KeyPair;

/// Length of a raw seed in bytes.
pub const SEED_LENGTH: usize = 256;

/// Length of the trailing checksum in bytes.
pub const CHECKSUM_LENGTH: usize = 2;

/// Shortest decoded buffer accepted by the decoder.
pub const MIN_ENCODED_LENGTH: usize = 4;

/// Encodes `payload` under `prefix`.
///
/// # Errors
///
/// Returns `StrKeyError::InvalidPrefix` if `prefix` is `Unknown`.
pub fn encode(prefix: PrefixByte, payload: &[u8]) -> StrKeyResult<String> {
    check_valid_prefix(prefix)?;

    let mut raw = Vec::with_capacity(1 + payload.len() + CHECKSUM_LENGTH);
    raw.push(prefix.as_u8());
    raw.extend_from_slice(payload);
    Ok(seal(raw))
}

/// Encodes a 256-byte raw seed for a public category.
///
/// # Errors
///
/// Returns `StrKeyError::InvalidPrefix` if `public` is not a public category,
/// and `StrKeyError::InvalidSeedLength` if `raw_seed` is not 256 bytes.
pub fn encode_seed(public: PrefixByte, raw_seed: &[u8]) -> StrKeyResult<String> {
    check_public_prefix(public)?;

    if raw_seed.len() != SEED_LENGTH {
        return Err(StrKeyError::InvalidSeedLength);
    }

    let mut raw = Vec::with_capacity(2 + SEED_LENGTH + CHECKSUM_LENGTH);
    raw.push(PrefixByte::Seed.as_u8());
    raw.push(public.as_u8());
    raw.extend_from_slice(raw_seed);
    let encoded = seal(raw);
    Ok(encoded)
}

/// Appends the checksum and renders the buffer as lowercase hex.
fn seal(mut raw: Vec<u8>) -> String {
    let crc = crc16(&raw);
    raw.extend_from_slice(&crc.to_le_bytes());
    let encoded = hex::encode(&raw);
    raw.zeroize();
    encoded
}

/// Decodes any encoding and returns the tag byte(s) and payload with the
/// checksum stripped.
///
/// # Errors
///
/// Returns `StrKeyError::InvalidEncoding` if `src` is not lowercase hex or
/// decodes to fewer than 4 bytes, and `StrKeyError::InvalidChecksum` if the
/// trailing checksum does not match.
pub fn decode_raw(src: &str) -> StrKeyResult<Vec<u8>> {
    if !src.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(StrKeyError::InvalidEncoding);
    }

    let mut raw = hex::decode(src).map_err(|_| StrKeyError::InvalidEncoding)?;

    if raw.len() < MIN_ENCODED_LENGTH {
        return Err(StrKeyError::InvalidEncoding);
    }

    let body_len = raw.len() - CHECKSUM_LENGTH;
    let crc = u16::from_le_bytes([raw[body_len], raw[body_len + 1]]);
    if !validate(&raw[..body_len], crc) {
        trace!(len = raw.len(), "checksum mismatch");
        raw.zeroize();
        return Err(StrKeyError::InvalidChecksum);
    }

    raw.truncate(body_len);
    Ok(raw)
}

/// Decodes `src` and enforces that its tag is `expected`.
///
/// # Errors
///
/// Returns `StrKeyError::InvalidPrefix` if `expected` is `Unknown` or the
/// decoded tag differs, plus any error from [`decode_raw`].
pub fn decode(expected: PrefixByte, src: &str) -> StrKeyResult<Vec<u8>> {
    check_valid_prefix(expected)?;

    let mut raw = decode_raw(src)?;
    if raw[0] != expected.as_u8() {
        raw.zeroize();
        return Err(StrKeyError::InvalidPrefix);
    }
    raw.remove(0);
    Ok(raw)
}

/// Decodes an encoded seed into its public category and raw seed bytes.
///
/// # Errors
///
/// Returns `StrKeyError::InvalidSeed` if the buffer is not a seed of a public
/// category or its raw seed is not 256 bytes, plus any error from
/// [`decode_raw`].
pub fn decode_seed(src: &str) -> StrKeyResult<(PrefixByte, Vec<u8>)> {
    let mut raw = decode_raw(src)?;

    let public = PrefixByte::from_u8(raw[1]);
    if raw[0] != PrefixByte::Seed.as_u8() || !public.is_public() {
        raw.zeroize();
        return Err(StrKeyError::InvalidSeed);
    }
    if raw.len() - 2 != SEED_LENGTH {
        trace!(len = raw.len() - 2, "seed payload has the wrong length");
        raw.zeroize();
        return Err(StrKeyError::InvalidSeed);
    }

    raw.drain(..2);
    Ok((public, raw))
}

/// Classifies an encoding without failing.
///
/// Returns the leading tag if it is a valid wire tag, `Seed` if the high five
/// bits match the seed marker, and `Unknown` otherwise or on any decode error.
#[must_use]
pub fn prefix(src: &str) -> PrefixByte {
    let Ok(mut raw) = decode_raw(src) else {
        return PrefixByte::Unknown;
    };
    let lead = raw[0];
    raw.zeroize();

    let prefix = PrefixByte::from_u8(lead);
    if prefix.is_valid() {
        return prefix;
    }
    // Seed variants may use the three low bits.
    if lead & SEED_MARKER_MASK == PrefixByte::Seed.as_u8() & SEED_MARKER_MASK {
        return PrefixByte::Seed;
    }
    PrefixByte::Unknown
}

/// True if `src` is any well-formed, checksum-valid encoding.
#[must_use]
pub fn is_valid_encoding(src: &str) -> bool {
    decode_raw(src).is_ok()
}

/// True if `src` is a valid public key of any public category.
#[must_use]
pub fn is_valid_public_key(src: &str) -> bool {
    decode_raw(src).is_ok_and(|raw| PrefixByte::from_u8(raw[0]).is_public())
}

/// True if `src` is a valid public user key.
#[must_use]
pub fn is_valid_public_user_key(src: &str) -> bool {
    decode(PrefixByte::User, src).is_ok()
}

/// True if `src` is a valid public account key.
#[must_use]
pub fn is_valid_public_account_key(src: &str) -> bool {
    decode(PrefixByte::Account, src).is_ok()
}

/// True if `src` is a valid public server key.
#[must_use]
pub fn is_valid_public_server_key(src: &str) -> bool {
    decode(PrefixByte::Server, src).is_ok()
}

/// True if `src` is a valid public cluster key.
#[must_use]
pub fn is_valid_public_cluster_key(src: &str) -> bool {
    decode(PrefixByte::Cluster, src).is_ok()
}

/// True if `src` is a valid public operator key.
#[must_use]
pub fn is_valid_public_operator_key(src: &str) -> bool {
    decode(PrefixByte::Operator, src).is_ok()
}

/// Checks that the key pair's public key belongs to one of `expected`.
///
/// # Errors
///
/// Returns `StrKeyError::IncompatibleKey` if it does not, or any error from
/// deriving the public key.
pub fn compatible_key_pair(key_pair: &KeyPair, expected: &[PrefixByte]) -> StrKeyResult<()> {
    let public = key_pair.public_key()?;
    let kind = prefix(&public);
    if expected.contains(&kind) {
        Ok(())
    } else {
        Err(StrKeyError::IncompatibleKey)
    }
}
