//! `SigningKeyPair` - seed-backed key pair.
//!
//! The only durable state is the encoded seed text. The curve key pair is
//! re-derived from it on every operation and dropped afterwards.

use core::fmt::{self, Debug};

use rand_core::{CryptoRngCore, OsRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::core::codec::{decode_seed, encode, encode_seed, SEED_LENGTH};
use crate::core::error::{StrKeyError, StrKeyResult};
use crate::core::operations::derive::{
    derive_signing_key, private_key_bytes, public_key_bytes, sign, verify,
};
use crate::core::prefix::PrefixByte;

/// A key pair backed by an encoded seed: can derive, sign, verify and export.
///
/// # Security
///
/// - The encoded seed is zeroized on drop
/// - [`wipe`](Self::wipe) randomizes and drops the seed; the pair is then unusable
/// - Debug output redacts the seed
/// - Equality comparison uses constant-time comparison
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKeyPair {
    /// Encoded seed text, `None` once wiped.
    seed: Option<Vec<u8>>,
}

impl SigningKeyPair {
    /// Creates a fresh key pair for `public` from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` if the entropy source fails and
    /// `StrKeyError::InvalidPrefix` if `public` is not a public category.
    pub fn create(public: PrefixByte) -> StrKeyResult<Self> {
        Self::create_with_rng(public, &mut OsRng)
    }

    /// Creates a fresh key pair for `public` from an injected entropy source.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` if `rng` fails and
    /// `StrKeyError::InvalidPrefix` if `public` is not a public category.
    pub fn create_with_rng<R: CryptoRngCore + ?Sized>(
        public: PrefixByte,
        rng: &mut R,
    ) -> StrKeyResult<Self> {
        let mut raw = Zeroizing::new([0u8; SEED_LENGTH]);
        rng.try_fill_bytes(&mut raw[..])?;
        let pair = Self::from_raw_seed(public, &raw[..])?;
        debug!(prefix = %public, "created signing key pair");
        Ok(pair)
    }

    /// Encodes a raw 256-byte seed and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the codec errors of [`encode_seed`].
    pub fn from_raw_seed(public: PrefixByte, raw_seed: &[u8]) -> StrKeyResult<Self> {
        let encoded = encode_seed(public, raw_seed)?;
        Ok(Self {
            seed: Some(encoded.into_bytes()),
        })
    }

    /// Wraps an existing encoded seed after validating it.
    ///
    /// # Errors
    ///
    /// Returns the codec errors of [`decode_seed`].
    pub fn from_seed(seed: &str) -> StrKeyResult<Self> {
        let (public, mut raw) = decode_seed(seed)?;
        raw.zeroize();
        debug!(prefix = %public, "loaded signing key pair from seed");
        Ok(Self {
            seed: Some(seed.as_bytes().to_vec()),
        })
    }

    /// True once [`wipe`](Self::wipe) has been called.
    #[must_use]
    pub fn is_wiped(&self) -> bool {
        self.seed.is_none()
    }

    fn encoded_seed(&self) -> StrKeyResult<&str> {
        let seed = self.seed.as_deref().ok_or(StrKeyError::Wiped)?;
        core::str::from_utf8(seed).map_err(|_| StrKeyError::InvalidEncoding)
    }

    /// Decodes the stored seed into its public category and raw bytes.
    fn raw_seed(&self) -> StrKeyResult<(PrefixByte, Zeroizing<Vec<u8>>)> {
        let (public, raw) = decode_seed(self.encoded_seed()?)?;
        Ok((public, Zeroizing::new(raw)))
    }

    /// The public category this pair identifies as.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Wiped` after a wipe.
    pub fn public_prefix(&self) -> StrKeyResult<PrefixByte> {
        Ok(self.raw_seed()?.0)
    }

    /// Returns the encoded seed verbatim.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Wiped` after a wipe.
    pub fn seed(&self) -> StrKeyResult<Zeroizing<String>> {
        Ok(Zeroizing::new(self.encoded_seed()?.to_owned()))
    }

    /// Returns the encoded public key under the seed's public category.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Wiped` after a wipe, or any derivation error.
    pub fn public_key(&self) -> StrKeyResult<String> {
        let (public, raw) = self.raw_seed()?;
        let key = derive_signing_key(&raw)?;
        encode(public, &public_key_bytes(&key))
    }

    /// Returns the encoded private key (big-endian scalar, `Private` tag).
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Wiped` after a wipe, or any derivation error.
    pub fn private_key(&self) -> StrKeyResult<Zeroizing<String>> {
        let (_, raw) = self.raw_seed()?;
        let key = derive_signing_key(&raw)?;
        let encoded = encode(PrefixByte::Private, &private_key_bytes(&key))?;
        Ok(Zeroizing::new(encoded))
    }

    /// Signs `message` with the derived private key.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Wiped` after a wipe, or any derivation or
    /// signing error.
    pub fn sign(&self, message: &[u8]) -> StrKeyResult<Vec<u8>> {
        let (_, raw) = self.raw_seed()?;
        let key = derive_signing_key(&raw)?;
        sign(&key, message)
    }

    /// Verifies `signature` over `message` with the derived public key.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::InvalidSignature` if verification fails and
    /// `StrKeyError::Wiped` after a wipe.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> StrKeyResult<()> {
        let (_, raw) = self.raw_seed()?;
        let key = derive_signing_key(&raw)?;
        verify(key.verifying_key(), message, signature)
    }

    /// Overwrites the seed with random bytes and drops it.
    ///
    /// Every later operation fails with `StrKeyError::Wiped`.
    pub fn wipe(&mut self) {
        if let Some(mut seed) = self.seed.take() {
            if OsRng.try_fill_bytes(&mut seed).is_err() {
                debug!("entropy unavailable during wipe, zeroizing only");
            }
            seed.zeroize();
            debug!("wiped signing key pair");
        }
    }
}

impl Debug for SigningKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKeyPair")
            .field("seed", &"[REDACTED]")
            .field("wiped", &self.is_wiped())
            .finish()
    }
}

impl PartialEq for SigningKeyPair {
    fn eq(&self, other: &Self) -> bool {
        match (&self.seed, &other.seed) {
            (Some(a), Some(b)) => a.len() == b.len() && bool::from(a.ct_eq(b)),
            _ => false,
        }
    }
}

impl Eq for SigningKeyPair {}

impl TryFrom<&str> for SigningKeyPair {
    type Error = StrKeyError;

    fn try_from(seed: &str) -> Result<Self, Self::Error> {
        Self::from_seed(seed)
    }
}
