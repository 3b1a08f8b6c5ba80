//! `VerifyingKeyPair` - public-key-only key pair.

use core::fmt::{self, Debug};

use rand_core::{OsRng, RngCore};
use tracing::debug;
use zeroize::Zeroize;

use crate::core::codec::{decode_raw, encode};
use crate::core::error::{StrKeyError, StrKeyResult};
use crate::core::operations::derive::{verify, verifying_key_from_bytes, PUBLIC_KEY_LENGTH};
use crate::core::prefix::PrefixByte;

/// A key pair holding only a public key: it can verify, nothing else.
#[derive(Clone, PartialEq, Eq)]
pub struct VerifyingKeyPair {
    prefix: PrefixByte,
    /// Raw SEC1 public key bytes, `None` once wiped.
    public: Option<Vec<u8>>,
}

impl VerifyingKeyPair {
    /// Decodes an encoded public key of a public category.
    ///
    /// # Errors
    ///
    /// Returns the codec errors of [`decode_raw`], and
    /// `StrKeyError::InvalidPublicKey` if the tag is not a public category or
    /// the payload is not an uncompressed P-384 point.
    pub fn from_public_key(public_key: &str) -> StrKeyResult<Self> {
        let mut raw = decode_raw(public_key)?;
        let prefix = PrefixByte::from_u8(raw.remove(0));
        if !prefix.is_public() || raw.len() != PUBLIC_KEY_LENGTH {
            return Err(StrKeyError::InvalidPublicKey);
        }
        verifying_key_from_bytes(&raw)?;
        Ok(Self {
            prefix,
            public: Some(raw),
        })
    }

    /// The public category of this key, `Unknown` once wiped.
    #[must_use]
    pub const fn prefix(&self) -> PrefixByte {
        self.prefix
    }

    /// True once [`wipe`](Self::wipe) has been called.
    #[must_use]
    pub fn is_wiped(&self) -> bool {
        self.public.is_none()
    }

    fn public_bytes(&self) -> StrKeyResult<&[u8]> {
        self.public.as_deref().ok_or(StrKeyError::Wiped)
    }

    /// Returns the encoded public key.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Wiped` after a wipe.
    pub fn public_key(&self) -> StrKeyResult<String> {
        encode(self.prefix, self.public_bytes()?)
    }

    /// Always fails: a public-only key pair has no seed.
    ///
    /// # Errors
    ///
    /// Always returns `StrKeyError::PublicKeyOnly`.
    pub fn seed(&self) -> StrKeyResult<zeroize::Zeroizing<String>> {
        Err(StrKeyError::PublicKeyOnly)
    }

    /// Always fails: a public-only key pair has no private key.
    ///
    /// # Errors
    ///
    /// Always returns `StrKeyError::PublicKeyOnly`.
    pub fn private_key(&self) -> StrKeyResult<zeroize::Zeroizing<String>> {
        Err(StrKeyError::PublicKeyOnly)
    }

    /// Always fails: a public-only key pair cannot sign.
    ///
    /// # Errors
    ///
    /// Always returns `StrKeyError::CannotSign`.
    pub fn sign(&self, _message: &[u8]) -> StrKeyResult<Vec<u8>> {
        Err(StrKeyError::CannotSign)
    }

    /// Verifies `signature` over `message` with the stored public key.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::InvalidSignatureLength` for a signature of the
    /// wrong width, `StrKeyError::InvalidSignature` if it does not validate,
    /// and `StrKeyError::Wiped` after a wipe.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> StrKeyResult<()> {
        let key = verifying_key_from_bytes(self.public_bytes()?)?;
        verify(&key, message, signature)
    }

    /// Resets the tag to `Unknown`, randomizes the public bytes and drops them.
    pub fn wipe(&mut self) {
        self.prefix = PrefixByte::Unknown;
        if let Some(mut public) = self.public.take() {
            if OsRng.try_fill_bytes(&mut public).is_err() {
                public.zeroize();
            }
            debug!("wiped verifying key pair");
        }
    }
}

impl Debug for VerifyingKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingKeyPair")
            .field("prefix", &self.prefix)
            .field("key_len", &self.public.as_ref().map_or(0, Vec::len))
            .finish()
    }
}

impl TryFrom<&str> for VerifyingKeyPair {
    type Error = StrKeyError;

    fn try_from(public_key: &str) -> Result<Self, Self::Error> {
        Self::from_public_key(public_key)
    }
}
