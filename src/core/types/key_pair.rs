//! `KeyPair` - the closed set of key-pair capabilities.

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::core::error::{StrKeyError, StrKeyResult};
use crate::core::prefix::PrefixByte;
use crate::core::types::{SigningKeyPair, VerifyingKeyPair};

/// A key pair that is either seed-backed or public-only.
///
/// Operations a variant does not support fail with `PublicKeyOnly` or
/// `CannotSign` instead of being absent.
///
/// # Example
///
/// ```rust
/// use strkey::{KeyPair, PrefixByte};
///
/// let user = KeyPair::create(PrefixByte::User).expect("entropy available");
/// let signature = user.sign(b"hello").expect("signing works");
///
/// let public = KeyPair::from_public_key(&user.public_key().expect("derives"))
///     .expect("valid public key");
/// assert!(public.verify(b"hello", &signature).is_ok());
/// assert!(public.sign(b"hello").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPair {
    /// Seed-backed: derive, sign, verify, export.
    Signing(SigningKeyPair),
    /// Public-only: verify.
    Verifying(VerifyingKeyPair),
}

impl KeyPair {
    /// Creates a signing key pair for `public` from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` or `StrKeyError::InvalidPrefix`.
    pub fn create(public: PrefixByte) -> StrKeyResult<Self> {
        SigningKeyPair::create(public).map(Self::Signing)
    }

    /// Creates a signing key pair for `public` from an injected entropy source.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` or `StrKeyError::InvalidPrefix`.
    pub fn create_with_rng<R: CryptoRngCore + ?Sized>(
        public: PrefixByte,
        rng: &mut R,
    ) -> StrKeyResult<Self> {
        SigningKeyPair::create_with_rng(public, rng).map(Self::Signing)
    }

    /// Creates a user key pair.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` if the OS entropy source fails.
    pub fn create_user() -> StrKeyResult<Self> {
        Self::create(PrefixByte::User)
    }

    /// Creates an account key pair.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` if the OS entropy source fails.
    pub fn create_account() -> StrKeyResult<Self> {
        Self::create(PrefixByte::Account)
    }

    /// Creates a server key pair.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` if the OS entropy source fails.
    pub fn create_server() -> StrKeyResult<Self> {
        Self::create(PrefixByte::Server)
    }

    /// Creates a cluster key pair.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` if the OS entropy source fails.
    pub fn create_cluster() -> StrKeyResult<Self> {
        Self::create(PrefixByte::Cluster)
    }

    /// Creates an operator key pair.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Entropy` if the OS entropy source fails.
    pub fn create_operator() -> StrKeyResult<Self> {
        Self::create(PrefixByte::Operator)
    }

    /// Reconstructs a signing key pair from an encoded seed.
    ///
    /// # Errors
    ///
    /// Returns any codec error from decoding the seed.
    pub fn from_seed(seed: &str) -> StrKeyResult<Self> {
        SigningKeyPair::from_seed(seed).map(Self::Signing)
    }

    /// Builds a signing key pair from a raw 256-byte seed.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::InvalidPrefix` or `StrKeyError::InvalidSeedLength`.
    pub fn from_raw_seed(public: PrefixByte, raw_seed: &[u8]) -> StrKeyResult<Self> {
        SigningKeyPair::from_raw_seed(public, raw_seed).map(Self::Signing)
    }

    /// Builds a public-only key pair from an encoded public key.
    ///
    /// # Errors
    ///
    /// Returns any codec error, or `StrKeyError::InvalidPublicKey`.
    pub fn from_public_key(public_key: &str) -> StrKeyResult<Self> {
        VerifyingKeyPair::from_public_key(public_key).map(Self::Verifying)
    }

    /// True for the seed-backed variant.
    #[must_use]
    pub const fn is_signing(&self) -> bool {
        matches!(self, Self::Signing(_))
    }

    /// True once the key pair has been wiped.
    #[must_use]
    pub fn is_wiped(&self) -> bool {
        match self {
            Self::Signing(pair) => pair.is_wiped(),
            Self::Verifying(pair) => pair.is_wiped(),
        }
    }

    /// Returns the encoded seed.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::PublicKeyOnly` for a public-only key pair and
    /// `StrKeyError::Wiped` after a wipe.
    pub fn seed(&self) -> StrKeyResult<Zeroizing<String>> {
        match self {
            Self::Signing(pair) => pair.seed(),
            Self::Verifying(pair) => pair.seed(),
        }
    }

    /// Returns the encoded public key.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::Wiped` after a wipe, or any derivation error.
    pub fn public_key(&self) -> StrKeyResult<String> {
        match self {
            Self::Signing(pair) => pair.public_key(),
            Self::Verifying(pair) => pair.public_key(),
        }
    }

    /// Returns the encoded private key.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::PublicKeyOnly` for a public-only key pair and
    /// `StrKeyError::Wiped` after a wipe.
    pub fn private_key(&self) -> StrKeyResult<Zeroizing<String>> {
        match self {
            Self::Signing(pair) => pair.private_key(),
            Self::Verifying(pair) => pair.private_key(),
        }
    }

    /// Signs `message`.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::CannotSign` for a public-only key pair and
    /// `StrKeyError::Wiped` after a wipe.
    pub fn sign(&self, message: &[u8]) -> StrKeyResult<Vec<u8>> {
        match self {
            Self::Signing(pair) => pair.sign(message),
            Self::Verifying(pair) => pair.sign(message),
        }
    }

    /// Verifies `signature` over `message`.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::InvalidSignature` or
    /// `StrKeyError::InvalidSignatureLength` on failure and
    /// `StrKeyError::Wiped` after a wipe.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> StrKeyResult<()> {
        match self {
            Self::Signing(pair) => pair.verify(message, signature),
            Self::Verifying(pair) => pair.verify(message, signature),
        }
    }

    /// Irreversibly destroys the key material held by this key pair.
    pub fn wipe(&mut self) {
        match self {
            Self::Signing(pair) => pair.wipe(),
            Self::Verifying(pair) => pair.wipe(),
        }
    }
}

impl From<SigningKeyPair> for KeyPair {
    fn from(pair: SigningKeyPair) -> Self {
        Self::Signing(pair)
    }
}

impl From<VerifyingKeyPair> for KeyPair {
    fn from(pair: VerifyingKeyPair) -> Self {
        Self::Verifying(pair)
    }
}

impl TryFrom<&str> for KeyPair {
    type Error = StrKeyError;

    /// Accepts either an encoded seed or an encoded public key.
    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        match crate::core::codec::prefix(encoded) {
            PrefixByte::Seed => Self::from_seed(encoded),
            // Surface the decode error, or the unrecognized tag if it decodes
            PrefixByte::Unknown => {
                crate::core::codec::decode_raw(encoded).and(Err(StrKeyError::InvalidPrefix))
            }
            _ => Self::from_public_key(encoded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{compatible_key_pair, SEED_LENGTH};

    fn seed_bytes() -> Vec<u8> {
        (0..SEED_LENGTH).map(|i| (i * 31 + 5) as u8).collect()
    }

    #[test]
    fn test_variants_dispatch() -> StrKeyResult<()> {
        let signing = KeyPair::from_raw_seed(PrefixByte::Server, &seed_bytes())?;
        assert!(signing.is_signing());

        let verifying = KeyPair::from_public_key(&signing.public_key()?)?;
        assert!(!verifying.is_signing());
        assert_eq!(verifying.public_key()?, signing.public_key()?);

        let signature = signing.sign(b"msg")?;
        signing.verify(b"msg", &signature)?;
        verifying.verify(b"msg", &signature)?;

        assert!(matches!(verifying.seed(), Err(StrKeyError::PublicKeyOnly)));
        assert!(matches!(
            verifying.private_key(),
            Err(StrKeyError::PublicKeyOnly)
        ));
        assert!(matches!(verifying.sign(b"msg"), Err(StrKeyError::CannotSign)));
        Ok(())
    }

    #[test]
    fn test_convenience_constructors() -> StrKeyResult<()> {
        let cases = [
            (KeyPair::create_user()?, PrefixByte::User),
            (KeyPair::create_account()?, PrefixByte::Account),
            (KeyPair::create_server()?, PrefixByte::Server),
            (KeyPair::create_cluster()?, PrefixByte::Cluster),
            (KeyPair::create_operator()?, PrefixByte::Operator),
        ];
        for (pair, expected) in &cases {
            compatible_key_pair(pair, &[*expected])?;
        }
        Ok(())
    }

    #[test]
    fn test_compatible_key_pair() -> StrKeyResult<()> {
        let user = KeyPair::from_raw_seed(PrefixByte::User, &seed_bytes())?;
        compatible_key_pair(&user, &[PrefixByte::Account, PrefixByte::User])?;
        assert!(matches!(
            compatible_key_pair(&user, &[PrefixByte::Account, PrefixByte::Operator]),
            Err(StrKeyError::IncompatibleKey)
        ));
        assert!(matches!(
            compatible_key_pair(&user, &[]),
            Err(StrKeyError::IncompatibleKey)
        ));

        let public = KeyPair::from_public_key(&user.public_key()?)?;
        compatible_key_pair(&public, &[PrefixByte::User])?;
        Ok(())
    }

    #[test]
    fn test_compatible_key_pair_after_wipe() -> StrKeyResult<()> {
        let mut user = KeyPair::from_raw_seed(PrefixByte::User, &seed_bytes())?;
        user.wipe();
        assert!(matches!(
            compatible_key_pair(&user, &[PrefixByte::User]),
            Err(StrKeyError::Wiped)
        ));
        Ok(())
    }

    #[test]
    fn test_wipe_both_variants() -> StrKeyResult<()> {
        let mut signing = KeyPair::from_raw_seed(PrefixByte::User, &seed_bytes())?;
        let mut verifying = KeyPair::from_public_key(&signing.public_key()?)?;
        signing.wipe();
        verifying.wipe();
        assert!(signing.is_wiped());
        assert!(verifying.is_wiped());
        assert!(matches!(signing.public_key(), Err(StrKeyError::Wiped)));
        assert!(matches!(verifying.public_key(), Err(StrKeyError::Wiped)));
        Ok(())
    }

    #[test]
    fn test_try_from_classifies() -> StrKeyResult<()> {
        let signing = KeyPair::from_raw_seed(PrefixByte::Cluster, &seed_bytes())?;
        let seed = signing.seed()?;
        assert!(KeyPair::try_from(seed.as_str())?.is_signing());
        assert!(!KeyPair::try_from(signing.public_key()?.as_str())?.is_signing());
        assert!(matches!(
            KeyPair::try_from("garbage"),
            Err(StrKeyError::InvalidEncoding)
        ));
        Ok(())
    }

    #[test]
    fn test_try_from_unknown_tag() {
        // 'X' payload with a valid checksum.
        let mut raw = vec![b'X', 0x01, 0x02, 0x03];
        raw.extend_from_slice(&crate::core::checksum::crc16(&raw).to_le_bytes());
        let encoded = hex::encode(&raw);
        assert!(crate::core::codec::is_valid_encoding(&encoded));
        assert!(matches!(
            KeyPair::try_from(encoded.as_str()),
            Err(StrKeyError::InvalidPrefix)
        ));
    }
}
