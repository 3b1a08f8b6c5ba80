//! Builder patterns for key-pair creation.
//!
//! Presets select the public category; the entropy source is either the OS
//! RNG or one injected at build time.
//!
//! | Preset | Prefix |
//! |--------|--------|
//! | `operator()` | `O` |
//! | `account()` | `A` |
//! | `user()` (default) | `U` |
//! | `server()` | `N` |
//! | `cluster()` | `C` |
//!
//! # Example
//!
//! ```rust
//! use strkey::prelude::*;
//!
//! let account = KeyPairBuilder::account()
//!     .try_build()
//!     .expect("entropy available");
//! assert!(codec::is_valid_public_account_key(&account.public_key().expect("derives")));
//! ```

use rand_core::CryptoRngCore;

use crate::core::error::StrKeyResult;
use crate::core::prefix::{check_public_prefix, PrefixByte};
use crate::core::types::KeyPair;

/// Builder for seed-backed key pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPairBuilder {
    prefix: PrefixByte,
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::user()
    }
}

impl KeyPairBuilder {
    /// Creates a new builder for user key pairs.
    ///
    /// Equivalent to calling `KeyPairBuilder::user()`.
    #[must_use]
    pub const fn new() -> Self {
        Self::user()
    }

    /// Operator key pairs.
    #[must_use]
    pub const fn operator() -> Self {
        Self {
            prefix: PrefixByte::Operator,
        }
    }

    /// Account key pairs.
    #[must_use]
    pub const fn account() -> Self {
        Self {
            prefix: PrefixByte::Account,
        }
    }

    /// User key pairs.
    #[must_use]
    pub const fn user() -> Self {
        Self {
            prefix: PrefixByte::User,
        }
    }

    /// Server key pairs.
    #[must_use]
    pub const fn server() -> Self {
        Self {
            prefix: PrefixByte::Server,
        }
    }

    /// Cluster key pairs.
    #[must_use]
    pub const fn cluster() -> Self {
        Self {
            prefix: PrefixByte::Cluster,
        }
    }

    /// Sets the public category. Checked when the key pair is built.
    #[must_use]
    pub const fn prefix(mut self, prefix: PrefixByte) -> Self {
        self.prefix = prefix;
        self
    }

    /// Returns the configured public category.
    #[must_use]
    pub const fn get_prefix(&self) -> PrefixByte {
        self.prefix
    }

    /// Builds a key pair from the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::InvalidPrefix` if the prefix is not a public
    /// category, or `StrKeyError::Entropy` if the entropy source fails.
    pub fn try_build(self) -> StrKeyResult<KeyPair> {
        check_public_prefix(self.prefix)?;
        KeyPair::create(self.prefix)
    }

    /// Builds a key pair from an injected entropy source.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::InvalidPrefix` if the prefix is not a public
    /// category, or `StrKeyError::Entropy` if `rng` fails.
    pub fn try_build_with_rng<R: CryptoRngCore + ?Sized>(self, rng: &mut R) -> StrKeyResult<KeyPair> {
        check_public_prefix(self.prefix)?;
        KeyPair::create_with_rng(self.prefix, rng)
    }

    /// Builds a key pair from an existing 256-byte raw seed.
    ///
    /// # Errors
    ///
    /// Returns `StrKeyError::InvalidPrefix` or `StrKeyError::InvalidSeedLength`.
    pub fn try_build_from_raw_seed(self, raw_seed: &[u8]) -> StrKeyResult<KeyPair> {
        KeyPair::from_raw_seed(self.prefix, raw_seed)
    }
}
