//! Checksummed, type-tagged text encoding for identity keys and seeds.
//!
//! Every key or seed is stored and transmitted as a self-describing string:
//! a prefix byte naming what the value is, the payload, and a CRC-16
//! checksum, rendered as lowercase hex. A decoder recovers the type without
//! outside metadata and rejects corrupted or misrouted values before any
//! curve arithmetic runs.
//!
//! # Quick Start
//!
//! ```rust
//! use strkey::{codec, KeyPair, PrefixByte};
//!
//! // A fresh user identity backed by a 256-byte seed
//! let user = KeyPair::create(PrefixByte::User).expect("entropy available");
//!
//! let seed = user.seed().expect("not wiped");
//! assert_eq!(codec::prefix(&seed), PrefixByte::Seed);
//!
//! let public = user.public_key().expect("derives");
//! assert!(codec::is_valid_public_user_key(&public));
//!
//! // Anyone holding the public key can verify
//! let signature = user.sign(b"hello").expect("signs");
//! let verifier = KeyPair::from_public_key(&public).expect("valid public key");
//! assert!(verifier.verify(b"hello", &signature).is_ok());
//! ```
//!
//! # Prefix Bytes
//!
//! | Prefix | Byte | Meaning |
//! |--------|------|---------|
//! | `Operator` | `O` | Operator identity |
//! | `Account` | `A` | Account identity |
//! | `User` | `U` | User identity |
//! | `Server` | `N` | Server identity |
//! | `Cluster` | `C` | Cluster identity |
//! | `Seed` | `S` | Encoded seed (followed by a public prefix) |
//! | `Private` | `P` | Encoded private key |
//!
//! # Key Pairs
//!
//! - **Signing**: holds an encoded seed; derives keys on every call, signs,
//!   verifies and exports.
//! - **Verifying**: holds a public key; verifies only.
//!
//! Both sign and verify with ECDSA over P-384 (SHA-384, RFC 6979 nonces).
//!
//! # Features
//!
//! - `prelude` (default) - Ergonomic imports and [`prelude::KeyPairBuilder`]
//! - `serde` - Serialize [`PrefixByte`] as its wire character
//!
//! # Security
//!
//! - Seeds are zeroized on drop and on wipe
//! - Debug output redacts seeds
//! - Constant-time comparison for seed-backed key pairs
//! - No unsafe code
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::codec;
pub use crate::core::error::{StrKeyError, StrKeyResult};
pub use crate::core::operations::creds::{
    parse_decorated_key_pair, parse_decorated_seed_text, parse_decorated_signing_key_pair,
    parse_decorated_token, parse_decorated_user_key_pair,
};
pub use crate::core::prefix::PrefixByte;
pub use crate::core::types::{KeyPair, SigningKeyPair, VerifyingKeyPair};
