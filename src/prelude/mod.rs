//! Ergonomic layer for StrKey operations.
//!
//! The prelude module re-exports the types most callers need, plus a
//! builder for creating key pairs.
//!
//! # Usage
//!
//! ```rust
//! use strkey::prelude::*;
//! ```

mod builders;

pub use builders::KeyPairBuilder;

// Re-export core types for convenience
pub use crate::core::codec;
pub use crate::core::error::{StrKeyError, StrKeyResult};
pub use crate::core::operations::creds::{
    parse_decorated_key_pair, parse_decorated_seed_text, parse_decorated_signing_key_pair,
    parse_decorated_token, parse_decorated_user_key_pair,
};
pub use crate::core::prefix::PrefixByte;
pub use crate::core::types::{KeyPair, SigningKeyPair, VerifyingKeyPair};
