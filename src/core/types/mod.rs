//! Key-pair implementations.
//!
//! - [`SigningKeyPair`] - Seed-backed: derive, sign, verify, export
//! - [`VerifyingKeyPair`] - Public key only: verify
//! - [`KeyPair`] - Closed sum over the two

mod key_pair;
mod signing;
mod verifying;

pub use key_pair::KeyPair;
pub use signing::SigningKeyPair;
pub use verifying::VerifyingKeyPair;
