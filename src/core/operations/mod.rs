//! Operations built on top of the codec.
//!
//! - [`derive`] - Seed-to-key derivation and the P-384 ECDSA primitive
//! - [`creds`] - Decorated credential bundle parsing

pub mod creds;
pub mod derive;
