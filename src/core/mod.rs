//! Core StrKey types and operations.
//!
//! This module provides the fundamental building blocks:
//!
//! - [`prefix`] - Prefix bytes (type tags) and their categories
//! - [`error`] - Error types for StrKey operations
//! - [`checksum`] - The CRC-16 checksum protecting every encoding
//! - [`codec`] - Encoding, decoding, classification and validation
//! - [`types`] - Signing, verifying and sum-type key pairs
//! - [`operations`] - Key derivation, signing and credential parsing

pub mod checksum;
pub mod codec;
pub mod error;
pub mod operations;
pub mod prefix;
pub mod types;

// Re-export commonly used items
pub use error::{StrKeyError, StrKeyResult};
pub use prefix::PrefixByte;
