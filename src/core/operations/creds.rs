//! Decorated credential bundle parsing.
//!
//! A bundle is plain text that may embed a token block and a seed block:
//!
//! ```text
//! -----BEGIN NATS USER JWT-----
//! <token>
//! ------END NATS USER JWT------
//!
//! -----BEGIN USER NKEY SEED-----
//! <seed>
//! ------END USER NKEY SEED------
//! ```
//!
//! Markers are matched literally, including the extra dash on the end
//! markers. `\r\n` and `\n` line endings parse identically.

use std::borrow::Cow;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::codec::{compatible_key_pair, prefix};
use crate::core::error::{StrKeyError, StrKeyResult};
use crate::core::prefix::PrefixByte;
use crate::core::types::KeyPair;

/// Opening marker of the token block.
pub const TOKEN_BEGIN: &str = "-----BEGIN NATS USER JWT-----";

/// Closing marker of the token block.
pub const TOKEN_END: &str = "------END NATS USER JWT------";

/// Opening marker of the seed block.
pub const SEED_BEGIN: &str = "-----BEGIN USER NKEY SEED-----";

/// Closing marker of the seed block.
pub const SEED_END: &str = "------END USER NKEY SEED------";

fn normalize(bundle: &str) -> Cow<'_, str> {
    if bundle.contains('\r') {
        Cow::Owned(bundle.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(bundle)
    }
}

/// Returns the first non-blank line between a `begin` line and an `end` line.
///
/// A `begin` with no matching `end` does not form a block.
fn find_block<'a>(bundle: &'a str, begin: &str, end: &str) -> Option<&'a str> {
    let mut lines = bundle.lines().map(str::trim);
    while lines.by_ref().any(|line| line == begin) {
        let mut content = None;
        for line in lines.by_ref() {
            if line == end {
                if let Some(found) = content {
                    return Some(found);
                }
                break;
            }
            if content.is_none() && !line.is_empty() {
                content = Some(line);
            }
        }
    }
    None
}

/// Extracts the token from a bundle, or returns the whole trimmed input when
/// the bundle has no token block.
///
/// Bare tokens are valid input, so a bundle without markers never fails;
/// empty input yields an empty token.
///
/// # Errors
///
/// Currently infallible. The `Result` keeps the signature aligned with the
/// other bundle parsers.
pub fn parse_decorated_token(bundle: &str) -> StrKeyResult<String> {
    let normalized = normalize(bundle);
    if let Some(token) = find_block(&normalized, TOKEN_BEGIN, TOKEN_END) {
        return Ok(token.to_owned());
    }

    debug!("no token block, using bare input");
    Ok(normalized.trim().to_owned())
}

/// Extracts the seed text from a bundle's seed block.
///
/// # Errors
///
/// Returns `StrKeyError::NoSeedFound` if there is no seed block.
pub fn parse_decorated_seed_text(bundle: &str) -> StrKeyResult<Zeroizing<String>> {
    let normalized = Zeroizing::new(normalize(bundle).into_owned());
    find_block(&normalized, SEED_BEGIN, SEED_END)
        .map(|seed| Zeroizing::new(seed.to_owned()))
        .ok_or(StrKeyError::NoSeedFound)
}

/// Extracts the seed block and builds a signing key pair from it.
///
/// # Errors
///
/// Returns `StrKeyError::NoSeedFound` if there is no seed block, or any codec
/// error from decoding the seed.
pub fn parse_decorated_signing_key_pair(bundle: &str) -> StrKeyResult<KeyPair> {
    let seed = parse_decorated_seed_text(bundle)?;
    KeyPair::from_seed(&seed)
}

/// Like [`parse_decorated_signing_key_pair`], but also accepts a bare seed
/// with no markers.
///
/// # Errors
///
/// Returns `StrKeyError::NoSeedFound` if there is neither a seed block nor a
/// bare seed, or any codec error from decoding the seed.
pub fn parse_decorated_key_pair(bundle: &str) -> StrKeyResult<KeyPair> {
    match parse_decorated_seed_text(bundle) {
        Ok(seed) => KeyPair::from_seed(&seed),
        Err(StrKeyError::NoSeedFound) => {
            let normalized = Zeroizing::new(normalize(bundle).into_owned());
            let bare = normalized.trim();
            if prefix(bare) != PrefixByte::Seed {
                return Err(StrKeyError::NoSeedFound);
            }
            debug!("no seed block, using bare seed");
            KeyPair::from_seed(bare)
        }
        Err(err) => Err(err),
    }
}

/// Extracts the seed block and requires it to be a user seed.
///
/// # Errors
///
/// Returns `StrKeyError::IncompatibleKey` if the seed is not a user seed,
/// plus the errors of [`parse_decorated_signing_key_pair`].
pub fn parse_decorated_user_key_pair(bundle: &str) -> StrKeyResult<KeyPair> {
    let pair = parse_decorated_signing_key_pair(bundle)?;
    compatible_key_pair(&pair, &[PrefixByte::User])?;
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{encode_seed, SEED_LENGTH};

    fn seed_text(public: PrefixByte) -> StrKeyResult<String> {
        let raw: Vec<u8> = (0..SEED_LENGTH).map(|i| (i * 3 + 9) as u8).collect();
        encode_seed(public, &raw)
    }

    fn bundle(token: &str, seed: &str) -> String {
        format!(
            "{TOKEN_BEGIN}\n{token}\n{TOKEN_END}\n\n\
             ************************* IMPORTANT *************************\n\
             Seed printed below can be used to sign and prove identity.\n\n\
             {SEED_BEGIN}\n{seed}\n{SEED_END}\n\n\
             *************************************************************\n"
        )
    }

    #[test]
    fn test_bare_token() -> StrKeyResult<()> {
        assert_eq!(parse_decorated_token("foo")?, "foo");
        assert_eq!(parse_decorated_token("  foo \r\n")?, "foo");
        Ok(())
    }

    #[test]
    fn test_empty_token_input() -> StrKeyResult<()> {
        assert_eq!(parse_decorated_token("")?, "");
        assert_eq!(parse_decorated_token(" \r\n ")?, "");
        Ok(())
    }

    #[test]
    fn test_bare_seed_text_fails() {
        assert!(matches!(
            parse_decorated_seed_text("foo"),
            Err(StrKeyError::NoSeedFound)
        ));
        assert!(matches!(
            parse_decorated_key_pair("foo"),
            Err(StrKeyError::NoSeedFound)
        ));
    }

    #[test]
    fn test_extracts_both_blocks() -> StrKeyResult<()> {
        let seed = seed_text(PrefixByte::User)?;
        let text = bundle("header.payload.sig", &seed);
        for input in [text.clone(), text.replace('\n', "\r\n")] {
            assert_eq!(parse_decorated_token(&input)?, "header.payload.sig");
            assert_eq!(parse_decorated_seed_text(&input)?.as_str(), seed);
            let pair = parse_decorated_signing_key_pair(&input)?;
            assert_eq!(pair.seed()?.as_str(), seed);
            let pair = parse_decorated_key_pair(&input)?;
            assert_eq!(pair.seed()?.as_str(), seed);
        }
        Ok(())
    }

    #[test]
    fn test_block_order_does_not_matter() -> StrKeyResult<()> {
        let seed = seed_text(PrefixByte::Account)?;
        let text = format!("{SEED_BEGIN}\n{seed}\n{SEED_END}\n{TOKEN_BEGIN}\ntok\n{TOKEN_END}\n");
        assert_eq!(parse_decorated_token(&text)?, "tok");
        assert_eq!(parse_decorated_seed_text(&text)?.as_str(), seed);
        Ok(())
    }

    #[test]
    fn test_markers_are_literal() -> StrKeyResult<()> {
        let seed = seed_text(PrefixByte::User)?;
        // End marker with the same dash count as the begin marker.
        let text = format!("{SEED_BEGIN}\n{seed}\n-----END USER NKEY SEED-----\n");
        assert!(matches!(
            parse_decorated_seed_text(&text),
            Err(StrKeyError::NoSeedFound)
        ));
        Ok(())
    }

    #[test]
    fn test_unterminated_block() -> StrKeyResult<()> {
        let seed = seed_text(PrefixByte::User)?;
        let text = format!("{SEED_BEGIN}\n{seed}\n");
        assert!(matches!(
            parse_decorated_seed_text(&text),
            Err(StrKeyError::NoSeedFound)
        ));
        Ok(())
    }

    #[test]
    fn test_bare_seed_key_pair() -> StrKeyResult<()> {
        let seed = seed_text(PrefixByte::Operator)?;
        let pair = parse_decorated_key_pair(&format!("\n  {seed}\r\n"))?;
        assert_eq!(pair.seed()?.as_str(), seed);
        assert!(matches!(
            parse_decorated_signing_key_pair(&seed),
            Err(StrKeyError::NoSeedFound)
        ));
        Ok(())
    }

    #[test]
    fn test_corrupt_seed_block_propagates_codec_error() -> StrKeyResult<()> {
        let mut seed = seed_text(PrefixByte::User)?;
        seed.truncate(seed.len() - 4);
        seed.push_str("0000");
        let text = bundle("tok", &seed);
        assert!(matches!(
            parse_decorated_signing_key_pair(&text),
            Err(StrKeyError::InvalidChecksum)
        ));
        Ok(())
    }

    #[test]
    fn test_user_key_pair() -> StrKeyResult<()> {
        let user = bundle("tok", &seed_text(PrefixByte::User)?);
        assert!(parse_decorated_user_key_pair(&user)?.is_signing());

        let account = bundle("tok", &seed_text(PrefixByte::Account)?);
        assert!(matches!(
            parse_decorated_user_key_pair(&account),
            Err(StrKeyError::IncompatibleKey)
        ));
        Ok(())
    }
}
