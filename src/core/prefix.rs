//! Prefix bytes: the single-byte type tags carried by every encoding.
//!
//! Five tags name the kind of identity a public key represents (operator,
//! account, user, server, cluster). Two are structural: `Seed` marks an
//! encoded seed and `Private` marks an encoded private key. `Unknown` is a
//! sentinel and is never accepted on the wire.

use core::fmt::{self, Display};

use crate::core::error::StrKeyError;

/// A lead byte representing the type of an encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PrefixByte {
    /// Encoded seed marker.
    Seed = b'S',
    /// Encoded private key.
    Private = b'P',
    /// Server identity.
    Server = b'N',
    /// Cluster identity.
    Cluster = b'C',
    /// Operator identity.
    Operator = b'O',
    /// Account identity.
    Account = b'A',
    /// User identity.
    User = b'U',
    /// Sentinel for unrecognized or reset tags.
    Unknown = b'X',
}

/// The five public (identity) categories.
pub const PUBLIC_PREFIXES: [PrefixByte; 5] = [
    PrefixByte::Operator,
    PrefixByte::Account,
    PrefixByte::User,
    PrefixByte::Server,
    PrefixByte::Cluster,
];

/// Mask selecting the high five bits, which is all the seed marker occupies.
pub(crate) const SEED_MARKER_MASK: u8 = 0b1111_1000;

impl PrefixByte {
    /// Returns the wire value of this tag.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Maps a wire byte to a tag. Unrecognized bytes map to `Unknown`.
    #[must_use]
    pub const fn from_u8(byte: u8) -> Self {
        match byte {
            b'S' => Self::Seed,
            b'P' => Self::Private,
            b'N' => Self::Server,
            b'C' => Self::Cluster,
            b'O' => Self::Operator,
            b'A' => Self::Account,
            b'U' => Self::User,
            _ => Self::Unknown,
        }
    }

    /// True for the seven tags that may appear on the wire.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// True for the five identity categories.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(
            self,
            Self::Operator | Self::Account | Self::User | Self::Server | Self::Cluster
        )
    }

    /// Lower-case name of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Server => "server",
            Self::Cluster => "cluster",
            Self::Account => "account",
            Self::User => "user",
            Self::Seed => "seed",
            Self::Private => "private",
            Self::Unknown => "unknown",
        }
    }
}

/// Fails with `InvalidPrefix` unless `prefix` is one of the seven wire tags.
pub(crate) fn check_valid_prefix(prefix: PrefixByte) -> Result<(), StrKeyError> {
    if prefix.is_valid() {
        Ok(())
    } else {
        Err(StrKeyError::InvalidPrefix)
    }
}

/// Fails with `InvalidPrefix` unless `prefix` is a public category.
pub(crate) fn check_public_prefix(prefix: PrefixByte) -> Result<(), StrKeyError> {
    if prefix.is_public() {
        Ok(())
    } else {
        Err(StrKeyError::InvalidPrefix)
    }
}

impl Display for PrefixByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<PrefixByte> for u8 {
    fn from(prefix: PrefixByte) -> Self {
        prefix.as_u8()
    }
}

impl TryFrom<u8> for PrefixByte {
    type Error = StrKeyError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        let prefix = Self::from_u8(byte);
        check_valid_prefix(prefix)?;
        Ok(prefix)
    }
}

// =============================================================================
// Serde (serialized as the wire character, e.g. "U")
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for PrefixByte {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(char::from(self.as_u8()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrefixByte {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let c = char::deserialize(deserializer)?;
        let byte = u8::try_from(c).map_err(serde::de::Error::custom)?;
        Self::try_from(byte).map_err(serde::de::Error::custom)
    }
}
