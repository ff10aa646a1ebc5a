//! Opaque external identifiers.
//!
//! Internal identifiers are small sequential integers owned by the store.
//! They never leave the service in raw form: every identifier handed to a
//! client is a [`MaskedId`], which packs the local identifier together with
//! an entity kind and a shard number into a single `u64` and renders its
//! decimal form in base58.
//!
//! Bit layout of the packed value:
//!
//! ```text
//! | local id (36 bits) | kind (10 bits) | shard (18 bits) |
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;

const LOCAL_ID_SHIFT: u32 = 28;
const KIND_SHIFT: u32 = 18;
const KIND_MASK: u64 = 0x3FF;
const SHARD_MASK: u64 = 0x3_FFFF;
const DEFAULT_SHARD: u64 = 1;
const MIN_PACKED_VALUE: u64 = 1 << KIND_SHIFT;

/// Entity kinds that can be addressed through a masked identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A user owned by the user service.
    User,
    /// A task owned by this service.
    Task,
}

impl EntityKind {
    /// Returns the numeric tag embedded in the packed identifier.
    #[must_use]
    pub const fn tag(self) -> u16 {
        match self {
            Self::User => 1,
            Self::Task => 2,
        }
    }

    /// Resolves a numeric tag back to an entity kind.
    #[must_use]
    pub const fn from_tag(tag: u64) -> Option<Self> {
        match tag {
            1 => Some(Self::User),
            2 => Some(Self::Task),
            _ => None,
        }
    }

    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while decoding a masked identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MaskedIdError {
    /// The identifier is empty.
    #[error("identifier must not be empty")]
    Empty,

    /// The identifier contains characters outside the base58 alphabet.
    #[error("identifier '{0}' is not valid base58")]
    Encoding(String),

    /// The decoded payload does not have the packed identifier layout.
    #[error("identifier '{0}' does not have the expected structure")]
    Malformed(String),

    /// The identifier is well formed but addresses another entity kind.
    #[error("identifier '{value}' refers to a {actual}, expected a {expected}")]
    KindMismatch {
        /// Identifier as supplied.
        value: String,
        /// Kind the caller asked for.
        expected: EntityKind,
        /// Kind embedded in the identifier.
        actual: EntityKind,
    },
}

/// Reversible, opaque encoding of an internal identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskedId {
    local_id: NonZeroU32,
    kind: EntityKind,
}

impl MaskedId {
    /// Masks a local identifier of the given kind.
    #[must_use]
    pub const fn new(local_id: NonZeroU32, kind: EntityKind) -> Self {
        Self { local_id, kind }
    }

    /// Returns the unmasked local identifier.
    #[must_use]
    pub const fn local_id(self) -> NonZeroU32 {
        self.local_id
    }

    /// Returns the entity kind embedded in the identifier.
    #[must_use]
    pub const fn kind(self) -> EntityKind {
        self.kind
    }

    /// Decodes an identifier produced by [`MaskedId`]'s `Display`.
    ///
    /// Only canonical encodings are accepted: any input that would not be
    /// produced again by re-encoding the decoded value is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MaskedIdError`] when the value is empty, not base58, or not
    /// a canonical packed identifier.
    pub fn parse(value: &str) -> Result<Self, MaskedIdError> {
        if value.is_empty() {
            return Err(MaskedIdError::Empty);
        }

        let bytes = bs58::decode(value)
            .into_vec()
            .map_err(|_| MaskedIdError::Encoding(value.to_owned()))?;
        let malformed = || MaskedIdError::Malformed(value.to_owned());

        let digits = std::str::from_utf8(&bytes).map_err(|_| malformed())?;
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(malformed());
        }
        let packed = digits.parse::<u64>().map_err(|_| malformed())?;
        let masked = Self::unpack(packed).ok_or_else(malformed)?;

        if masked.to_string() != value {
            return Err(malformed());
        }
        Ok(masked)
    }

    /// Decodes an identifier and checks that it addresses `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`MaskedIdError::KindMismatch`] when the identifier is valid
    /// but of another kind, or any error from [`MaskedId::parse`].
    pub fn parse_as(value: &str, expected: EntityKind) -> Result<Self, MaskedIdError> {
        let masked = Self::parse(value)?;
        if masked.kind != expected {
            return Err(MaskedIdError::KindMismatch {
                value: value.to_owned(),
                expected,
                actual: masked.kind,
            });
        }
        Ok(masked)
    }

    fn pack(self) -> u64 {
        (u64::from(self.local_id.get()) << LOCAL_ID_SHIFT)
            | (u64::from(self.kind.tag()) << KIND_SHIFT)
            | DEFAULT_SHARD
    }

    fn unpack(packed: u64) -> Option<Self> {
        if packed < MIN_PACKED_VALUE || packed & SHARD_MASK != DEFAULT_SHARD {
            return None;
        }
        let kind = EntityKind::from_tag((packed >> KIND_SHIFT) & KIND_MASK)?;
        let raw_local_id = u32::try_from(packed >> LOCAL_ID_SHIFT).ok()?;
        let local_id = NonZeroU32::new(raw_local_id)?;
        Some(Self { local_id, kind })
    }
}

impl fmt::Display for MaskedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = bs58::encode(self.pack().to_string()).into_string();
        f.write_str(&encoded)
    }
}

impl FromStr for MaskedId {
    type Err = MaskedIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for MaskedId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MaskedId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
