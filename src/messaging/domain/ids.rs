//! Domain identifier newtypes for channels and messages.
//!
//! Channel identifiers arrive from the platform's identity collaborator as
//! opaque 24-character hexadecimal strings; parsing happens at the boundary
//! so malformed values never reach the store. Message identifiers are UUIDs
//! assigned at creation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Length of a channel identifier in hexadecimal characters.
pub const CHANNEL_ID_HEX_LEN: usize = 24;

/// Number of raw bytes backing a channel identifier.
const CHANNEL_ID_BYTE_LEN: usize = 12;

/// Opaque identifier for a channel.
///
/// Wraps the platform's fixed-length identifier format: exactly 24
/// hexadecimal characters encoding 12 bytes. Parsing is case-insensitive;
/// the canonical textual form is lowercase.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::ChannelId;
///
/// let id: ChannelId = "5f1e7c9a0b3d4e5f6a7b8c9d".parse().expect("valid id");
/// assert_eq!(id.to_string(), "5f1e7c9a0b3d4e5f6a7b8c9d");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId([u8; CHANNEL_ID_BYTE_LEN]);

impl ChannelId {
    /// Creates a channel identifier from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; CHANNEL_ID_BYTE_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes of the identifier.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; CHANNEL_ID_BYTE_LEN] {
        &self.0
    }

    /// Parses a channel identifier from its hexadecimal textual form.
    ///
    /// # Errors
    ///
    /// Returns [`ParseChannelIdError::InvalidLength`] if the input is not
    /// exactly [`CHANNEL_ID_HEX_LEN`] characters, or
    /// [`ParseChannelIdError::InvalidHex`] if any character is not a
    /// hexadecimal digit.
    pub fn from_hex(value: &str) -> Result<Self, ParseChannelIdError> {
        if value.len() != CHANNEL_ID_HEX_LEN {
            return Err(ParseChannelIdError::InvalidLength {
                actual: value.len(),
            });
        }

        let mut bytes = [0_u8; CHANNEL_ID_BYTE_LEN];
        for (slot, pair) in bytes.iter_mut().zip(value.as_bytes().chunks_exact(2)) {
            let digits =
                std::str::from_utf8(pair).map_err(|_| ParseChannelIdError::InvalidHex)?;
            *slot = u8::from_str_radix(digits, 16).map_err(|_| ParseChannelIdError::InvalidHex)?;
        }

        Ok(Self(bytes))
    }
}

impl FromStr for ChannelId {
    type Err = ParseChannelIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for ChannelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChannelId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing a [`ChannelId`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseChannelIdError {
    /// The input was not exactly [`CHANNEL_ID_HEX_LEN`] characters long.
    #[error("channel id must be {CHANNEL_ID_HEX_LEN} hexadecimal characters, got {actual}")]
    InvalidLength {
        /// The length of the rejected input.
        actual: usize,
    },

    /// The input contained a non-hexadecimal character.
    #[error("channel id must contain only hexadecimal characters")]
    InvalidHex,
}

/// Unique identifier for a message.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::MessageId;
///
/// let id = MessageId::new();
/// assert!(!id.as_ref().is_nil());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a message identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

/// Note: This implementation generates a new random UUID on each call,
/// which is non-standard behaviour for `Default`. Use `MessageId::new()`
/// if the intent to generate a random ID should be explicit.
impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for MessageId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
