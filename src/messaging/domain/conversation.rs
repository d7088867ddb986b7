//! Conversation identity and the derived summary types.
//!
//! A conversation is the unordered pair of channels plus the complete
//! message history between them. [`ConversationKey`] makes the unordered
//! pair explicit, so `fetch_conversation(a, b)` and `fetch_conversation(b, a)`
//! are structurally the same lookup. The summary types are recomputed per
//! request and never persisted.

use super::{ChannelId, ChannelProfile, Message, MessageId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalised identity of a two-party conversation.
///
/// Construction orders the pair, so the key is direction-independent.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::{ChannelId, ConversationKey};
///
/// let a = ChannelId::from_bytes([1; 12]);
/// let b = ChannelId::from_bytes([2; 12]);
/// assert_eq!(ConversationKey::new(a, b), ConversationKey::new(b, a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationKey {
    /// The smaller of the two channel identifiers.
    lower: ChannelId,

    /// The larger of the two channel identifiers.
    upper: ChannelId,
}

impl ConversationKey {
    /// Creates a key for the conversation between two channels.
    ///
    /// Argument order does not matter.
    #[must_use]
    pub fn new(a: ChannelId, b: ChannelId) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    /// Creates the key for the conversation a message belongs to.
    #[must_use]
    pub fn of_message(message: &Message) -> Self {
        Self::new(message.sender(), message.recipient())
    }

    /// Returns whether `channel` is one of the two parties.
    #[must_use]
    pub fn contains(&self, channel: ChannelId) -> bool {
        self.lower == channel || self.upper == channel
    }
}

/// Snapshot of the most recent message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMessage {
    /// The message text.
    content: String,

    /// When the message was sent.
    sent_at: DateTime<Utc>,

    /// Whether its recipient has read it.
    read: bool,
}

impl LastMessage {
    /// Captures the summary fields of a message.
    #[must_use]
    pub fn of(message: &Message) -> Self {
        Self {
            content: message.content().to_owned(),
            sent_at: message.sent_at(),
            read: message.read(),
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the message was sent.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// Returns whether the message has been read.
    #[must_use]
    pub const fn read(&self) -> bool {
        self.read
    }
}

/// One entry in a channel's ranked conversation list.
///
/// Derived per request from current store state; owns no persisted storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// The other party, resolved to its display identity.
    counterpart: ChannelProfile,

    /// The most recent message in the conversation.
    last_message: LastMessage,

    /// Count of unread messages addressed to the requesting channel.
    unread_count: u64,
}

impl ConversationSummary {
    /// Creates a summary for one counterpart.
    #[must_use]
    pub const fn new(
        counterpart: ChannelProfile,
        last_message: LastMessage,
        unread_count: u64,
    ) -> Self {
        Self {
            counterpart,
            last_message,
            unread_count,
        }
    }

    /// Returns the resolved counterpart identity.
    #[must_use]
    pub const fn counterpart(&self) -> &ChannelProfile {
        &self.counterpart
    }

    /// Returns the most recent message snapshot.
    #[must_use]
    pub const fn last_message(&self) -> &LastMessage {
        &self.last_message
    }

    /// Returns the unread count for the requesting channel.
    #[must_use]
    pub const fn unread_count(&self) -> u64 {
        self.unread_count
    }
}

/// A message with both ends resolved to display identities.
///
/// The shape returned by the fetch-conversation operation: identical to
/// [`Message`] except sender and recipient carry full profiles for
/// presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMessage {
    /// The message identifier.
    id: MessageId,

    /// The sending channel's display identity.
    sender: ChannelProfile,

    /// The receiving channel's display identity.
    recipient: ChannelProfile,

    /// The message text.
    content: String,

    /// Whether the recipient has read the message.
    read: bool,

    /// When the message was sent.
    sent_at: DateTime<Utc>,
}

impl ResolvedMessage {
    /// Pairs a message with the resolved profiles of its two ends.
    #[must_use]
    pub fn resolve(message: &Message, sender: ChannelProfile, recipient: ChannelProfile) -> Self {
        Self {
            id: message.id(),
            sender,
            recipient,
            content: message.content().to_owned(),
            read: message.read(),
            sent_at: message.sent_at(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sender's display identity.
    #[must_use]
    pub const fn sender(&self) -> &ChannelProfile {
        &self.sender
    }

    /// Returns the recipient's display identity.
    #[must_use]
    pub const fn recipient(&self) -> &ChannelProfile {
        &self.recipient
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the recipient has read the message.
    #[must_use]
    pub const fn read(&self) -> bool {
        self.read
    }

    /// Returns when the message was sent.
    #[must_use]
    pub const fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }
}
