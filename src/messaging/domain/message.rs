//! The Message aggregate root: a single direct message between two channels.
//!
//! A message's identity fields (`id`, `sender`, `recipient`, `sent_at`) are
//! immutable after creation. The only permitted mutation is the one-way
//! read flag transition from unread to read.

use super::{ChannelId, MessageId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A direct message from one channel to another.
///
/// # Invariants
///
/// - `sender != recipient` (self-messaging is forbidden)
/// - `content` is trimmed and non-empty (enforced at construction)
/// - `read` starts `false` and only ever transitions to `true`
/// - `sent_at` is assigned at creation and never changes
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::{ChannelId, Message};
/// use mockable::DefaultClock;
///
/// let sender = ChannelId::from_bytes([1; 12]);
/// let recipient = ChannelId::from_bytes([2; 12]);
/// let message = Message::new(sender, recipient, "hello", &DefaultClock)
///     .expect("valid message");
///
/// assert_eq!(message.sender(), sender);
/// assert!(!message.read());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// The channel that sent the message.
    sender: ChannelId,

    /// The channel the message is addressed to.
    recipient: ChannelId,

    /// The message text, trimmed of surrounding whitespace.
    content: String,

    /// Whether the recipient has read the message.
    read: bool,

    /// When the message was sent.
    sent_at: DateTime<Utc>,
}

impl Message {
    /// Creates a new unread message with the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::SelfAddressed`] if sender and recipient are
    /// the same channel, or [`MessageError::EmptyContent`] if the content is
    /// empty after trimming.
    pub fn new(
        sender: ChannelId,
        recipient: ChannelId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, MessageError> {
        Self::new_with_id(MessageId::new(), sender, recipient, content, clock)
    }

    /// Creates a new unread message with a caller-supplied identifier.
    ///
    /// Callers needing exactly-once delivery can supply a client-generated
    /// identifier here as an idempotency token; the store rejects a second
    /// append with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::SelfAddressed`] if sender and recipient are
    /// the same channel, or [`MessageError::EmptyContent`] if the content is
    /// empty after trimming.
    pub fn new_with_id(
        id: MessageId,
        sender: ChannelId,
        recipient: ChannelId,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, MessageError> {
        Self::from_persisted(id, sender, recipient, content, false, clock.utc())
    }

    /// Reconstructs a message from persisted state.
    ///
    /// Re-validates the domain invariants so a corrupt row cannot produce
    /// an invalid aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::SelfAddressed`] if sender and recipient are
    /// the same channel, or [`MessageError::EmptyContent`] if the content is
    /// empty after trimming.
    pub fn from_persisted(
        id: MessageId,
        sender: ChannelId,
        recipient: ChannelId,
        content: impl Into<String>,
        read: bool,
        sent_at: DateTime<Utc>,
    ) -> Result<Self, MessageError> {
        if sender == recipient {
            return Err(MessageError::SelfAddressed);
        }

        let content = content.into().trim().to_owned();
        if content.is_empty() {
            return Err(MessageError::EmptyContent);
        }

        Ok(Self {
            id,
            sender,
            recipient,
            content,
            read,
            sent_at,
        })
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sending channel.
    #[must_use]
    pub const fn sender(&self) -> ChannelId {
        self.sender
    }

    /// Returns the receiving channel.
    #[must_use]
    pub const fn recipient(&self) -> ChannelId {
        self.recipient
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

    /// Marks the message as read.
    ///
    /// The transition is one-way: marking an already-read message is a
    /// no-op, and there is no way back to unread.
    pub const fn mark_read(&mut self) {
        self.read = true;
    }

    /// Returns the other party of this message from `viewer`'s perspective.
    ///
    /// This is the grouping key for conversation aggregation: a conversation
    /// is identified by the counterpart regardless of message direction.
    /// Returns `None` if `viewer` is neither sender nor recipient.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier::messaging::domain::{ChannelId, Message};
    /// use mockable::DefaultClock;
    ///
    /// let a = ChannelId::from_bytes([1; 12]);
    /// let b = ChannelId::from_bytes([2; 12]);
    /// let message = Message::new(a, b, "hi", &DefaultClock).expect("valid");
    ///
    /// assert_eq!(message.counterpart_of(a), Some(b));
    /// assert_eq!(message.counterpart_of(b), Some(a));
    /// assert_eq!(message.counterpart_of(ChannelId::from_bytes([3; 12])), None);
    /// ```
    #[must_use]
    pub fn counterpart_of(&self, viewer: ChannelId) -> Option<ChannelId> {
        if self.sender == viewer {
            Some(self.recipient)
        } else if self.recipient == viewer {
            Some(self.sender)
        } else {
            None
        }
    }

    /// Returns whether this message counts towards `viewer`'s unread total.
    ///
    /// Only inbound unread messages count; messages `viewer` sent never
    /// contribute to its own unread count.
    #[must_use]
    pub fn is_unread_for(&self, viewer: ChannelId) -> bool {
        self.recipient == viewer && !self.read
    }
}

/// Errors that can occur when constructing a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Sender and recipient are the same channel.
    #[error("cannot send messages to yourself")]
    SelfAddressed,

    /// The content is empty after trimming.
    #[error("message content cannot be empty")]
    EmptyContent,
}
