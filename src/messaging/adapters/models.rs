//! Diesel model types for message and channel persistence.
//!
//! These types map database rows to Rust structs using Diesel's derive
//! macros. They serve as the boundary between the database and domain
//! layers.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{channels, messages};
use crate::messaging::{
    domain::{ChannelId, ChannelProfile, Message, MessageId, ParseChannelIdError},
    error::StoreError,
    ports::store::StoreResult,
};

/// Database row representation of a message.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sending channel identifier as hex text.
    pub sender: String,
    /// Receiving channel identifier as hex text.
    pub recipient: String,
    /// Message text.
    pub content: String,
    /// Whether the recipient has read the message.
    pub read: bool,
    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
}

impl MessageRow {
    /// Converts a database row back into a domain message.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if a channel identifier column
    /// does not parse or the row violates a domain invariant.
    pub fn into_domain(self) -> StoreResult<Message> {
        let sender: ChannelId = self
            .sender
            .parse()
            .map_err(|e: ParseChannelIdError| {
                StoreError::serialization(e.to_string())
            })?;
        let recipient: ChannelId = self
            .recipient
            .parse()
            .map_err(|e: ParseChannelIdError| {
                StoreError::serialization(e.to_string())
            })?;

        Message::from_persisted(
            MessageId::from_uuid(self.id),
            sender,
            recipient,
            self.content,
            self.read,
            self.sent_at,
        )
        .map_err(|e| StoreError::serialization(e.to_string()))
    }
}

/// Data for inserting a new message.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sending channel identifier as hex text.
    pub sender: String,
    /// Receiving channel identifier as hex text.
    pub recipient: String,
    /// Message text.
    pub content: String,
    /// Whether the recipient has read the message.
    pub read: bool,
    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
}

impl From<&Message> for NewMessageRow {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().into_inner(),
            sender: message.sender().to_string(),
            recipient: message.recipient().to_string(),
            content: message.content().to_owned(),
            read: message.read(),
            sent_at: message.sent_at(),
        }
    }
}

/// Database row representation of a channel profile.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = channels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ChannelRow {
    /// Channel identifier as hex text.
    pub id: String,
    /// Human-readable channel name.
    pub name: String,
    /// Unique channel handle.
    pub handle: String,
    /// Logo URL, if uploaded.
    pub logo_url: Option<String>,
}

impl ChannelRow {
    /// Converts a database row into a channel profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the identifier column does
    /// not parse.
    pub fn into_domain(self) -> StoreResult<ChannelProfile> {
        let id: ChannelId = self
            .id
            .parse()
            .map_err(|e: ParseChannelIdError| {
                StoreError::serialization(e.to_string())
            })?;

        let mut profile = ChannelProfile::new(id, self.name, self.handle);
        if let Some(logo_url) = self.logo_url {
            profile = profile.with_logo_url(logo_url);
        }
        Ok(profile)
    }
}
