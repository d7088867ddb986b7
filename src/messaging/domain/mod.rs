//! Domain types for the messaging subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are serialisable via serde; the only mutable state anywhere in
//! the model is the one-way read flag on [`Message`].

mod conversation;
mod ids;
mod message;
mod profile;

pub use conversation::{ConversationKey, ConversationSummary, LastMessage, ResolvedMessage};
pub use ids::{CHANNEL_ID_HEX_LEN, ChannelId, MessageId, ParseChannelIdError};
pub use message::{Message, MessageError};
pub use profile::{ChannelProfile, DEFAULT_LOGO_URL};
