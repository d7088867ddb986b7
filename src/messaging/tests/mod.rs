//! Unit tests for the messaging module.
//!
//! Tests are organised by layer: domain types, the in-memory store
//! adapter, the aggregation core, and the service surface.

mod aggregator_tests;
mod domain_tests;

use crate::messaging::domain::{ChannelId, Message, MessageId};
use chrono::{DateTime, Utc};

/// Builds a channel id with a recognisable byte pattern.
pub(crate) const fn channel(n: u8) -> ChannelId {
    ChannelId::from_bytes([n; 12])
}

/// Builds a timestamp `secs` seconds after the epoch.
pub(crate) fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid timestamp")
}

/// Builds a persisted message with an explicit timestamp.
pub(crate) fn message_at(
    sender: ChannelId,
    recipient: ChannelId,
    content: &str,
    read: bool,
    secs: i64,
) -> Message {
    Message::from_persisted(MessageId::new(), sender, recipient, content, read, at(secs))
        .expect("valid message")
}
