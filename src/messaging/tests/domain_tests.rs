//! Unit tests for messaging domain types.
//!
//! Covers identifier parsing, message construction invariants, the
//! counterpart resolution function, conversation keys, and profiles.

use super::{at, channel, message_at};
use crate::messaging::domain::{
    CHANNEL_ID_HEX_LEN, ChannelId, ChannelProfile, ConversationKey, DEFAULT_LOGO_URL, LastMessage,
    Message, MessageError, ParseChannelIdError,
};
use mockable::DefaultClock;

// ============================================================================
// ChannelId parsing
// ============================================================================

#[test]
fn channel_id_parses_canonical_hex() {
    let id: ChannelId = "5f1e7c9a0b3d4e5f6a7b8c9d".parse().expect("valid id");
    assert_eq!(id.to_string(), "5f1e7c9a0b3d4e5f6a7b8c9d");
}

#[test]
fn channel_id_parsing_is_case_insensitive() {
    let lower: ChannelId = "5f1e7c9a0b3d4e5f6a7b8c9d".parse().expect("lower");
    let upper: ChannelId = "5F1E7C9A0B3D4E5F6A7B8C9D".parse().expect("upper");
    assert_eq!(lower, upper);
}

#[test]
fn channel_id_rejects_wrong_length() {
    let result = ChannelId::from_hex("abc123");
    assert_eq!(
        result,
        Err(ParseChannelIdError::InvalidLength { actual: 6 })
    );
}

#[test]
fn channel_id_rejects_non_hex_characters() {
    let result = ChannelId::from_hex("zzzzzzzzzzzzzzzzzzzzzzzz");
    assert_eq!(result, Err(ParseChannelIdError::InvalidHex));
}

#[test]
fn channel_id_display_roundtrips_through_parse() {
    let id = channel(0xab);
    let reparsed: ChannelId = id.to_string().parse().expect("roundtrip");
    assert_eq!(id, reparsed);
    assert_eq!(id.to_string().len(), CHANNEL_ID_HEX_LEN);
}

#[test]
fn channel_id_serialises_as_hex_string() {
    let id = channel(0x01);
    let json = serde_json::to_string(&id).expect("serialise");
    assert_eq!(json, "\"010101010101010101010101\"");

    let back: ChannelId = serde_json::from_str(&json).expect("deserialise");
    assert_eq!(back, id);
}

// ============================================================================
// Message construction
// ============================================================================

#[test]
fn message_new_starts_unread() {
    let message =
        Message::new(channel(1), channel(2), "hello", &DefaultClock).expect("valid message");
    assert!(!message.read());
    assert_eq!(message.content(), "hello");
}

#[test]
fn message_new_trims_content() {
    let message =
        Message::new(channel(1), channel(2), "  hello  ", &DefaultClock).expect("valid message");
    assert_eq!(message.content(), "hello");
}

#[test]
fn message_new_rejects_whitespace_only_content() {
    let result = Message::new(channel(1), channel(2), "   ", &DefaultClock);
    assert_eq!(result, Err(MessageError::EmptyContent));
}

#[test]
fn message_new_rejects_self_addressed() {
    let result = Message::new(channel(1), channel(1), "hi", &DefaultClock);
    assert_eq!(result, Err(MessageError::SelfAddressed));
}

#[test]
fn message_from_persisted_revalidates_invariants() {
    let result = Message::from_persisted(
        crate::messaging::domain::MessageId::new(),
        channel(3),
        channel(3),
        "hi",
        false,
        at(10),
    );
    assert_eq!(result, Err(MessageError::SelfAddressed));
}

// ============================================================================
// Read flag transitions
// ============================================================================

#[test]
fn mark_read_is_one_way_and_idempotent() {
    let mut message = message_at(channel(1), channel(2), "hi", false, 10);
    assert!(!message.read());

    message.mark_read();
    assert!(message.read());

    message.mark_read();
    assert!(message.read());
}

// ============================================================================
// Counterpart resolution
// ============================================================================

#[test]
fn counterpart_of_resolves_both_directions() {
    let message = message_at(channel(1), channel(2), "hi", false, 10);
    assert_eq!(message.counterpart_of(channel(1)), Some(channel(2)));
    assert_eq!(message.counterpart_of(channel(2)), Some(channel(1)));
}

#[test]
fn counterpart_of_returns_none_for_outsider() {
    let message = message_at(channel(1), channel(2), "hi", false, 10);
    assert_eq!(message.counterpart_of(channel(9)), None);
}

#[test]
fn is_unread_for_counts_only_inbound_unread() {
    let message = message_at(channel(1), channel(2), "hi", false, 10);
    assert!(message.is_unread_for(channel(2)));
    assert!(!message.is_unread_for(channel(1)));

    let read_message = message_at(channel(1), channel(2), "hi", true, 10);
    assert!(!read_message.is_unread_for(channel(2)));
}

// ============================================================================
// ConversationKey
// ============================================================================

#[test]
fn conversation_key_is_direction_independent() {
    let key_ab = ConversationKey::new(channel(1), channel(2));
    let key_ba = ConversationKey::new(channel(2), channel(1));
    assert_eq!(key_ab, key_ba);
}

#[test]
fn conversation_key_of_message_matches_participants() {
    let message = message_at(channel(1), channel(2), "hi", false, 10);
    let key = ConversationKey::of_message(&message);
    assert!(key.contains(channel(1)));
    assert!(key.contains(channel(2)));
    assert!(!key.contains(channel(3)));
}

// ============================================================================
// LastMessage and ChannelProfile
// ============================================================================

#[test]
fn last_message_captures_summary_fields() {
    let message = message_at(channel(1), channel(2), "latest", false, 42);
    let last = LastMessage::of(&message);
    assert_eq!(last.content(), "latest");
    assert_eq!(last.sent_at(), at(42));
    assert!(!last.read());
}

#[test]
fn profile_falls_back_to_default_logo() {
    let profile = ChannelProfile::new(channel(1), "Ada", "ada");
    assert_eq!(profile.logo_url(), DEFAULT_LOGO_URL);
}

#[test]
fn profile_keeps_uploaded_logo() {
    let profile =
        ChannelProfile::new(channel(1), "Ada", "ada").with_logo_url("/img/ada.png");
    assert_eq!(profile.logo_url(), "/img/ada.png");
    assert_eq!(profile.name(), "Ada");
    assert_eq!(profile.handle(), "ada");
}
