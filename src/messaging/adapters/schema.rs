//! Diesel schema for message and channel persistence.
//!
//! The migrations behind this schema also create two composite indexes on
//! `messages`: (sender, recipient) for conversation fetches and
//! (recipient, read) for unread lookups. They keep `fetch_touching` and
//! `count_unread` sub-linear in total history size.

diesel::table! {
    /// Direct messages between channels.
    messages (id) {
        /// Unique message identifier.
        id -> Uuid,
        /// Sending channel identifier (24 hex characters).
        #[max_length = 24]
        sender -> Varchar,
        /// Receiving channel identifier (24 hex characters).
        #[max_length = 24]
        recipient -> Varchar,
        /// Message text.
        content -> Text,
        /// Whether the recipient has read the message.
        read -> Bool,
        /// When the message was sent.
        sent_at -> Timestamptz,
    }
}

diesel::table! {
    /// Channel display identities, owned by the channel collaborator.
    channels (id) {
        /// Channel identifier (24 hex characters).
        #[max_length = 24]
        id -> Varchar,
        /// Human-readable channel name.
        #[max_length = 255]
        name -> Varchar,
        /// Unique channel handle.
        #[max_length = 255]
        handle -> Varchar,
        /// Logo URL, if uploaded.
        #[max_length = 1024]
        logo_url -> Nullable<Varchar>,
    }
}
