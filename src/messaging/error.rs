//! Error types for the messaging subsystem.
//!
//! Two layers of errors, both built on `thiserror`: [`StoreError`] for the
//! persistence boundary and [`MessagingError`] for the service surface. The
//! service taxonomy is deliberately small so the excluded API layer can map
//! each variant to a transport status without inspecting details.

use super::domain::{ChannelId, MessageError, MessageId, ParseChannelIdError};
use super::ports::policy::ContentPolicyError;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur at the message store boundary.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A message with this identifier already exists.
    ///
    /// Appends are never retried blindly; a caller that supplied an
    /// idempotency token sees this when the original append succeeded.
    #[error("duplicate message: {0}")]
    DuplicateMessage(MessageId),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(Arc<dyn std::error::Error + Send + Sync>),

    /// A stored row could not be converted back into a domain message.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The store could not be reached.
    #[error("connection error: {0}")]
    Connection(String),
}

impl StoreError {
    /// Creates a database error from any error type.
    #[must_use]
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database(Arc::new(err))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        // Unique violations are mapped by the adapter where the message id
        // is known; everything else is an opaque database failure.
        Self::database(err)
    }
}

/// Errors surfaced by the messaging service operations.
///
/// Carries kind plus human-readable detail; presentation (status codes,
/// envelopes, redirects) is owned entirely by the excluded API layer.
#[derive(Debug, Error)]
pub enum MessagingError {
    /// The caller supplied a malformed identifier, a self-addressed
    /// message, or otherwise invalid input. Never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced channel does not exist.
    #[error("channel not found: {0}")]
    NotFound(ChannelId),

    /// The content policy rejected the message text.
    #[error("content validation failed: {0}")]
    ValidationFailed(#[source] ContentPolicyError),

    /// The store cannot be reached or queried; safe for the caller to
    /// retry everything except a bare append.
    #[error("message store unavailable: {0}")]
    Unavailable(#[source] StoreError),
}

impl MessagingError {
    /// Creates an invalid-argument error with a descriptive reason.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}

impl From<ParseChannelIdError> for MessagingError {
    fn from(err: ParseChannelIdError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<MessageError> for MessagingError {
    fn from(err: MessageError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<ContentPolicyError> for MessagingError {
    fn from(err: ContentPolicyError) -> Self {
        Self::ValidationFailed(err)
    }
}

impl From<StoreError> for MessagingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateMessage(id) => {
                Self::InvalidArgument(format!("message {id} already exists"))
            }
            other => Self::Unavailable(other),
        }
    }
}
