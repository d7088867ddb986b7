//! Store port for message persistence.
//!
//! Defines the abstract interface over the durable message ledger,
//! allowing different persistence implementations (`PostgreSQL`,
//! in-memory, etc.).

use crate::messaging::{
    domain::{ChannelId, Message},
    error::StoreError,
};
use async_trait::async_trait;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Port for message persistence operations.
///
/// The ledger is append-only apart from the one-way read flag flip in
/// [`mark_read`](MessageStore::mark_read).
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Message identifiers are unique across the entire store
/// - An append fully commits or not at all (no partial rows)
/// - `mark_read` flips flags atomically per message and is idempotent
/// - Concurrent appends, flips, and reads are handled safely
/// - `fetch_touching` and `count_unread` stay sub-linear in total history
///   size; production adapters must index by sender and by
///   (recipient, read)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Durably appends a new message.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateMessage`] if a message with the same
    /// identifier already exists, or another `StoreError` if the store
    /// cannot be reached.
    async fn append(&self, message: &Message) -> StoreResult<()>;

    /// Marks every unread message from `counterpart` to `recipient` as read.
    ///
    /// Returns the number of messages flipped. Idempotent: re-invocation
    /// flips nothing and returns zero.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the update fails.
    async fn mark_read(&self, counterpart: ChannelId, recipient: ChannelId) -> StoreResult<u64>;

    /// Returns every message between two channels, regardless of direction,
    /// ascending by send time with message id as the deterministic
    /// tie-break.
    ///
    /// Argument order does not matter. An empty history yields an empty
    /// vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    async fn fetch_conversation(&self, a: ChannelId, b: ChannelId) -> StoreResult<Vec<Message>>;

    /// Returns every message where `channel` is sender or recipient.
    ///
    /// No ordering guarantee; the aggregator imposes its own ordering.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    async fn fetch_touching(&self, channel: ChannelId) -> StoreResult<Vec<Message>>;

    /// Counts unread messages addressed to `channel`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    async fn count_unread(&self, channel: ChannelId) -> StoreResult<u64>;

    /// Reports whether the store can currently serve requests.
    ///
    /// Readiness lives on the store handle so callers check it at the
    /// request boundary rather than consulting shared global state.
    async fn healthy(&self) -> bool;
}
