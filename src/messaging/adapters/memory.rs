//! In-memory implementations of the `MessageStore` and `ChannelDirectory`
//! ports.
//!
//! Thread-safe via internal locks; suitable for unit tests only. The store
//! keeps the same secondary indexes the production schema carries (by
//! sender, and by recipient for the unread set), so index maintenance bugs
//! surface in unit tests rather than only against `PostgreSQL`.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::messaging::{
    domain::{ChannelId, ChannelProfile, Message, MessageId},
    error::StoreError,
    ports::directory::ChannelDirectory,
    ports::store::{MessageStore, StoreResult},
};

/// Index and row state behind the store's lock.
#[derive(Debug, Default)]
struct StoreInner {
    messages: HashMap<MessageId, Message>,
    by_sender: HashMap<ChannelId, Vec<MessageId>>,
    by_recipient: HashMap<ChannelId, Vec<MessageId>>,
    unread_by_recipient: HashMap<ChannelId, HashSet<MessageId>>,
}

/// In-memory implementation of [`MessageStore`].
///
/// # Example
///
/// ```
/// use courier::messaging::adapters::memory::InMemoryMessageStore;
///
/// let store = InMemoryMessageStore::new();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessageStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty store. For error-propagating access, use the
    /// store trait methods instead.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().map(|guard| guard.messages.len()).unwrap_or(0)
    }

    /// Returns `true` if no messages are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> StoreError {
    StoreError::connection(format!("lock poisoned: {err}"))
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn append(&self, message: &Message) -> StoreResult<()> {
        let mut guard = self.inner.write().map_err(poisoned)?;

        if guard.messages.contains_key(&message.id()) {
            return Err(StoreError::DuplicateMessage(message.id()));
        }

        guard
            .by_sender
            .entry(message.sender())
            .or_default()
            .push(message.id());
        guard
            .by_recipient
            .entry(message.recipient())
            .or_default()
            .push(message.id());
        if !message.read() {
            guard
                .unread_by_recipient
                .entry(message.recipient())
                .or_default()
                .insert(message.id());
        }
        guard.messages.insert(message.id(), message.clone());

        Ok(())
    }

    async fn mark_read(&self, counterpart: ChannelId, recipient: ChannelId) -> StoreResult<u64> {
        let mut guard = self.inner.write().map_err(poisoned)?;

        let matching: Vec<MessageId> = guard
            .unread_by_recipient
            .get(&recipient)
            .map(|unread| {
                unread
                    .iter()
                    .copied()
                    .filter(|id| {
                        guard
                            .messages
                            .get(id)
                            .is_some_and(|m| m.sender() == counterpart)
                    })
                    .collect()
            })
            .unwrap_or_default();

        for id in &matching {
            if let Some(message) = guard.messages.get_mut(id) {
                message.mark_read();
            }
        }
        if let Some(unread) = guard.unread_by_recipient.get_mut(&recipient) {
            for id in &matching {
                unread.remove(id);
            }
        }

        Ok(u64::try_from(matching.len()).unwrap_or(u64::MAX))
    }

    async fn fetch_conversation(&self, a: ChannelId, b: ChannelId) -> StoreResult<Vec<Message>> {
        let guard = self.inner.read().map_err(poisoned)?;

        let one_way = |sender: ChannelId, recipient: ChannelId| -> Vec<Message> {
            guard
                .by_sender
                .get(&sender)
                .into_iter()
                .flatten()
                .filter_map(|id| guard.messages.get(id))
                .filter(|m| m.recipient() == recipient)
                .cloned()
                .collect()
        };

        let mut messages = one_way(a, b);
        messages.extend(one_way(b, a));
        messages.sort_by_key(|m| (m.sent_at(), m.id()));

        Ok(messages)
    }

    async fn fetch_touching(&self, channel: ChannelId) -> StoreResult<Vec<Message>> {
        let guard = self.inner.read().map_err(poisoned)?;

        let sent = guard.by_sender.get(&channel).into_iter().flatten();
        let received = guard.by_recipient.get(&channel).into_iter().flatten();

        Ok(sent
            .chain(received)
            .filter_map(|id| guard.messages.get(id))
            .cloned()
            .collect())
    }

    async fn count_unread(&self, channel: ChannelId) -> StoreResult<u64> {
        let guard = self.inner.read().map_err(poisoned)?;

        let count = guard
            .unread_by_recipient
            .get(&channel)
            .map_or(0, HashSet::len);

        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn healthy(&self) -> bool {
        self.inner.read().is_ok()
    }
}

/// In-memory implementation of [`ChannelDirectory`].
///
/// Channels are registered explicitly; removing one lets tests reproduce
/// the stale-counterpart case the aggregator must tolerate.
///
/// # Example
///
/// ```
/// use courier::messaging::adapters::memory::InMemoryChannelDirectory;
/// use courier::messaging::domain::{ChannelId, ChannelProfile};
///
/// let directory = InMemoryChannelDirectory::new();
/// let id = ChannelId::from_bytes([1; 12]);
/// directory.register(ChannelProfile::new(id, "Ada", "ada"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryChannelDirectory {
    channels: Arc<RwLock<HashMap<ChannelId, ChannelProfile>>>,
}

impl InMemoryChannelDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a channel profile, replacing any previous one.
    pub fn register(&self, profile: ChannelProfile) {
        if let Ok(mut guard) = self.channels.write() {
            guard.insert(profile.id(), profile);
        }
    }

    /// Removes a channel from the directory.
    pub fn remove(&self, id: ChannelId) {
        if let Ok(mut guard) = self.channels.write() {
            guard.remove(&id);
        }
    }
}

#[async_trait]
impl ChannelDirectory for InMemoryChannelDirectory {
    async fn exists(&self, id: ChannelId) -> StoreResult<bool> {
        let guard = self.channels.read().map_err(poisoned)?;
        Ok(guard.contains_key(&id))
    }

    async fn resolve(&self, id: ChannelId) -> StoreResult<Option<ChannelProfile>> {
        let guard = self.channels.read().map_err(poisoned)?;
        Ok(guard.get(&id).cloned())
    }
}
