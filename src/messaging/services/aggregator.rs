//! Conversation aggregation: grouping, ranking, and unread accounting.
//!
//! Turns the flat stream of messages touching a channel into a ranked,
//! deduplicated list of conversation summaries, one per counterpart. The
//! grouping and ranking core is a pure function over domain messages;
//! the service wrapper adds store access and counterpart resolution.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::messaging::{
    domain::{ChannelId, ConversationSummary, LastMessage, Message, MessageId},
    ports::directory::ChannelDirectory,
    ports::store::{MessageStore, StoreResult},
};

/// One conversation group before counterpart resolution.
///
/// Produced by [`rank_conversations`]; carries the raw counterpart
/// identifier rather than a resolved profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationLead {
    counterpart: ChannelId,
    last: Message,
    unread_count: u64,
}

impl ConversationLead {
    /// Returns the counterpart channel.
    #[must_use]
    pub const fn counterpart(&self) -> ChannelId {
        self.counterpart
    }

    /// Returns the most recent message in the group.
    #[must_use]
    pub const fn last(&self) -> &Message {
        &self.last
    }

    /// Returns the unread count for the requesting channel.
    #[must_use]
    pub const fn unread_count(&self) -> u64 {
        self.unread_count
    }
}

/// Recency ordering key: send time, then message id.
///
/// The id component makes tie-breaking deterministic when two messages
/// share a timestamp, so repeated aggregation over identical input yields
/// identical output.
fn recency_key(message: &Message) -> (DateTime<Utc>, MessageId) {
    (message.sent_at(), message.id())
}

/// Groups messages by counterpart and ranks the groups by recency.
///
/// For each message the counterpart is the other party from `current`'s
/// perspective, independent of direction. Each group reduces to its most
/// recent message plus the count of unread messages addressed to
/// `current`; messages `current` sent never contribute to its own unread
/// count. Groups are returned most-recently-active first.
///
/// Messages not touching `current` are ignored rather than treated as an
/// error; the store should never produce them.
#[must_use]
pub fn rank_conversations(messages: Vec<Message>, current: ChannelId) -> Vec<ConversationLead> {
    let mut groups: HashMap<ChannelId, ConversationLead> = HashMap::new();

    for message in messages {
        let Some(counterpart) = message.counterpart_of(current) else {
            continue;
        };
        let unread = u64::from(message.is_unread_for(current));

        match groups.entry(counterpart) {
            Entry::Occupied(mut entry) => {
                let lead = entry.get_mut();
                lead.unread_count = lead.unread_count.saturating_add(unread);
                if recency_key(&message) > recency_key(&lead.last) {
                    lead.last = message;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(ConversationLead {
                    counterpart,
                    last: message,
                    unread_count: unread,
                });
            }
        }
    }

    let mut leads: Vec<ConversationLead> = groups.into_values().collect();
    leads.sort_by(|a, b| recency_key(&b.last).cmp(&recency_key(&a.last)));
    leads
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Ranked summaries, most recently active conversation first.
    summaries: Vec<ConversationSummary>,

    /// Number of conversations dropped because their counterpart no
    /// longer resolves. Exposed so silent data loss stays observable.
    dropped_counterparts: u64,
}

impl Aggregation {
    /// Returns the ranked summaries.
    #[must_use]
    pub fn summaries(&self) -> &[ConversationSummary] {
        &self.summaries
    }

    /// Consumes the aggregation, returning the ranked summaries.
    #[must_use]
    pub fn into_summaries(self) -> Vec<ConversationSummary> {
        self.summaries
    }

    /// Returns how many conversations were dropped during resolution.
    #[must_use]
    pub const fn dropped_counterparts(&self) -> u64 {
        self.dropped_counterparts
    }
}

/// Derives ranked conversation summaries from the message store.
///
/// Reads are point-in-time: the aggregation reflects the store as of the
/// initial fetch and need not include concurrently appended messages.
#[derive(Debug, Clone)]
pub struct ConversationAggregator<S, D> {
    store: Arc<S>,
    directory: Arc<D>,
}

impl<S, D> ConversationAggregator<S, D>
where
    S: MessageStore,
    D: ChannelDirectory,
{
    /// Creates an aggregator over the given store and directory.
    #[must_use]
    pub const fn new(store: Arc<S>, directory: Arc<D>) -> Self {
        Self { store, directory }
    }

    /// Builds the ranked conversation list for `current`.
    ///
    /// A channel with no message history yields an empty aggregation, not
    /// an error. Counterparts that fail to resolve are dropped from the
    /// result (and counted) rather than failing the whole call; a stale
    /// or deleted counterpart must not break the list.
    ///
    /// # Errors
    ///
    /// Propagates store and directory access failures.
    pub async fn aggregate(&self, current: ChannelId) -> StoreResult<Aggregation> {
        let touching = self.store.fetch_touching(current).await?;
        let leads = rank_conversations(touching, current);

        let mut summaries = Vec::with_capacity(leads.len());
        let mut dropped_counterparts: u64 = 0;

        for lead in leads {
            match self.directory.resolve(lead.counterpart).await? {
                Some(profile) => summaries.push(ConversationSummary::new(
                    profile,
                    LastMessage::of(&lead.last),
                    lead.unread_count,
                )),
                None => {
                    dropped_counterparts = dropped_counterparts.saturating_add(1);
                    tracing::debug!(
                        counterpart = %lead.counterpart,
                        channel = %current,
                        "dropping conversation with unresolvable counterpart"
                    );
                }
            }
        }

        Ok(Aggregation {
            summaries,
            dropped_counterparts,
        })
    }
}
