//! Unit tests for conversation aggregation.
//!
//! Covers the pure grouping/ranking core and the resolving aggregator
//! service, including the observable drop of unresolvable counterparts.

use std::sync::Arc;

use super::{channel, message_at};
use crate::messaging::{
    adapters::memory::{InMemoryChannelDirectory, InMemoryMessageStore},
    domain::{ChannelProfile, Message},
    ports::store::MessageStore,
    services::{ConversationAggregator, ConversationLead, rank_conversations},
};
use rstest::{fixture, rstest};

// ============================================================================
// rank_conversations: grouping
// ============================================================================

#[test]
fn groups_all_directions_under_one_counterpart() {
    let a = channel(1);
    let b = channel(2);
    let messages = vec![
        message_at(a, b, "first out", false, 10),
        message_at(b, a, "reply", false, 20),
        message_at(a, b, "second out", false, 30),
    ];

    let leads = rank_conversations(messages, a);

    assert_eq!(leads.len(), 1);
    let lead = leads.first().expect("one lead");
    assert_eq!(lead.counterpart(), b);
    assert_eq!(lead.last().content(), "second out");
    // Only the inbound unread reply counts towards a's unread total.
    assert_eq!(lead.unread_count(), 1);
}

#[test]
fn unread_count_excludes_read_and_outbound_messages() {
    let a = channel(1);
    let b = channel(2);
    let messages = vec![
        message_at(b, a, "unread", false, 10),
        message_at(b, a, "already read", true, 20),
        message_at(a, b, "outbound", false, 30),
    ];

    let leads = rank_conversations(messages, a);

    assert_eq!(leads.first().expect("one lead").unread_count(), 1);
}

#[test]
fn ignores_messages_not_touching_current_channel() {
    let messages = vec![message_at(channel(8), channel(9), "elsewhere", false, 10)];

    let leads = rank_conversations(messages, channel(1));

    assert!(leads.is_empty());
}

#[test]
fn empty_history_yields_empty_ranking() {
    assert!(rank_conversations(Vec::new(), channel(1)).is_empty());
}

// ============================================================================
// rank_conversations: ranking
// ============================================================================

#[test]
fn ranks_most_recently_active_first() {
    let a = channel(1);
    let messages = vec![
        message_at(channel(2), a, "older", false, 10),
        message_at(channel(3), a, "newer", false, 20),
    ];

    let leads = rank_conversations(messages, a);

    let counterparts: Vec<_> = leads.iter().map(ConversationLead::counterpart).collect();
    assert_eq!(counterparts, vec![channel(3), channel(2)]);
}

#[test]
fn timestamp_ties_rank_deterministically_by_message_id() {
    let a = channel(1);
    let first = message_at(channel(2), a, "tie one", false, 10);
    let second = message_at(channel(3), a, "tie two", false, 10);

    let run_one = rank_conversations(vec![first.clone(), second.clone()], a);
    let run_two = rank_conversations(vec![second.clone(), first.clone()], a);

    assert_eq!(run_one, run_two);

    let expected_first = if first.id() > second.id() {
        first.counterpart_of(a)
    } else {
        second.counterpart_of(a)
    };
    assert_eq!(run_one.first().map(ConversationLead::counterpart), expected_first);
}

#[test]
fn tie_within_group_selects_larger_message_id_as_last() {
    let a = channel(1);
    let b = channel(2);
    let one = message_at(b, a, "one", false, 10);
    let two = message_at(b, a, "two", false, 10);
    let expected = if one.id() > two.id() {
        one.clone()
    } else {
        two.clone()
    };

    let leads = rank_conversations(vec![one, two], a);

    assert_eq!(leads.first().expect("one lead").last().id(), expected.id());
}

// ============================================================================
// ConversationAggregator
// ============================================================================

#[fixture]
fn store() -> Arc<InMemoryMessageStore> {
    Arc::new(InMemoryMessageStore::new())
}

#[fixture]
fn directory() -> Arc<InMemoryChannelDirectory> {
    let directory = InMemoryChannelDirectory::new();
    directory.register(ChannelProfile::new(channel(1), "Ada", "ada"));
    directory.register(ChannelProfile::new(channel(2), "Brin", "brin"));
    directory.register(ChannelProfile::new(channel(3), "Curie", "curie"));
    Arc::new(directory)
}

async fn seed(store: &InMemoryMessageStore, messages: Vec<Message>) {
    for message in &messages {
        store.append(message).await.expect("seed append");
    }
}

#[rstest]
#[tokio::test]
async fn aggregate_resolves_counterparts_and_ranks(
    store: Arc<InMemoryMessageStore>,
    directory: Arc<InMemoryChannelDirectory>,
) {
    seed(
        &store,
        vec![
            message_at(channel(2), channel(1), "from brin", false, 10),
            message_at(channel(3), channel(1), "from curie", false, 20),
        ],
    )
    .await;

    let aggregator = ConversationAggregator::new(store, directory);
    let aggregation = aggregator.aggregate(channel(1)).await.expect("aggregate");

    let names: Vec<&str> = aggregation
        .summaries()
        .iter()
        .map(|s| s.counterpart().name())
        .collect();
    assert_eq!(names, vec!["Curie", "Brin"]);
    assert_eq!(aggregation.dropped_counterparts(), 0);
}

#[rstest]
#[tokio::test]
async fn aggregate_drops_unresolvable_counterparts_but_counts_them(
    store: Arc<InMemoryMessageStore>,
    directory: Arc<InMemoryChannelDirectory>,
) {
    seed(
        &store,
        vec![
            message_at(channel(2), channel(1), "from brin", false, 10),
            message_at(channel(3), channel(1), "from curie", false, 20),
        ],
    )
    .await;
    directory.remove(channel(3));

    let aggregator = ConversationAggregator::new(store, directory);
    let aggregation = aggregator.aggregate(channel(1)).await.expect("aggregate");

    assert_eq!(aggregation.summaries().len(), 1);
    assert_eq!(
        aggregation
            .summaries()
            .first()
            .expect("one summary")
            .counterpart()
            .name(),
        "Brin"
    );
    assert_eq!(aggregation.dropped_counterparts(), 1);
}

#[rstest]
#[tokio::test]
async fn aggregate_returns_empty_for_channel_without_history(
    store: Arc<InMemoryMessageStore>,
    directory: Arc<InMemoryChannelDirectory>,
) {
    let aggregator = ConversationAggregator::new(store, directory);
    let aggregation = aggregator.aggregate(channel(1)).await.expect("aggregate");

    assert!(aggregation.summaries().is_empty());
    assert_eq!(aggregation.dropped_counterparts(), 0);
}

#[rstest]
#[tokio::test]
async fn aggregate_repeats_identically_on_identical_input(
    store: Arc<InMemoryMessageStore>,
    directory: Arc<InMemoryChannelDirectory>,
) {
    seed(
        &store,
        vec![
            message_at(channel(2), channel(1), "tie a", false, 10),
            message_at(channel(3), channel(1), "tie b", false, 10),
        ],
    )
    .await;

    let aggregator = ConversationAggregator::new(store, directory);
    let first = aggregator.aggregate(channel(1)).await.expect("first");
    let second = aggregator.aggregate(channel(1)).await.expect("second");

    assert_eq!(first, second);
}
