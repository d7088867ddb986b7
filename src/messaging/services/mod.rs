//! Application services for the messaging subsystem.
//!
//! Services orchestrate domain operations across the store and directory
//! ports: the aggregator derives ranked conversation summaries, and the
//! messaging service is the thin operation surface the API layer calls.

mod aggregator;
mod messaging;

pub use aggregator::{Aggregation, ConversationAggregator, ConversationLead, rank_conversations};
pub use messaging::{MessagingService, SendMessageRequest};
