//! Direct-messaging subsystem: store contract, aggregation, and services.
//!
//! This module implements the conversation aggregation engine and the thin
//! orchestration surface around it. Given an authenticated channel identity
//! and an unbounded message history, it answers three derived queries:
//!
//! 1. the full conversation between two channels,
//! 2. the list of all conversations for a channel, ranked by recency and
//!    annotated with unread counts,
//! 3. the total unread count for a channel.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`],
//!   [`domain::ConversationSummary`], [`domain::ChannelId`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::store::MessageStore`],
//!   [`ports::directory::ChannelDirectory`], [`ports::policy::ContentPolicy`])
//! - **Adapters**: Concrete implementations
//!   ([`adapters::memory::InMemoryMessageStore`],
//!   [`adapters::postgres::PostgresMessageStore`])
//! - **Services**: Orchestration ([`services::ConversationAggregator`],
//!   [`services::MessagingService`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use courier::messaging::adapters::memory::{
//!     InMemoryChannelDirectory, InMemoryMessageStore,
//! };
//! use courier::messaging::domain::{ChannelId, ChannelProfile};
//! use courier::messaging::services::{MessagingService, SendMessageRequest};
//! use courier::messaging::validation::DefaultContentPolicy;
//! use mockable::DefaultClock;
//!
//! # async fn demo() -> Result<(), courier::messaging::error::MessagingError> {
//! let store = Arc::new(InMemoryMessageStore::new());
//! let directory = Arc::new(InMemoryChannelDirectory::new());
//! let sender = ChannelId::from_bytes([1; 12]);
//! let recipient = ChannelId::from_bytes([2; 12]);
//! directory.register(ChannelProfile::new(sender, "Ada", "ada"));
//! directory.register(ChannelProfile::new(recipient, "Brin", "brin"));
//!
//! let service = MessagingService::new(
//!     store,
//!     directory,
//!     Arc::new(DefaultContentPolicy::new()),
//!     Arc::new(DefaultClock),
//! );
//! let request = SendMessageRequest::new(sender, recipient.to_string(), "hello");
//! let message = service.send(request).await?;
//! assert!(!message.read());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
