//! Courier: direct-messaging core for a channel-based platform.
//!
//! This crate implements the engine behind a channel-to-channel messaging
//! feature: appending messages, flipping read state, reconstructing
//! two-party conversation histories, and deriving a ranked list of
//! conversation summaries with unread counts.
//!
//! # Architecture
//!
//! Courier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`messaging`]: Message store contract, conversation aggregation, and
//!   the messaging service surface

pub mod messaging;
