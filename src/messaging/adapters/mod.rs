//! Persistence adapters for the messaging subsystem.
//!
//! This module provides concrete implementations of the [`MessageStore`]
//! and [`ChannelDirectory`] ports, following hexagonal architecture
//! principles. Adapters handle all infrastructure concerns while the
//! domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryMessageStore`] / [`memory::InMemoryChannelDirectory`]:
//!   Thread-safe in-memory storage for unit testing
//! - [`postgres::PostgresMessageStore`] /
//!   [`postgres::PostgresChannelDirectory`]: Production-grade `PostgreSQL`
//!   persistence using Diesel ORM
//!
//! [`MessageStore`]: crate::messaging::ports::store::MessageStore
//! [`ChannelDirectory`]: crate::messaging::ports::directory::ChannelDirectory

pub mod memory;
pub mod models;
pub mod postgres;
pub mod schema;
