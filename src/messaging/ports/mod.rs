//! Port trait definitions for the messaging subsystem.
//!
//! Ports define the abstract interfaces that the domain requires from
//! infrastructure. Adapters implement these ports to connect the domain
//! to databases and to the platform's channel collaborator.

pub mod directory;
pub mod policy;
pub mod store;

pub use directory::ChannelDirectory;
pub use policy::{ContentPolicy, PolicyConfig};
pub use store::{MessageStore, StoreResult};
