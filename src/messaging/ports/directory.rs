//! Directory port for channel identity lookups.
//!
//! Channel profiles are owned by an external collaborator; this port is the
//! seam through which the messaging core checks existence and resolves
//! display identities.

use crate::messaging::{
    domain::{ChannelId, ChannelProfile},
    ports::store::StoreResult,
};
use async_trait::async_trait;

/// Port for channel existence checks and profile resolution.
///
/// Resolution failures are ordinary `Ok(None)` results, not errors: a
/// counterpart that has since been deleted must not break aggregation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    /// Returns whether a channel with this identifier exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the lookup fails.
    async fn exists(&self, id: ChannelId) -> StoreResult<bool>;

    /// Resolves a channel to its display identity.
    ///
    /// Returns `None` if the channel does not (or no longer) exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the lookup fails.
    async fn resolve(&self, id: ChannelId) -> StoreResult<Option<ChannelProfile>>;
}
