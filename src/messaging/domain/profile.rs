//! Display identity for a channel.
//!
//! Profiles are owned by the platform's channel collaborator; the messaging
//! core only reads them when resolving counterparts for presentation.

use super::ChannelId;
use serde::{Deserialize, Serialize};

/// Fallback logo shown for channels without an uploaded logo.
pub const DEFAULT_LOGO_URL: &str = "/img/default-channel-logo.png";

/// Presentable identity of a channel.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::{ChannelId, ChannelProfile, DEFAULT_LOGO_URL};
///
/// let profile = ChannelProfile::new(ChannelId::from_bytes([7; 12]), "Ada", "ada");
/// assert_eq!(profile.logo_url(), DEFAULT_LOGO_URL);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelProfile {
    /// The channel identifier.
    id: ChannelId,

    /// Human-readable channel name.
    name: String,

    /// Unique channel handle.
    handle: String,

    /// Logo URL, if the channel has uploaded one.
    logo_url: Option<String>,
}

impl ChannelProfile {
    /// Creates a profile without a logo.
    #[must_use]
    pub fn new(id: ChannelId, name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            handle: handle.into(),
            logo_url: None,
        }
    }

    /// Sets the logo URL.
    #[must_use]
    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    /// Returns the channel identifier.
    #[must_use]
    pub const fn id(&self) -> ChannelId {
        self.id
    }

    /// Returns the channel name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the channel handle.
    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Returns the logo URL, falling back to [`DEFAULT_LOGO_URL`].
    #[must_use]
    pub fn logo_url(&self) -> &str {
        self.logo_url.as_deref().unwrap_or(DEFAULT_LOGO_URL)
    }
}
