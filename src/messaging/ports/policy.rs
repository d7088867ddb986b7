//! Policy port for message content rules.
//!
//! Content policy is owned by the platform's validation collaborator; the
//! messaging core only needs a yes/no answer before appending. The default
//! implementation lives in [`crate::messaging::validation`].

use thiserror::Error;

/// Port for content policy checks.
///
/// Implementations should be stateless and thread-safe.
pub trait ContentPolicy: Send + Sync {
    /// Validates message text against the content policy.
    ///
    /// # Errors
    ///
    /// Returns [`ContentPolicyError`] describing the first violated rule.
    fn validate(&self, content: &str) -> Result<(), ContentPolicyError>;
}

/// Configuration for content policy rules.
///
/// # Examples
///
/// ```
/// use courier::messaging::ports::policy::PolicyConfig;
///
/// let config = PolicyConfig::default();
/// assert_eq!(config.max_content_chars, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Maximum message length in characters, measured after trimming.
    pub max_content_chars: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_content_chars: 1000,
        }
    }
}

/// Errors that can occur during content policy validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContentPolicyError {
    /// The content is empty after trimming.
    #[error("message content cannot be empty")]
    Empty,

    /// The content exceeds the configured length limit.
    #[error("message content is {actual} characters, exceeds limit of {limit}")]
    TooLong {
        /// The actual character count.
        actual: usize,
        /// The configured maximum.
        limit: usize,
    },
}
