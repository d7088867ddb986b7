//! Default content policy implementation.
//!
//! Mirrors the platform's message validation rules: non-empty after
//! trimming, at most 1000 characters.

use crate::messaging::ports::policy::{ContentPolicy, ContentPolicyError, PolicyConfig};

/// Default [`ContentPolicy`] backed by [`PolicyConfig`].
///
/// # Examples
///
/// ```
/// use courier::messaging::ports::policy::ContentPolicy;
/// use courier::messaging::validation::DefaultContentPolicy;
///
/// let policy = DefaultContentPolicy::new();
/// assert!(policy.validate("hello").is_ok());
/// assert!(policy.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultContentPolicy {
    config: PolicyConfig,
}

impl DefaultContentPolicy {
    /// Creates a policy with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a policy with a custom configuration.
    #[must_use]
    pub const fn with_config(config: PolicyConfig) -> Self {
        Self { config }
    }
}

impl ContentPolicy for DefaultContentPolicy {
    fn validate(&self, content: &str) -> Result<(), ContentPolicyError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ContentPolicyError::Empty);
        }

        let actual = trimmed.chars().count();
        if actual > self.config.max_content_chars {
            return Err(ContentPolicyError::TooLong {
                actual,
                limit: self.config.max_content_chars,
            });
        }

        Ok(())
    }
}
