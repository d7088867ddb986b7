//! The messaging operation surface: send, fetch, list, and count.
//!
//! Thin orchestration over the store, directory, and policy ports. The
//! router/API collaborator hands this service a resolved current-channel
//! identity plus raw identifiers from the request, and receives structured
//! results or a [`MessagingError`].

use std::sync::Arc;

use mockable::Clock;

use super::aggregator::ConversationAggregator;
use crate::messaging::{
    domain::{ChannelId, ChannelProfile, ConversationSummary, Message, MessageId, ResolvedMessage},
    error::{MessagingError, StoreError},
    ports::directory::ChannelDirectory,
    ports::policy::ContentPolicy,
    ports::store::MessageStore,
};

/// Result type for messaging service operations.
type ServiceResult<T> = Result<T, MessagingError>;

/// Request payload for sending a message.
///
/// The recipient arrives as raw text from the request path and is parsed
/// inside [`MessagingService::send`], so malformed identifiers are
/// rejected before reaching the store.
///
/// # Examples
///
/// ```
/// use courier::messaging::domain::{ChannelId, MessageId};
/// use courier::messaging::services::SendMessageRequest;
///
/// let sender = ChannelId::from_bytes([1; 12]);
/// let request = SendMessageRequest::new(sender, "5f1e7c9a0b3d4e5f6a7b8c9d", "hello")
///     .with_message_id(MessageId::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageRequest {
    sender: ChannelId,
    recipient: String,
    content: String,
    message_id: Option<MessageId>,
}

impl SendMessageRequest {
    /// Creates a request from the resolved sender and raw request fields.
    #[must_use]
    pub fn new(
        sender: ChannelId,
        recipient: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
            content: content.into(),
            message_id: None,
        }
    }

    /// Attaches a client-generated message identifier.
    ///
    /// Acts as an idempotency token: re-sending with the same identifier
    /// after an ambiguous failure cannot create a duplicate message,
    /// because the store rejects the second append.
    #[must_use]
    pub const fn with_message_id(mut self, message_id: MessageId) -> Self {
        self.message_id = Some(message_id);
        self
    }
}

/// Messaging operations exposed to the API layer.
///
/// Each operation checks store readiness at the boundary, then delegates
/// to the ports. The service holds no mutable state of its own; all
/// shared state lives behind the store.
#[derive(Clone)]
pub struct MessagingService<S, D, P, C>
where
    S: MessageStore,
    D: ChannelDirectory,
    P: ContentPolicy,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    directory: Arc<D>,
    policy: Arc<P>,
    clock: Arc<C>,
    aggregator: ConversationAggregator<S, D>,
}

impl<S, D, P, C> MessagingService<S, D, P, C>
where
    S: MessageStore,
    D: ChannelDirectory,
    P: ContentPolicy,
    C: Clock + Send + Sync,
{
    /// Creates a new messaging service over the given ports.
    #[must_use]
    pub fn new(store: Arc<S>, directory: Arc<D>, policy: Arc<P>, clock: Arc<C>) -> Self {
        let aggregator = ConversationAggregator::new(Arc::clone(&store), Arc::clone(&directory));
        Self {
            store,
            directory,
            policy,
            clock,
            aggregator,
        }
    }

    /// Sends a message from the current channel to a recipient.
    ///
    /// Validates content policy, recipient identifier shape, existence of
    /// both channels, and the no-self-send rule, then appends exactly one
    /// message with `read = false`.
    ///
    /// # Errors
    ///
    /// - [`MessagingError::ValidationFailed`] if the content violates policy
    /// - [`MessagingError::InvalidArgument`] for a malformed recipient
    ///   identifier, a self-addressed message, or a reused idempotency token
    /// - [`MessagingError::NotFound`] if either channel does not exist
    /// - [`MessagingError::Unavailable`] if the store cannot be reached
    pub async fn send(&self, request: SendMessageRequest) -> ServiceResult<Message> {
        self.ensure_ready().await?;
        self.policy.validate(&request.content)?;

        let recipient: ChannelId = request.recipient.parse()?;
        self.ensure_exists(request.sender).await?;
        self.ensure_exists(recipient).await?;

        let message = match request.message_id {
            Some(id) => {
                Message::new_with_id(id, request.sender, recipient, request.content, &*self.clock)
            }
            None => Message::new(request.sender, recipient, request.content, &*self.clock),
        }?;

        self.store.append(&message).await?;
        tracing::debug!(
            message = %message.id(),
            sender = %message.sender(),
            recipient = %message.recipient(),
            "message appended"
        );

        Ok(message)
    }

    /// Returns the full conversation between the current channel and a
    /// counterpart, oldest first, with both ends resolved to profiles.
    ///
    /// Unread messages from the counterpart are marked read before the
    /// history is fetched, so the caller always observes the post-flip
    /// read flags in the returned messages. The flip is idempotent; a
    /// message sent concurrently may land as read or unread, which is an
    /// accepted race.
    ///
    /// # Errors
    ///
    /// - [`MessagingError::InvalidArgument`] if `counterpart` is not a
    ///   well-formed identifier
    /// - [`MessagingError::NotFound`] if either channel does not resolve
    /// - [`MessagingError::Unavailable`] if the store cannot be reached
    pub async fn get_conversation(
        &self,
        current: ChannelId,
        counterpart: &str,
    ) -> ServiceResult<Vec<ResolvedMessage>> {
        self.ensure_ready().await?;
        let counterpart_id: ChannelId = counterpart.parse()?;

        let current_profile = self.resolve_profile(current).await?;
        let counterpart_profile = self.resolve_profile(counterpart_id).await?;

        // mark_read must be observed before the fetch within this call.
        let flipped = self.store.mark_read(counterpart_id, current).await?;
        if flipped > 0 {
            tracing::debug!(
                channel = %current,
                counterpart = %counterpart_id,
                flipped,
                "marked messages read"
            );
        }

        let history = self.store.fetch_conversation(current, counterpart_id).await?;

        Ok(history
            .iter()
            .map(|message| {
                if message.sender() == current {
                    ResolvedMessage::resolve(
                        message,
                        current_profile.clone(),
                        counterpart_profile.clone(),
                    )
                } else {
                    ResolvedMessage::resolve(
                        message,
                        counterpart_profile.clone(),
                        current_profile.clone(),
                    )
                }
            })
            .collect())
    }

    /// Returns the ranked conversation list for the current channel.
    ///
    /// A channel with no history yields an empty list. Conversations whose
    /// counterpart no longer resolves are dropped from the result; the
    /// drop count is logged so the filtering stays observable.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError::Unavailable`] if the store cannot be
    /// reached.
    pub async fn list_conversations(
        &self,
        current: ChannelId,
    ) -> ServiceResult<Vec<ConversationSummary>> {
        self.ensure_ready().await?;

        let aggregation = self.aggregator.aggregate(current).await?;
        if aggregation.dropped_counterparts() > 0 {
            tracing::warn!(
                channel = %current,
                dropped = aggregation.dropped_counterparts(),
                "dropped conversations with unresolvable counterparts"
            );
        }

        Ok(aggregation.into_summaries())
    }

    /// Returns the total unread count for the current channel.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError::Unavailable`] if the store cannot be
    /// reached.
    pub async fn unread_count(&self, current: ChannelId) -> ServiceResult<u64> {
        self.ensure_ready().await?;
        Ok(self.store.count_unread(current).await?)
    }

    /// Rejects the request early when the store reports itself unready.
    async fn ensure_ready(&self) -> ServiceResult<()> {
        if self.store.healthy().await {
            Ok(())
        } else {
            Err(MessagingError::Unavailable(StoreError::connection(
                "message store is not ready",
            )))
        }
    }

    /// Checks that a channel exists, without fetching its profile.
    async fn ensure_exists(&self, id: ChannelId) -> ServiceResult<()> {
        if self.directory.exists(id).await? {
            Ok(())
        } else {
            Err(MessagingError::NotFound(id))
        }
    }

    /// Resolves a channel's profile or fails with `NotFound`.
    async fn resolve_profile(&self, id: ChannelId) -> ServiceResult<ChannelProfile> {
        self.directory
            .resolve(id)
            .await?
            .ok_or(MessagingError::NotFound(id))
    }
}
