//! Outbound email port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notifier operations.
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Plain-text email addressed to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl EmailMessage {
    /// Creates a message.
    #[must_use]
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Email delivery contract.
///
/// One call is one delivery attempt. Implementations do not queue or retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a message.
    ///
    /// # Errors
    ///
    /// Returns [`NotifierError`] when the provider rejects the message or
    /// cannot be reached.
    async fn send(&self, message: &EmailMessage) -> NotifierResult<()>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    /// The provider refused the message.
    #[error("message to {recipient} rejected: {reason}")]
    Rejected {
        /// Recipient address.
        recipient: String,
        /// Provider-supplied reason.
        reason: String,
    },

    /// The provider could not be reached.
    #[error("email transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotifierError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
