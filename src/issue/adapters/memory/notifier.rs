//! In-memory notifier that records every delivery attempt.

use crate::issue::ports::{EmailMessage, Notifier, NotifierError, NotifierResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Notifier that keeps delivered messages in an outbox.
///
/// A notifier built with [`InMemoryNotifier::failing`] rejects every message
/// while still counting the attempt.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    state: Arc<RwLock<OutboxState>>,
}

#[derive(Debug, Default)]
struct OutboxState {
    delivered: Vec<EmailMessage>,
    attempts: usize,
    failure: Option<String>,
}

impl InMemoryNotifier {
    /// Creates a notifier that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notifier that rejects every message with `reason`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        let state = OutboxState {
            failure: Some(reason.into()),
            ..OutboxState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the messages delivered so far, oldest first.
    #[must_use]
    pub fn delivered(&self) -> Vec<EmailMessage> {
        self.state
            .read()
            .map(|state| state.delivered.clone())
            .unwrap_or_default()
    }

    /// Returns the number of delivery attempts, successful or not.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.state.read().map(|state| state.attempts).unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn send(&self, message: &EmailMessage) -> NotifierResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| NotifierError::transport(std::io::Error::other(err.to_string())))?;
        state.attempts += 1;
        if let Some(reason) = &state.failure {
            return Err(NotifierError::Rejected {
                recipient: message.to.clone(),
                reason: reason.clone(),
            });
        }
        state.delivered.push(message.clone());
        Ok(())
    }
}
