//! Notifier that delivers email to the structured log.
//!
//! Used when no email provider is wired into the deployment.

use crate::issue::ports::{EmailMessage, Notifier, NotifierResult};
use async_trait::async_trait;

/// Notifier that emits each message as a `tracing` event.
#[derive(Debug, Clone)]
pub struct TracingNotifier {
    sender: String,
    region: String,
}

impl TracingNotifier {
    /// Creates a notifier sending from `sender` through `region`.
    #[must_use]
    pub fn new(sender: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            region: region.into(),
        }
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn send(&self, message: &EmailMessage) -> NotifierResult<()> {
        tracing::info!(
            target: "campus_issues::email",
            from = %self.sender,
            to = %message.to,
            region = %self.region,
            subject = %message.subject,
            body = %message.body,
            "email delivered to log"
        );
        Ok(())
    }
}
