//! Email fan-out for issue lifecycle events.
//!
//! Each event notifies the reporter (when the record carries an address) and
//! the administrator. Delivery is best effort: failures are logged and never
//! reach the caller.

use crate::issue::{
    domain::{IssueId, IssueRecord, StatusChange, humanize, timestamp},
    ports::{EmailMessage, Notifier},
};
use std::fmt;
use std::sync::Arc;

/// Party a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// The person who reported the issue.
    Reporter,
    /// The configured facilities administrator.
    Administrator,
}

impl Recipient {
    /// Returns the label used in log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reporter => "reporter",
            Self::Administrator => "administrator",
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sends one message, logging a failure instead of returning it.
pub async fn deliver_best_effort<N>(
    notifier: &N,
    issue_id: &IssueId,
    recipient: Recipient,
    message: EmailMessage,
) where
    N: Notifier + ?Sized,
{
    match notifier.send(&message).await {
        Ok(()) => tracing::debug!(%issue_id, %recipient, "notification sent"),
        Err(error) => tracing::warn!(
            %issue_id,
            %recipient,
            %error,
            "notification failed; continuing without it"
        ),
    }
}

/// Composes and sends issue lifecycle notifications.
#[derive(Debug)]
pub struct IssueMailer<N>
where
    N: Notifier,
{
    notifier: Arc<N>,
    admin_email: String,
}

impl<N> Clone for IssueMailer<N>
where
    N: Notifier,
{
    fn clone(&self) -> Self {
        Self {
            notifier: Arc::clone(&self.notifier),
            admin_email: self.admin_email.clone(),
        }
    }
}

impl<N> IssueMailer<N>
where
    N: Notifier,
{
    /// Creates a mailer notifying `admin_email` alongside reporters.
    #[must_use]
    pub fn new(notifier: Arc<N>, admin_email: impl Into<String>) -> Self {
        Self {
            notifier,
            admin_email: admin_email.into(),
        }
    }

    /// Announces a newly reported issue.
    pub async fn issue_reported(&self, record: &IssueRecord) {
        if let Some(reporter) = record.email() {
            deliver_best_effort(
                &*self.notifier,
                record.issue_id(),
                Recipient::Reporter,
                reported_to_reporter(record, reporter),
            )
            .await;
        }
        deliver_best_effort(
            &*self.notifier,
            record.issue_id(),
            Recipient::Administrator,
            reported_to_admin(record, &self.admin_email),
        )
        .await;
    }

    /// Announces a status update already committed to `record`.
    pub async fn issue_updated(&self, record: &IssueRecord, change: &StatusChange) {
        if let Some(reporter) = record.email() {
            deliver_best_effort(
                &*self.notifier,
                record.issue_id(),
                Recipient::Reporter,
                updated_to_reporter(record, change, reporter),
            )
            .await;
        }
        deliver_best_effort(
            &*self.notifier,
            record.issue_id(),
            Recipient::Administrator,
            updated_to_admin(record, change, &self.admin_email),
        )
        .await;
    }
}

fn report_facts(record: &IssueRecord) -> Vec<String> {
    vec![
        format!("Issue ID: {}", record.issue_id()),
        format!("Type: {}", record.issue_type()),
        format!("Location: {}", record.location()),
        format!("Priority: {}", record.priority()),
        format!("Status: {}", record.status()),
        format!("Description: {}", record.description()),
        format!("Created At: {}", timestamp::format(&record.created_at())),
    ]
}

fn reported_to_reporter(record: &IssueRecord, reporter: &str) -> EmailMessage {
    let mut lines = vec![
        "Thank you for reporting a campus issue. We will keep you posted.".to_owned(),
        String::new(),
    ];
    lines.extend(report_facts(record));
    EmailMessage::new(
        reporter,
        format!(
            "Issue Reported: {} [{}]",
            record.issue_type(),
            record.priority()
        ),
        lines.join("\n"),
    )
}

fn reported_to_admin(record: &IssueRecord, admin: &str) -> EmailMessage {
    let mut lines = report_facts(record);
    lines.push(format!(
        "Reported By: {}",
        record.email().unwrap_or("Anonymous")
    ));
    EmailMessage::new(
        admin,
        format!(
            "New Campus Issue [{}]: {} ({})",
            record.priority(),
            record.issue_type(),
            record.issue_id()
        ),
        lines.join("\n"),
    )
}

fn update_facts(record: &IssueRecord, change: &StatusChange) -> Vec<String> {
    let mut lines = vec![
        format!("Issue ID: {}", record.issue_id()),
        format!("New Status: {}", humanize(record.status().as_str())),
    ];
    if let Some(assignee) = record.assigned_to() {
        lines.push(format!("Assigned To: {}", humanize(assignee)));
    }
    if let Some(comment) = change.comment() {
        lines.push(format!("Comment: {comment}"));
    }
    lines.push(format!("Type: {}", record.issue_type()));
    lines.push(format!("Location: {}", record.location()));
    lines.push(format!("Priority: {}", record.priority()));
    lines
}

fn updated_to_reporter(record: &IssueRecord, change: &StatusChange, reporter: &str) -> EmailMessage {
    let mut lines = vec![
        "Your campus issue has been updated.".to_owned(),
        String::new(),
    ];
    lines.extend(update_facts(record, change));
    EmailMessage::new(
        reporter,
        format!(
            "Issue Update: {} is now {}",
            record.issue_type(),
            humanize(record.status().as_str())
        ),
        lines.join("\n"),
    )
}

fn updated_to_admin(record: &IssueRecord, change: &StatusChange, admin: &str) -> EmailMessage {
    let mut lines = update_facts(record, change);
    lines.push(format!("Updated By: {}", change.updated_by()));
    lines.push(format!("Description: {}", record.description()));
    EmailMessage::new(
        admin,
        format!(
            "Issue Status Updated ({}): {}",
            record.issue_id(),
            record.status()
        ),
        lines.join("\n"),
    )
}
