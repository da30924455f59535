//! Issue record aggregate and its audit trail entries.

use super::{IssueDomainError, IssueFieldSet, IssueId, IssuePriority, IssueStatus, timestamp};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Author recorded on the history entry written at report time.
pub const CREATED_BY: &str = "system";

/// One status transition in an issue's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    /// Status the issue moved to.
    pub status: IssueStatus,
    /// When the transition was recorded.
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Who recorded the transition.
    pub by: String,
}

/// One staff comment attached during a status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentEntry {
    /// Comment body.
    pub text: String,
    /// When the comment was recorded.
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Who wrote the comment.
    pub by: String,
}

/// Validated report submitted by a member of the campus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReport {
    issue_type: String,
    description: String,
    location: String,
    priority: IssuePriority,
    email: Option<String>,
}

impl IssueReport {
    /// Creates a report from its required fields.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::MissingField`] naming the first field that
    /// is blank.
    pub fn new(
        issue_type: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, IssueDomainError> {
        Ok(Self {
            issue_type: required("issueType", issue_type.into())?,
            description: required("description", description.into())?,
            location: required("location", location.into())?,
            priority: IssuePriority::default(),
            email: None,
        })
    }

    /// Sets the triage priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: IssuePriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the reporter's contact address. Blank addresses are ignored.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    /// Returns the issue category.
    #[must_use]
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> IssuePriority {
        self.priority
    }

    /// Returns the reporter's address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Issue record aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    issue_id: IssueId,
    issue_type: String,
    description: String,
    location: String,
    priority: IssuePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    status: IssueStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assigned_to: Option<String>,
    #[serde(with = "timestamp")]
    created_at: DateTime<Utc>,
    status_history: Vec<StatusEntry>,
    comments: Vec<CommentEntry>,
}

/// Parameter object for reconstructing a persisted issue record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedIssueData {
    /// Persisted identifier.
    pub issue_id: IssueId,
    /// Persisted category.
    pub issue_type: String,
    /// Persisted description.
    pub description: String,
    /// Persisted location.
    pub location: String,
    /// Persisted priority.
    pub priority: IssuePriority,
    /// Persisted reporter address, if any.
    pub email: Option<String>,
    /// Persisted current status.
    pub status: IssueStatus,
    /// Persisted assignee, if any.
    pub assigned_to: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted status history, oldest first.
    pub status_history: Vec<StatusEntry>,
    /// Persisted comments, oldest first.
    pub comments: Vec<CommentEntry>,
}

impl IssueRecord {
    /// Opens a new issue from a report.
    ///
    /// The record receives a fresh identifier, the `OPEN` status and a single
    /// history entry attributed to [`CREATED_BY`], all stamped with one clock
    /// reading.
    #[must_use]
    pub fn open(report: IssueReport, clock: &impl Clock) -> Self {
        let now = timestamp::capture(clock);
        let IssueReport {
            issue_type,
            description,
            location,
            priority,
            email,
        } = report;

        Self {
            issue_id: IssueId::generate(),
            issue_type,
            description,
            location,
            priority,
            email,
            status: IssueStatus::open(),
            assigned_to: None,
            created_at: now,
            status_history: vec![StatusEntry {
                status: IssueStatus::open(),
                timestamp: now,
                by: CREATED_BY.to_owned(),
            }],
            comments: Vec::new(),
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedIssueData) -> Self {
        Self {
            issue_id: data.issue_id,
            issue_type: data.issue_type,
            description: data.description,
            location: data.location,
            priority: data.priority,
            email: data.email,
            status: data.status,
            assigned_to: data.assigned_to,
            created_at: data.created_at,
            status_history: data.status_history,
            comments: data.comments,
        }
    }

    /// Applies the assignments of a status update in place.
    ///
    /// An absent assignee in the field set leaves the current one untouched.
    pub fn apply(&mut self, fields: &IssueFieldSet) {
        self.status = fields.status().clone();
        self.status_history = fields.status_history().to_vec();
        self.comments = fields.comments().to_vec();
        if let Some(assignee) = fields.assigned_to() {
            self.assigned_to = Some(assignee.to_owned());
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn issue_id(&self) -> &IssueId {
        &self.issue_id
    }

    /// Returns the category.
    #[must_use]
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> IssuePriority {
        self.priority
    }

    /// Returns the reporter's address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> &IssueStatus {
        &self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the status history, oldest first.
    #[must_use]
    pub fn status_history(&self) -> &[StatusEntry] {
        &self.status_history
    }

    /// Returns the comments, oldest first.
    #[must_use]
    pub fn comments(&self) -> &[CommentEntry] {
        &self.comments
    }
}

fn required(field: &'static str, value: String) -> Result<String, IssueDomainError> {
    non_blank(value).ok_or(IssueDomainError::MissingField(field))
}

/// Keeps `value` exactly as supplied unless it is empty or whitespace.
pub(super) fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
