//! Status change requests and the field assignments they commit.

use super::{CommentEntry, IssueRecord, IssueStatus, StatusEntry, record::non_blank};
use chrono::{DateTime, Utc};

/// Author recorded when a status change does not name one.
pub const DEFAULT_UPDATED_BY: &str = "admin";

/// Validated status change submitted by staff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    status: IssueStatus,
    assigned_to: Option<String>,
    comment: Option<String>,
    updated_by: String,
}

impl StatusChange {
    /// Creates a change moving an issue to `status`.
    #[must_use]
    pub fn new(status: IssueStatus) -> Self {
        Self {
            status,
            assigned_to: None,
            comment: None,
            updated_by: DEFAULT_UPDATED_BY.to_owned(),
        }
    }

    /// Assigns the issue. Blank values leave any existing assignment alone.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = non_blank(assignee.into());
        self
    }

    /// Attaches a comment. Blank comments are not recorded.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = non_blank(comment.into());
        self
    }

    /// Names the author. Blank values fall back to [`DEFAULT_UPDATED_BY`].
    #[must_use]
    pub fn with_updated_by(mut self, updated_by: impl Into<String>) -> Self {
        self.updated_by =
            non_blank(updated_by.into()).unwrap_or_else(|| DEFAULT_UPDATED_BY.to_owned());
        self
    }

    /// Returns the target status.
    #[must_use]
    pub const fn status(&self) -> &IssueStatus {
        &self.status
    }

    /// Returns the new assignee, if one was supplied.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the comment, if one was supplied.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns the author.
    #[must_use]
    pub fn updated_by(&self) -> &str {
        &self.updated_by
    }
}

/// Field assignments committed atomically by one status update.
///
/// The status and its history entry are only ever produced together by
/// [`IssueFieldSet::status_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueFieldSet {
    status: IssueStatus,
    status_history: Vec<StatusEntry>,
    comments: Vec<CommentEntry>,
    assigned_to: Option<String>,
}

impl IssueFieldSet {
    /// Merges a status change into the current record state.
    ///
    /// The history always gains one entry, even when the status does not
    /// change value. The comments gain one entry only when the change carries
    /// a comment. Both use the single timestamp `at`.
    #[must_use]
    pub fn status_update(current: &IssueRecord, change: &StatusChange, at: DateTime<Utc>) -> Self {
        let mut status_history = current.status_history().to_vec();
        status_history.push(StatusEntry {
            status: change.status().clone(),
            timestamp: at,
            by: change.updated_by().to_owned(),
        });

        let mut comments = current.comments().to_vec();
        if let Some(text) = change.comment() {
            comments.push(CommentEntry {
                text: text.to_owned(),
                timestamp: at,
                by: change.updated_by().to_owned(),
            });
        }

        Self {
            status: change.status().clone(),
            status_history,
            comments,
            assigned_to: change.assigned_to.clone(),
        }
    }

    /// Returns the new status.
    #[must_use]
    pub const fn status(&self) -> &IssueStatus {
        &self.status
    }

    /// Returns the complete new history.
    #[must_use]
    pub fn status_history(&self) -> &[StatusEntry] {
        &self.status_history
    }

    /// Returns the complete new comment list.
    #[must_use]
    pub fn comments(&self) -> &[CommentEntry] {
        &self.comments
    }

    /// Returns the assignee to set, or `None` to keep the stored one.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }
}
