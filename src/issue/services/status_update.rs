//! Status update pipeline.

use super::{IssueLifecycleResult, IssueLifecycleService};
use crate::issue::{
    domain::{
        IssueDomainError, IssueFieldSet, IssueId, IssueRecord, IssueStatus, StatusChange,
        timestamp,
    },
    ports::{IssueStore, IssueStoreError, Notifier},
};
use mockable::Clock;

/// Request payload for changing an issue's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatusRequest {
    issue_id: String,
    status: String,
    assigned_to: Option<String>,
    comment: Option<String>,
    updated_by: Option<String>,
}

impl UpdateStatusRequest {
    /// Creates a request moving `issue_id` to `status`.
    #[must_use]
    pub fn new(issue_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            issue_id: issue_id.into(),
            status: status.into(),
            assigned_to: None,
            comment: None,
            updated_by: None,
        }
    }

    /// Assigns the issue.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Attaches a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Names the staff member making the change.
    #[must_use]
    pub fn with_updated_by(mut self, updated_by: impl Into<String>) -> Self {
        self.updated_by = Some(updated_by.into());
        self
    }

    fn into_parts(self) -> Result<(IssueId, StatusChange), IssueDomainError> {
        if self.issue_id.trim().is_empty() {
            return Err(IssueDomainError::MissingField("issueId"));
        }
        let mut change = StatusChange::new(IssueStatus::new(self.status)?);
        if let Some(assignee) = self.assigned_to {
            change = change.with_assignee(assignee);
        }
        if let Some(comment) = self.comment {
            change = change.with_comment(comment);
        }
        if let Some(updated_by) = self.updated_by {
            change = change.with_updated_by(updated_by);
        }
        Ok((IssueId::from_raw(self.issue_id), change))
    }
}

/// Result of a committed status update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdateOutcome {
    /// The record as stored after the update.
    pub record: IssueRecord,
    /// Whether the update recorded a comment.
    pub comment_added: bool,
}

impl<S, N, C> IssueLifecycleService<S, N, C>
where
    S: IssueStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Moves an issue to a new status.
    ///
    /// Appends one history entry, appends a comment when one is supplied,
    /// and sets the assignee when one is supplied, all in a single store
    /// write stamped with one clock reading. Both parties are then notified
    /// on a best-effort basis.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Store`] wrapping
    /// [`IssueStoreError::NotFound`] when the issue does not exist (checked
    /// before and during the write), [`IssueLifecycleError::Domain`] when a
    /// required field is blank, and [`IssueLifecycleError::Store`] on other
    /// store failures.
    ///
    /// [`IssueLifecycleError::Store`]: super::IssueLifecycleError::Store
    /// [`IssueLifecycleError::Domain`]: super::IssueLifecycleError::Domain
    pub async fn update_status(
        &self,
        request: UpdateStatusRequest,
    ) -> IssueLifecycleResult<StatusUpdateOutcome> {
        let (issue_id, change) = request.into_parts()?;
        let current = self
            .store
            .get(&issue_id)
            .await?
            .ok_or_else(|| IssueStoreError::NotFound(issue_id.clone()))?;

        let now = timestamp::capture(&*self.clock);
        let fields = IssueFieldSet::status_update(&current, &change, now);
        let record = self.store.update(&issue_id, &fields).await?;
        let comment_added = change.comment().is_some();
        tracing::info!(
            %issue_id,
            status = %record.status(),
            updated_by = change.updated_by(),
            comment_added,
            "issue status updated"
        );

        self.mailer.issue_updated(&record, &change).await;
        Ok(StatusUpdateOutcome {
            record,
            comment_added,
        })
    }
}
