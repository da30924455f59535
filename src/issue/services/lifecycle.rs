//! Service layer for issue intake and retrieval.

use super::IssueMailer;
use crate::issue::{
    domain::{IssueDomainError, IssueId, IssuePriority, IssueRecord, IssueReport},
    ports::{IssueStore, IssueStoreError, Notifier},
};
use mockable::Clock;
use std::cmp::Reverse;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for reporting a new issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportIssueRequest {
    issue_type: String,
    description: String,
    location: String,
    priority: Option<String>,
    email: Option<String>,
}

impl ReportIssueRequest {
    /// Creates a request with the required report fields.
    #[must_use]
    pub fn new(
        issue_type: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            issue_type: issue_type.into(),
            description: description.into(),
            location: location.into(),
            priority: None,
            email: None,
        }
    }

    /// Sets the priority in its wire form, for example `HIGH`.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the reporter's contact address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    fn into_report(self) -> Result<IssueReport, IssueDomainError> {
        let priority = match self.priority.as_deref().map(str::trim) {
            None | Some("") => IssuePriority::default(),
            Some(raw) => IssuePriority::try_from(raw)?,
        };
        let report = IssueReport::new(self.issue_type, self.description, self.location)?
            .with_priority(priority);
        Ok(match self.email {
            Some(email) => report.with_email(email),
            None => report,
        })
    }
}

/// Service-level errors for issue operations.
#[derive(Debug, Error)]
pub enum IssueLifecycleError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] IssueDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] IssueStoreError),
}

impl IssueLifecycleError {
    /// Returns whether the error reports a missing issue.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(IssueStoreError::NotFound(_)))
    }
}

/// Result type for issue lifecycle service operations.
pub type IssueLifecycleResult<T> = Result<T, IssueLifecycleError>;

/// Issue lifecycle orchestration service.
///
/// Each call is independent: it reads the clock at most once and performs at
/// most one store read, one store write and two notification attempts.
#[derive(Clone)]
pub struct IssueLifecycleService<S, N, C>
where
    S: IssueStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    pub(super) store: Arc<S>,
    pub(super) mailer: IssueMailer<N>,
    pub(super) clock: Arc<C>,
}

impl<S, N, C> IssueLifecycleService<S, N, C>
where
    S: IssueStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a new issue lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, mailer: IssueMailer<N>, clock: Arc<C>) -> Self {
        Self {
            store,
            mailer,
            clock,
        }
    }

    /// Records a new issue and notifies the reporter and the administrator.
    ///
    /// Nothing is sent when the record cannot be stored. Notification
    /// failures never affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Domain`] when a required field is blank
    /// or the priority is unknown, and [`IssueLifecycleError::Store`] when
    /// the record cannot be stored.
    pub async fn report(&self, request: ReportIssueRequest) -> IssueLifecycleResult<IssueRecord> {
        let report = request.into_report()?;
        let record = IssueRecord::open(report, &*self.clock);
        self.store.put(&record).await?;
        tracing::info!(
            issue_id = %record.issue_id(),
            priority = %record.priority(),
            "issue reported"
        );

        self.mailer.issue_reported(&record).await;
        Ok(record)
    }

    /// Returns every issue, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Store`] when the scan fails.
    pub async fn list(&self) -> IssueLifecycleResult<Vec<IssueRecord>> {
        let mut records = self.store.scan_all().await?;
        records.sort_by_key(|record| Reverse(record.created_at()));
        Ok(records)
    }

    /// Retrieves an issue by identifier.
    ///
    /// Returns `Ok(None)` when no such issue exists.
    ///
    /// # Errors
    ///
    /// Returns [`IssueLifecycleError::Store`] when the lookup fails.
    pub async fn find(&self, issue_id: &IssueId) -> IssueLifecycleResult<Option<IssueRecord>> {
        Ok(self.store.get(issue_id).await?)
    }
}
