//! Store port for issue persistence, lookup and partial update.

use crate::issue::domain::{IssueFieldSet, IssueId, IssueRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue store operations.
pub type IssueStoreResult<T> = Result<T, IssueStoreError>;

/// Issue persistence contract.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Inserts a record, overwriting any record with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::Unavailable`] on backend failure.
    async fn put(&self, record: &IssueRecord) -> IssueStoreResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn get(&self, issue_id: &IssueId) -> IssueStoreResult<Option<IssueRecord>>;

    /// Returns every stored record.
    ///
    /// Implementations backed by paged storage must follow every page before
    /// returning.
    async fn scan_all(&self) -> IssueStoreResult<Vec<IssueRecord>>;

    /// Applies a field set to an existing record as one write and returns the
    /// record as stored afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`IssueStoreError::NotFound`] when the record does not exist;
    /// implementations must never insert in that case.
    async fn update(
        &self,
        issue_id: &IssueId,
        fields: &IssueFieldSet,
    ) -> IssueStoreResult<IssueRecord>;
}

/// Errors returned by issue store implementations.
#[derive(Debug, Clone, Error)]
pub enum IssueStoreError {
    /// The record was not found.
    #[error("issue not found: {0}")]
    NotFound(IssueId),

    /// The backend failed or could not be reached.
    #[error("issue store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl IssueStoreError {
    /// Wraps a backend error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
