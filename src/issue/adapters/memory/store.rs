//! In-memory issue store.

use crate::issue::{
    domain::{IssueFieldSet, IssueId, IssueRecord},
    ports::{IssueStore, IssueStoreError, IssueStoreResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory issue store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueStore {
    records: Arc<RwLock<HashMap<IssueId, IssueRecord>>>,
}

impl InMemoryIssueStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> IssueStoreError {
    IssueStoreError::unavailable(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl IssueStore for InMemoryIssueStore {
    async fn put(&self, record: &IssueRecord) -> IssueStoreResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(record.issue_id().clone(), record.clone());
        Ok(())
    }

    async fn get(&self, issue_id: &IssueId) -> IssueStoreResult<Option<IssueRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(issue_id).cloned())
    }

    async fn scan_all(&self) -> IssueStoreResult<Vec<IssueRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.values().cloned().collect())
    }

    async fn update(
        &self,
        issue_id: &IssueId,
        fields: &IssueFieldSet,
    ) -> IssueStoreResult<IssueRecord> {
        let mut records = self.records.write().map_err(poisoned)?;
        let record = records
            .get_mut(issue_id)
            .ok_or_else(|| IssueStoreError::NotFound(issue_id.clone()))?;
        record.apply(fields);
        Ok(record.clone())
    }
}
