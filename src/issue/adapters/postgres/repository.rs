//! `PostgreSQL` store implementation for issue records.

use super::{
    models::{IssueRow, NewIssueRow, StatusUpdateChangeset},
    schema::issues,
};
use crate::issue::{
    domain::{IssueFieldSet, IssueId, IssuePriority, IssueRecord, IssueStatus, PersistedIssueData},
    ports::{IssueStore, IssueStoreError, IssueStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the issue store.
pub type IssuePgPool = Pool<ConnectionManager<PgConnection>>;

/// Rows fetched per round trip while scanning.
const SCAN_PAGE_SIZE: i64 = 100;

/// `PostgreSQL`-backed issue store.
#[derive(Debug, Clone)]
pub struct PostgresIssueStore {
    pool: IssuePgPool,
}

impl PostgresIssueStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: IssuePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> IssueStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> IssueStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(IssueStoreError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(IssueStoreError::unavailable)?
    }
}

#[async_trait]
impl IssueStore for PostgresIssueStore {
    async fn put(&self, record: &IssueRecord) -> IssueStoreResult<()> {
        let new_row = to_new_row(record)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(issues::table)
                .values(&new_row)
                .on_conflict(issues::issue_id)
                .do_update()
                .set(&new_row)
                .execute(connection)
                .map_err(IssueStoreError::unavailable)?;
            Ok(())
        })
        .await
    }

    async fn get(&self, issue_id: &IssueId) -> IssueStoreResult<Option<IssueRecord>> {
        let key = issue_id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = issues::table
                .filter(issues::issue_id.eq(key))
                .select(IssueRow::as_select())
                .first::<IssueRow>(connection)
                .optional()
                .map_err(IssueStoreError::unavailable)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn scan_all(&self) -> IssueStoreResult<Vec<IssueRecord>> {
        self.run_blocking(|connection| {
            let mut records = Vec::new();
            let mut cursor: Option<String> = None;
            loop {
                let mut query = issues::table
                    .select(IssueRow::as_select())
                    .order(issues::issue_id.asc())
                    .limit(SCAN_PAGE_SIZE)
                    .into_boxed();
                if let Some(last_key) = cursor.take() {
                    query = query.filter(issues::issue_id.gt(last_key));
                }
                let page = query
                    .load::<IssueRow>(connection)
                    .map_err(IssueStoreError::unavailable)?;

                let full_page = i64::try_from(page.len()).is_ok_and(|len| len == SCAN_PAGE_SIZE);
                cursor = page.last().map(|row| row.issue_id.clone());
                for row in page {
                    records.push(row_to_record(row)?);
                }
                if !full_page {
                    return Ok(records);
                }
            }
        })
        .await
    }

    async fn update(
        &self,
        issue_id: &IssueId,
        fields: &IssueFieldSet,
    ) -> IssueStoreResult<IssueRecord> {
        let changeset = to_changeset(fields)?;
        let target = issue_id.clone();
        self.run_blocking(move |connection| {
            let row = diesel::update(issues::table.filter(issues::issue_id.eq(target.as_str())))
                .set(&changeset)
                .returning(IssueRow::as_returning())
                .get_result::<IssueRow>(connection)
                .optional()
                .map_err(IssueStoreError::unavailable)?;
            row.map(row_to_record)
                .transpose()?
                .ok_or(IssueStoreError::NotFound(target))
        })
        .await
    }
}

fn to_new_row(record: &IssueRecord) -> IssueStoreResult<NewIssueRow> {
    Ok(NewIssueRow {
        issue_id: record.issue_id().as_str().to_owned(),
        issue_type: record.issue_type().to_owned(),
        description: record.description().to_owned(),
        location: record.location().to_owned(),
        priority: record.priority().as_str().to_owned(),
        email: record.email().map(str::to_owned),
        status: record.status().as_str().to_owned(),
        assigned_to: record.assigned_to().map(str::to_owned),
        created_at: record.created_at(),
        status_history: serde_json::to_value(record.status_history())
            .map_err(IssueStoreError::unavailable)?,
        comments: serde_json::to_value(record.comments()).map_err(IssueStoreError::unavailable)?,
    })
}

fn to_changeset(fields: &IssueFieldSet) -> IssueStoreResult<StatusUpdateChangeset> {
    Ok(StatusUpdateChangeset {
        status: fields.status().as_str().to_owned(),
        status_history: serde_json::to_value(fields.status_history())
            .map_err(IssueStoreError::unavailable)?,
        comments: serde_json::to_value(fields.comments()).map_err(IssueStoreError::unavailable)?,
        assigned_to: fields.assigned_to().map(str::to_owned),
    })
}

fn row_to_record(row: IssueRow) -> IssueStoreResult<IssueRecord> {
    let IssueRow {
        issue_id,
        issue_type,
        description,
        location,
        priority: persisted_priority,
        email,
        status: persisted_status,
        assigned_to,
        created_at,
        status_history: persisted_history,
        comments: persisted_comments,
    } = row;

    let priority = IssuePriority::try_from(persisted_priority.as_str())
        .map_err(IssueStoreError::unavailable)?;
    let status = IssueStatus::new(persisted_status).map_err(IssueStoreError::unavailable)?;
    let status_history =
        serde_json::from_value(persisted_history).map_err(IssueStoreError::unavailable)?;
    let comments =
        serde_json::from_value(persisted_comments).map_err(IssueStoreError::unavailable)?;

    Ok(IssueRecord::from_persisted(PersistedIssueData {
        issue_id: IssueId::from_raw(issue_id),
        issue_type,
        description,
        location,
        priority,
        email,
        status,
        assigned_to,
        created_at,
        status_history,
        comments,
    }))
}
