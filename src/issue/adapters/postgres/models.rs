//! Diesel row models for issue persistence.

use super::schema::issues;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for issue records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = issues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IssueRow {
    /// Issue identifier.
    pub issue_id: String,
    /// Issue category.
    pub issue_type: String,
    /// Description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Priority in storage format.
    pub priority: String,
    /// Reporter address.
    pub email: Option<String>,
    /// Current status.
    pub status: String,
    /// Current assignee.
    pub assigned_to: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// History JSON array.
    pub status_history: Value,
    /// Comments JSON array.
    pub comments: Value,
}

/// Insert model for issue records.
///
/// Also used as the overwrite changeset on key conflict, where absent
/// optional fields clear the stored value.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = issues)]
#[diesel(primary_key(issue_id))]
#[diesel(treat_none_as_null = true)]
pub struct NewIssueRow {
    /// Issue identifier.
    pub issue_id: String,
    /// Issue category.
    pub issue_type: String,
    /// Description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Priority in storage format.
    pub priority: String,
    /// Reporter address.
    pub email: Option<String>,
    /// Current status.
    pub status: String,
    /// Current assignee.
    pub assigned_to: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// History JSON array.
    pub status_history: Value,
    /// Comments JSON array.
    pub comments: Value,
}

/// Changeset written by a status update.
///
/// A `None` assignee skips the column, keeping the stored assignment.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = issues)]
pub struct StatusUpdateChangeset {
    /// New status.
    pub status: String,
    /// Complete new history.
    pub status_history: Value,
    /// Complete new comment list.
    pub comments: Value,
    /// Assignee to set, if any.
    pub assigned_to: Option<String>,
}
