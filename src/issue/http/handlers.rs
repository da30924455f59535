//! Framework-independent request handlers.
//!
//! Request bodies arrive as raw JSON bytes. Unknown fields are ignored.
//! Malformed bodies, missing required fields and store failures all produce
//! the generic error response; details go to the log only.

use super::ApiResponse;
use crate::issue::{
    domain::{IssueId, IssuePriority, IssueRecord},
    ports::{IssueStore, Notifier},
    services::{IssueLifecycleService, ReportIssueRequest, UpdateStatusRequest},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub(super) const CREATE_METHODS: &str = "POST";
pub(super) const READ_METHODS: &str = "GET";
pub(super) const UPDATE_METHODS: &str = "PUT";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateIssuePayload {
    issue_type: Option<String>,
    description: Option<String>,
    location: Option<String>,
    priority: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStatusPayload {
    issue_id: Option<String>,
    status: Option<String>,
    assigned_to: Option<String>,
    comment: Option<String>,
    updated_by: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedBody<'a> {
    message: &'static str,
    issue_id: &'a IssueId,
    priority: IssuePriority,
}

#[derive(Serialize)]
struct ListBody<'a> {
    issues: &'a [IssueRecord],
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatedBody<'a> {
    message: &'static str,
    issue_id: &'a IssueId,
    new_status: &'a str,
    assigned_to: Option<&'a str>,
    comment_added: bool,
}

/// Handles an issue report.
pub async fn create_issue<S, N, C>(
    service: &IssueLifecycleService<S, N, C>,
    body: &[u8],
) -> ApiResponse
where
    S: IssueStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    let payload: CreateIssuePayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(error) => return request_failed("create", CREATE_METHODS, &error),
    };

    let mut request = ReportIssueRequest::new(
        payload.issue_type.unwrap_or_default(),
        payload.description.unwrap_or_default(),
        payload.location.unwrap_or_default(),
    );
    if let Some(priority) = payload.priority {
        request = request.with_priority(priority);
    }
    if let Some(email) = payload.email {
        request = request.with_email(email);
    }

    match service.report(request).await {
        Ok(record) => ApiResponse::ok(
            CREATE_METHODS,
            &CreatedBody {
                message: "Issue reported successfully",
                issue_id: record.issue_id(),
                priority: record.priority(),
            },
        ),
        Err(error) => request_failed("create", CREATE_METHODS, &error),
    }
}

/// Handles a request for every issue, newest first.
pub async fn list_issues<S, N, C>(service: &IssueLifecycleService<S, N, C>) -> ApiResponse
where
    S: IssueStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    match service.list().await {
        Ok(records) => ApiResponse::ok(
            READ_METHODS,
            &ListBody {
                count: records.len(),
                issues: &records,
            },
        ),
        Err(error) => request_failed("list", READ_METHODS, &error),
    }
}

/// Handles a lookup of one issue.
pub async fn get_issue<S, N, C>(
    service: &IssueLifecycleService<S, N, C>,
    issue_id: &str,
) -> ApiResponse
where
    S: IssueStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    match service.find(&IssueId::from_raw(issue_id)).await {
        Ok(Some(record)) => ApiResponse::ok(READ_METHODS, &record),
        Ok(None) => ApiResponse::not_found(READ_METHODS),
        Err(error) => request_failed("get", READ_METHODS, &error),
    }
}

/// Handles a status update.
///
/// The `assignedTo` field of the response is read from the stored record, so
/// an assignment made by an earlier update is echoed when the request leaves
/// the assignee out. It is `null` only when the issue has never been assigned.
pub async fn update_status<S, N, C>(
    service: &IssueLifecycleService<S, N, C>,
    body: &[u8],
) -> ApiResponse
where
    S: IssueStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    let payload: UpdateStatusPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(error) => return request_failed("update", UPDATE_METHODS, &error),
    };

    let mut request = UpdateStatusRequest::new(
        payload.issue_id.unwrap_or_default(),
        payload.status.unwrap_or_default(),
    );
    if let Some(assignee) = payload.assigned_to {
        request = request.with_assignee(assignee);
    }
    if let Some(comment) = payload.comment {
        request = request.with_comment(comment);
    }
    if let Some(updated_by) = payload.updated_by {
        request = request.with_updated_by(updated_by);
    }

    match service.update_status(request).await {
        Ok(outcome) => ApiResponse::ok(
            UPDATE_METHODS,
            &UpdatedBody {
                message: "Issue updated successfully",
                issue_id: outcome.record.issue_id(),
                new_status: outcome.record.status().as_str(),
                assigned_to: outcome.record.assigned_to(),
                comment_added: outcome.comment_added,
            },
        ),
        Err(error) if error.is_not_found() => ApiResponse::not_found(UPDATE_METHODS),
        Err(error) => request_failed("update", UPDATE_METHODS, &error),
    }
}

pub(super) fn request_failed(
    operation: &'static str,
    allow_methods: &'static str,
    error: &dyn Display,
) -> ApiResponse {
    tracing::error!(operation, %error, "request failed");
    ApiResponse::internal_error(allow_methods)
}
