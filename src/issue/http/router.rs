//! `axum` routes for the issue endpoints.

use super::{ApiResponse, handlers};
use crate::issue::{
    ports::{IssueStore, Notifier},
    services::IssueLifecycleService,
};
use axum::{
    Router,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    routing::{get, post},
};
use mockable::Clock;
use std::sync::Arc;

type SharedService<S, N, C> = Arc<IssueLifecycleService<S, N, C>>;

/// Builds the router serving the issue endpoints.
///
/// - `POST /issues` reports an issue.
/// - `GET /issues` lists every issue, newest first.
/// - `PUT /issues` updates the status of the issue named in the body.
/// - `GET /issues/{issue_id}` returns one issue.
///
/// Bodies and paths the extractors reject get the generic error response.
#[must_use]
pub fn router<S, N, C>(service: SharedService<S, N, C>) -> Router
where
    S: IssueStore + 'static,
    N: Notifier + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/issues",
            post(create::<S, N, C>)
                .get(list::<S, N, C>)
                .put(update::<S, N, C>),
        )
        .route("/issues/:issue_id", get(find::<S, N, C>))
        .with_state(service)
}

async fn create<S, N, C>(
    State(service): State<SharedService<S, N, C>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResponse
where
    S: IssueStore + 'static,
    N: Notifier + 'static,
    C: Clock + Send + Sync + 'static,
{
    match body {
        Ok(body) => handlers::create_issue(&service, &body).await,
        Err(rejection) => {
            handlers::request_failed("create", handlers::CREATE_METHODS, &rejection)
        }
    }
}

async fn list<S, N, C>(State(service): State<SharedService<S, N, C>>) -> ApiResponse
where
    S: IssueStore + 'static,
    N: Notifier + 'static,
    C: Clock + Send + Sync + 'static,
{
    handlers::list_issues(&service).await
}

async fn find<S, N, C>(
    State(service): State<SharedService<S, N, C>>,
    issue_id: Result<Path<String>, PathRejection>,
) -> ApiResponse
where
    S: IssueStore + 'static,
    N: Notifier + 'static,
    C: Clock + Send + Sync + 'static,
{
    match issue_id {
        Ok(Path(issue_id)) => handlers::get_issue(&service, &issue_id).await,
        Err(rejection) => handlers::request_failed("get", handlers::READ_METHODS, &rejection),
    }
}

async fn update<S, N, C>(
    State(service): State<SharedService<S, N, C>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResponse
where
    S: IssueStore + 'static,
    N: Notifier + 'static,
    C: Clock + Send + Sync + 'static,
{
    match body {
        Ok(body) => handlers::update_status(&service, &body).await,
        Err(rejection) => {
            handlers::request_failed("update", handlers::UPDATE_METHODS, &rejection)
        }
    }
}
