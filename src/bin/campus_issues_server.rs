//! Serves the campus issue API over HTTP.
//!
//! Usage:
//!
//! ```text
//! campus_issues_server
//! ```
//!
//! Settings come from `campus-issues.toml` and `CAMPUS_ISSUES_*` environment
//! variables (see [`campus_issues::config`]). `CAMPUS_ISSUES_LOG` overrides
//! the configured log filter. When `store.database_url` is unset, issues are
//! kept in memory for the lifetime of the process.

use campus_issues::{
    config::ServiceConfig,
    issue::{
        adapters::{
            TracingNotifier,
            memory::InMemoryIssueStore,
            postgres::{IssuePgPool, PostgresIssueStore},
        },
        http,
        ports::IssueStore,
        services::{IssueLifecycleService, IssueMailer},
    },
};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const LOG_ENV: &str = "CAMPUS_ISSUES_LOG";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServiceConfig::load()?;
    init_tracing(&config.logging.filter)?;

    match config.store.database_url.as_deref() {
        Some(url) => {
            let pool = connect(url, config.store.max_connections)?;
            serve(PostgresIssueStore::new(pool), &config).await
        }
        None => {
            tracing::warn!("no database configured; issues are kept in memory");
            serve(InMemoryIssueStore::new(), &config).await
        }
    }
}

fn init_tracing(default_filter: &str) -> Result<(), BoxError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).or_else(|_| EnvFilter::try_new(default_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).try_init()?;
    Ok(())
}

fn connect(database_url: &str, max_connections: u32) -> Result<IssuePgPool, BoxError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(max_connections).build(manager)?)
}

async fn serve<S>(store: S, config: &ServiceConfig) -> Result<(), BoxError>
where
    S: IssueStore + 'static,
{
    let notifications = &config.notifications;
    let notifier = TracingNotifier::new(
        notifications.sender_email.as_str(),
        notifications.region.as_str(),
    );
    let mailer = IssueMailer::new(Arc::new(notifier), notifications.admin_email.as_str());
    let service = IssueLifecycleService::new(Arc::new(store), mailer, Arc::new(DefaultClock));

    let address = config.server.bind_address.as_str();
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "serving campus issue API");
    axum::serve(listener, http::router(Arc::new(service))).await?;
    Ok(())
}
