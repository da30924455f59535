//! Service layer orchestrating issue intake, status updates and lookups.

mod lifecycle;
mod notifications;
mod status_update;

pub use lifecycle::{
    IssueLifecycleError, IssueLifecycleResult, IssueLifecycleService, ReportIssueRequest,
};
pub use notifications::{IssueMailer, Recipient, deliver_best_effort};
pub use status_update::{StatusUpdateOutcome, UpdateStatusRequest};
