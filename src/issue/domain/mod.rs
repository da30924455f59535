//! Domain model for campus facility issues.
//!
//! The issue domain models report intake, status transitions with their
//! append-only audit trail, and the field assignments a status update
//! commits, while keeping storage and delivery concerns outside the domain
//! boundary.

mod change;
mod error;
mod ids;
mod priority;
mod record;
mod status;
pub mod timestamp;

pub use change::{DEFAULT_UPDATED_BY, IssueFieldSet, StatusChange};
pub use error::IssueDomainError;
pub use ids::IssueId;
pub use priority::IssuePriority;
pub use record::{
    CREATED_BY, CommentEntry, IssueRecord, IssueReport, PersistedIssueData, StatusEntry,
};
pub use status::{IssueStatus, humanize};
