//! Port contracts for issue tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by issue services.

pub mod notifier;
pub mod store;

pub use notifier::{EmailMessage, Notifier, NotifierError, NotifierResult};
pub use store::{IssueStore, IssueStoreError, IssueStoreResult};
