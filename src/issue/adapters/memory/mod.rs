//! In-memory adapters for tests and single-process deployments.

mod notifier;
mod store;

pub use notifier::InMemoryNotifier;
pub use store::InMemoryIssueStore;
