//! Issue status values.

use super::IssueDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of an issue.
///
/// The set of statuses is open: staff may move an issue to any non-empty
/// value. The well-known values are exposed as constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueStatus(String);

impl IssueStatus {
    /// Status of every newly reported issue.
    pub const OPEN: &'static str = "OPEN";
    /// Status while staff work on an issue.
    pub const IN_PROGRESS: &'static str = "IN_PROGRESS";
    /// Status once the problem has been fixed.
    pub const RESOLVED: &'static str = "RESOLVED";

    /// Creates a status from caller input.
    ///
    /// # Errors
    ///
    /// Returns [`IssueDomainError::MissingField`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, IssueDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(IssueDomainError::MissingField("status"));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the initial status for new reports.
    #[must_use]
    pub fn open() -> Self {
        Self(Self::OPEN.to_owned())
    }

    /// Returns the status as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IssueStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders a stored token such as `IN_PROGRESS` for people to read.
#[must_use]
pub fn humanize(value: &str) -> String {
    value.replace('_', " ")
}
