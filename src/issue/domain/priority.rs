//! Issue priority levels.

use super::IssueDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Triage priority attached to an issue at report time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssuePriority {
    /// Safety hazard or outage needing immediate attention.
    Critical,
    /// Significant disruption.
    High,
    /// Default level when the reporter does not choose one.
    #[default]
    Medium,
    /// Cosmetic or minor.
    Low,
}

impl IssuePriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl TryFrom<&str> for IssuePriority {
    type Error = IssueDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "CRITICAL" => Ok(Self::Critical),
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            "LOW" => Ok(Self::Low),
            _ => Err(IssueDomainError::InvalidPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
