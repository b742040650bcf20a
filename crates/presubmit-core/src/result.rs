use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a single check finding.
///
/// Mirrors the three result kinds of the review-tooling host: informational
/// notifications, prompt warnings, and hard errors. Only `Error` blocks
/// submission; the other two are surfaced to the author and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    Notify,
    Warning,
    Error,
}

impl CheckLevel {
    #[must_use]
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Notify => "notify",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// A single finding produced by a presubmit check.
///
/// Checks return an empty sequence to pass; every entry in a non-empty
/// sequence is shown to the change author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub level: CheckLevel,
    pub message: String,
}

impl CheckResult {
    #[must_use]
    pub fn notify(message: impl Into<String>) -> Self {
        Self {
            level: CheckLevel::Notify,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: CheckLevel::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: CheckLevel::Error,
            message: message.into(),
        }
    }
}
