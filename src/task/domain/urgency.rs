//! Urgency tiers and their fixed priority weights.

use super::ParseUrgencyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tier assigned to a task.
///
/// The tier set is closed: unknown values are rejected at the boundary
/// rather than silently scoring as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Must be handled immediately.
    Critical,
    /// Should be handled soon.
    High,
    /// Default tier.
    Medium,
    /// Can wait.
    Low,
}

impl Urgency {
    /// Returns the fixed multiplier applied to impact for this tier.
    ///
    /// The table is exact and exhaustively matched: critical 1.5, high
    /// 1.2, medium 1.0, low 0.8.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Critical => 1.5,
            Self::High => 1.2,
            Self::Medium => 1.0,
            Self::Low => 0.8,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Urgency {
    type Error = ParseUrgencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseUrgencyError(value.to_owned())),
        }
    }
}
