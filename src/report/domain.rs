//! Read-side report types derived from the stored task list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of completion velocity across recent work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityTrend {
    /// Completion rate is increasing.
    Rising,
    /// Completion rate is steady.
    Stable,
    /// Completion rate is decreasing.
    Falling,
}

impl VelocityTrend {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Stable => "stable",
            Self::Falling => "falling",
        }
    }
}

impl fmt::Display for VelocityTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Share of tasks completed, as a percentage. Zero for an empty
    /// board.
    pub percent_complete: f64,
    /// Completion velocity direction.
    pub velocity_trend: VelocityTrend,
    /// Recommended next action, derived from the highest-priority
    /// pending task.
    pub next_action: String,
    /// Number of blocked tasks.
    pub blockers: u32,
}

/// Standup summary partitioning recent work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandupSummary {
    /// Titles of completed tasks that were due before the report time.
    pub yesterday: Vec<String>,
    /// Titles of up to three pending tasks in storage order.
    pub today: Vec<String>,
    /// Reported impediments.
    pub impediments: Vec<String>,
}
