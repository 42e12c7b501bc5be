//! Read-side reporting over the stored task list.
//!
//! Reporting consumes the task repository port; it owns no persistence
//! of its own. Dashboard stats and standup summaries are recomputed on
//! every request.

mod domain;
mod service;

pub use domain::{DashboardStats, StandupSummary, VelocityTrend};
pub use service::{ReportError, ReportResult, ReportService};
