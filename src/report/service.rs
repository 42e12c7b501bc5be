//! Service layer for dashboard and standup reporting.

use super::domain::{DashboardStats, StandupSummary, VelocityTrend};
use crate::task::{
    domain::{TaskStatus, rank_by_priority},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Number of pending tasks surfaced in a standup summary.
const STANDUP_TODAY_LIMIT: usize = 3;

/// Service-level errors for reporting operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for reporting service operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Read-side reporting service over the task repository.
#[derive(Clone)]
pub struct ReportService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ReportService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new reporting service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Computes the dashboard snapshot.
    ///
    /// The next action is derived from the highest-priority pending
    /// task. The velocity trend reports [`VelocityTrend::Stable`] until
    /// a velocity history is recorded; no blocker model exists, so the
    /// blocker count is zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Repository`] when persistence lookup
    /// fails.
    pub async fn dashboard(&self) -> ReportResult<DashboardStats> {
        let total = self.repository.count_all().await?;
        let completed = self
            .repository
            .count_by_status(TaskStatus::Completed)
            .await?;
        let pending = self.repository.list_by_status(TaskStatus::Pending).await?;

        let next_action = rank_by_priority(&pending)
            .first()
            .map_or_else(
                || "No pending tasks".to_owned(),
                |scored| format!("Review {}", scored.task().title()),
            );

        let stats = DashboardStats {
            percent_complete: percent_complete(completed, total),
            velocity_trend: VelocityTrend::Stable,
            next_action,
            blockers: 0,
        };
        debug!(total, completed, "dashboard computed");
        Ok(stats)
    }

    /// Builds the standup summary at the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Repository`] when persistence lookup
    /// fails.
    pub async fn standup(&self) -> ReportResult<StandupSummary> {
        let now = self.clock.utc();

        let yesterday = self
            .repository
            .list_by_status(TaskStatus::Completed)
            .await?
            .into_iter()
            .filter(|task| task.due_date().is_some_and(|due| due < now))
            .map(|task| task.title().to_owned())
            .collect();

        let today = self
            .repository
            .list_by_status(TaskStatus::Pending)
            .await?
            .into_iter()
            .take(STANDUP_TODAY_LIMIT)
            .map(|task| task.title().to_owned())
            .collect();

        Ok(StandupSummary {
            yesterday,
            today,
            impediments: vec!["None".to_owned()],
        })
    }
}

/// Completed share of the board as a percentage; zero for an empty
/// board.
#[expect(
    clippy::cast_precision_loss,
    reason = "task counts stay far below the f64 integer precision limit"
)]
fn percent_complete(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (completed as f64 / total as f64) * 100.0
}
