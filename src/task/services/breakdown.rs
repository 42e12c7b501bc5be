//! Service layer for breaking tasks down into subtask plans.

use crate::task::{
    domain::{Subtask, Task, TaskDomainError, TaskId},
    ports::{
        SubtaskRepository, SubtaskRepositoryError, TaskRepository, TaskRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Estimated duration assigned to each generated breakdown step.
const STEP_MINUTES: u32 = 15;

/// Service-level errors for breakdown operations.
#[derive(Debug, Error)]
pub enum BreakdownError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Task(#[from] TaskRepositoryError),
    /// Subtask repository operation failed.
    #[error(transparent)]
    Subtask(#[from] SubtaskRepositoryError),
}

/// Result type for breakdown service operations.
pub type BreakdownResult<T> = Result<T, BreakdownError>;

/// Task breakdown orchestration service.
#[derive(Clone)]
pub struct BreakdownService<T, S, C>
where
    T: TaskRepository,
    S: SubtaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    subtasks: Arc<S>,
    clock: Arc<C>,
}

impl<T, S, C> BreakdownService<T, S, C>
where
    T: TaskRepository,
    S: SubtaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new breakdown service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, subtasks: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            subtasks,
            clock,
        }
    }

    /// Breaks a task down into the fixed three-step plan and persists
    /// the resulting subtasks.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownError::Task`] with
    /// [`TaskRepositoryError::NotFound`] when the parent does not exist,
    /// and [`BreakdownError::Subtask`] when persistence rejects the
    /// batch.
    pub async fn breakdown(&self, task_id: TaskId) -> BreakdownResult<Vec<Subtask>> {
        let parent = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(task_id))?;

        let subtasks = plan_steps(&parent)
            .into_iter()
            .map(|title| Subtask::new(parent.id(), title, STEP_MINUTES, &*self.clock))
            .collect::<Result<Vec<Subtask>, TaskDomainError>>()?;

        self.subtasks.store_batch(&subtasks).await?;
        info!(task_id = %task_id, steps = subtasks.len(), "task broken down");
        Ok(subtasks)
    }

    /// Returns all subtasks of the given parent task.
    ///
    /// # Errors
    ///
    /// Returns [`BreakdownError::Subtask`] when persistence lookup
    /// fails.
    pub async fn list_for_task(&self, task_id: TaskId) -> BreakdownResult<Vec<Subtask>> {
        Ok(self.subtasks.list_by_parent(task_id).await?)
    }
}

/// Fixed plan applied to every breakdown request.
fn plan_steps(parent: &Task) -> [String; 3] {
    [
        format!("Research {}", parent.title()),
        format!("Draft outline for {}", parent.title()),
        "Review requirements".to_owned(),
    ]
}
