//! Service layer for task creation, priority listing, and completion.

use crate::task::{
    domain::{
        DoneChecklist, Effort, Impact, ScoredTask, Task, TaskDomainError, TaskDraft, TaskId,
        Urgency, rank_by_priority,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    impact: f64,
    effort: f64,
    urgency: String,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        impact: f64,
        effort: f64,
        urgency: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            impact,
            effort,
            urgency: urgency.into(),
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for completing a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTaskRequest {
    task_id: TaskId,
    checklist: DoneChecklist,
}

impl CompleteTaskRequest {
    /// Creates a request with an empty completion checklist.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            checklist: DoneChecklist::new(),
        }
    }

    /// Sets the evidence link on the checklist.
    #[must_use]
    pub fn with_evidence_link(mut self, link: impl Into<String>) -> Self {
        self.checklist = self.checklist.with_evidence_link(link);
        self
    }

    /// Sets the peer review flag on the checklist.
    #[must_use]
    pub fn with_peer_review(mut self, checked: bool) -> Self {
        self.checklist = self.checklist.with_peer_review(checked);
        self
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new pending task from raw request fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the title, impact, effort,
    /// or urgency fails validation, or [`TaskBoardError::Repository`]
    /// when persistence rejects the task.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let impact = Impact::new(request.impact)?;
        let effort = Effort::new(request.effort)?;
        let urgency = Urgency::try_from(request.urgency.as_str()).map_err(TaskDomainError::from)?;

        let mut draft = TaskDraft::new(request.title, impact, effort, urgency)?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(due_date) = request.due_date {
            draft = draft.with_due_date(due_date);
        }

        let task = Task::new(draft, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), urgency = %task.urgency(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskBoardResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns all tasks annotated with priority scores, ordered by
    /// score descending.
    ///
    /// Scores are recomputed from stored inputs on every call and never
    /// written back. Tasks with equal scores keep storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_by_priority(&self) -> TaskBoardResult<Vec<ScoredTask>> {
        let tasks = self.repository.list_all().await?;
        let ranked = rank_by_priority(&tasks);
        debug!(count = ranked.len(), "ranked task listing");
        Ok(ranked)
    }

    /// Completes a task after evaluating the Definition of Done.
    ///
    /// The checklist is evaluated before any write; on success the
    /// status change and evidence link are persisted as a single
    /// conditional update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the checklist fails or the
    /// task is already completed, and [`TaskBoardError::Repository`] when
    /// the task is missing or a concurrent completion won the race.
    pub async fn complete(&self, request: CompleteTaskRequest) -> TaskBoardResult<Task> {
        let mut task = self.find_by_id_or_error(request.task_id).await?;
        task.complete(&request.checklist, &*self.clock)?;
        self.repository.complete(&task).await?;
        info!(task_id = %task.id(), "task completed");
        Ok(task)
    }

    async fn find_by_id_or_error(&self, id: TaskId) -> TaskBoardResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}
