//! Repository port for subtask persistence and lookup.

use crate::task::domain::{Subtask, SubtaskId, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for subtask repository operations.
pub type SubtaskRepositoryResult<T> = Result<T, SubtaskRepositoryError>;

/// Subtask persistence contract.
#[async_trait]
pub trait SubtaskRepository: Send + Sync {
    /// Stores a batch of subtasks produced by one breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`SubtaskRepositoryError::DuplicateSubtask`] when a
    /// subtask ID already exists; no subtasks from the batch are stored
    /// in that case.
    async fn store_batch(&self, subtasks: &[Subtask]) -> SubtaskRepositoryResult<()>;

    /// Returns all subtasks of the given parent task in storage order.
    async fn list_by_parent(&self, parent_id: TaskId) -> SubtaskRepositoryResult<Vec<Subtask>>;
}

/// Errors returned by subtask repository implementations.
#[derive(Debug, Clone, Error)]
pub enum SubtaskRepositoryError {
    /// A subtask with the same identifier already exists.
    #[error("duplicate subtask identifier: {0}")]
    DuplicateSubtask(SubtaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubtaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
