//! In-memory subtask repository for tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Subtask, SubtaskId, TaskId},
    ports::{SubtaskRepository, SubtaskRepositoryError, SubtaskRepositoryResult},
};

/// Thread-safe in-memory subtask repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubtaskRepository {
    state: Arc<RwLock<InMemorySubtaskState>>,
}

#[derive(Debug, Default)]
struct InMemorySubtaskState {
    subtasks: HashMap<SubtaskId, Subtask>,
    parent_index: HashMap<TaskId, Vec<SubtaskId>>,
}

impl InMemorySubtaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubtaskRepository for InMemorySubtaskRepository {
    async fn store_batch(&self, subtasks: &[Subtask]) -> SubtaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SubtaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        // Reject the whole batch before storing anything.
        for subtask in subtasks {
            if state.subtasks.contains_key(&subtask.id()) {
                return Err(SubtaskRepositoryError::DuplicateSubtask(subtask.id()));
            }
        }

        for subtask in subtasks {
            state
                .parent_index
                .entry(subtask.parent_id())
                .or_default()
                .push(subtask.id());
            state.subtasks.insert(subtask.id(), subtask.clone());
        }
        Ok(())
    }

    async fn list_by_parent(&self, parent_id: TaskId) -> SubtaskRepositoryResult<Vec<Subtask>> {
        let state = self.state.read().map_err(|err| {
            SubtaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let subtasks = state
            .parent_index
            .get(&parent_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.subtasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(subtasks)
    }
}
