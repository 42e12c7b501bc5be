//! Subtask records created by task breakdown.

use super::{SubtaskId, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Child work item produced by breaking down a parent task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    id: SubtaskId,
    parent_id: TaskId,
    title: String,
    duration_minutes: u32,
    is_done: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted subtask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSubtaskData {
    /// Persisted subtask identifier.
    pub id: SubtaskId,
    /// Persisted parent task identifier.
    pub parent_id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted estimated duration in minutes.
    pub duration_minutes: u32,
    /// Persisted completion flag.
    pub is_done: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Subtask {
    /// Creates a new open subtask under the given parent.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming, or [`TaskDomainError::InvalidDuration`] when the
    /// duration is zero.
    pub fn new(
        parent_id: TaskId,
        title: impl Into<String>,
        duration_minutes: u32,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if duration_minutes == 0 {
            return Err(TaskDomainError::InvalidDuration(duration_minutes));
        }
        Ok(Self {
            id: SubtaskId::new(),
            parent_id,
            title: normalized.to_owned(),
            duration_minutes,
            is_done: false,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a subtask from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedSubtaskData) -> Self {
        Self {
            id: data.id,
            parent_id: data.parent_id,
            title: data.title,
            duration_minutes: data.duration_minutes,
            is_done: data.is_done,
            created_at: data.created_at,
        }
    }

    /// Returns the subtask identifier.
    #[must_use]
    pub const fn id(&self) -> SubtaskId {
        self.id
    }

    /// Returns the parent task identifier.
    #[must_use]
    pub const fn parent_id(&self) -> TaskId {
        self.parent_id
    }

    /// Returns the subtask title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the estimated duration in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns whether the subtask has been finished.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.is_done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
