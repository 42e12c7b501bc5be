//! Task aggregate root and related lifecycle types.

use super::{
    DoneChecklist, Effort, EvidenceLink, Impact, PriorityScore, TaskDomainError, TaskId,
    TaskStatus, Urgency,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated parameter object describing a task to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    impact: Impact,
    effort: Effort,
    urgency: Urgency,
    due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a draft with the required task fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        impact: Impact,
        effort: Effort,
        urgency: Urgency,
    ) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title: normalized.to_owned(),
            description: None,
            impact,
            effort,
            urgency,
            due_date: None,
        })
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

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    impact: Impact,
    effort: Effort,
    urgency: Urgency,
    status: TaskStatus,
    evidence_link: Option<EvidenceLink>,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted impact rating.
    pub impact: Impact,
    /// Persisted effort rating.
    pub effort: Effort,
    /// Persisted urgency tier.
    pub urgency: Urgency,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted evidence link, if any.
    pub evidence_link: Option<EvidenceLink>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task from a validated draft.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            impact: draft.impact,
            effort: draft.effort,
            urgency: draft.urgency,
            status: TaskStatus::Pending,
            evidence_link: None,
            due_date: draft.due_date,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            impact: data.impact,
            effort: data.effort,
            urgency: data.urgency,
            status: data.status,
            evidence_link: data.evidence_link,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the impact rating.
    #[must_use]
    pub const fn impact(&self) -> Impact {
        self.impact
    }

    /// Returns the effort rating.
    #[must_use]
    pub const fn effort(&self) -> Effort {
        self.effort
    }

    /// Returns the urgency tier.
    #[must_use]
    pub const fn urgency(&self) -> Urgency {
        self.urgency
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the recorded evidence link, if any.
    #[must_use]
    pub const fn evidence_link(&self) -> Option<&EvidenceLink> {
        self.evidence_link.as_ref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Computes the derived priority score for this task.
    #[must_use]
    pub const fn priority_score(&self) -> PriorityScore {
        PriorityScore::compute(self.impact, self.effort, self.urgency)
    }

    /// Completes the task after evaluating the Definition of Done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyCompleted`] when the task is not
    /// pending, or [`TaskDomainError::DoneDefinitionNotMet`] when the
    /// checklist fails. The task is unchanged on error.
    pub fn complete(
        &mut self,
        checklist: &DoneChecklist,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(TaskStatus::Completed) {
            return Err(TaskDomainError::AlreadyCompleted(self.id));
        }
        let evidence = checklist.evaluate()?;
        self.status = TaskStatus::Completed;
        self.evidence_link = Some(evidence);
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
