//! Urgency-weighted priority scoring and task ranking.

use super::{Effort, Impact, Task, TaskDomainError, Urgency};
use serde::Serialize;
use std::fmt;

/// Derived ranking value for display ordering.
///
/// A score is `impact * weight(urgency) / effort`: the urgency-weighted
/// impact density of a task. Scores are never persisted; they are
/// recomputed from their inputs on every read so they cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct PriorityScore(f64);

impl PriorityScore {
    /// Computes the score for a validated (impact, effort, urgency)
    /// triple.
    ///
    /// Deterministic and pure: identical inputs always yield identical
    /// output. The inputs carry their own validity (positive finite
    /// impact and effort, closed urgency set), so computation cannot
    /// fail.
    #[must_use]
    pub const fn compute(impact: Impact, effort: Effort, urgency: Urgency) -> Self {
        Self(impact.value() * urgency.weight() / effort.value())
    }

    /// Computes a score from unvalidated parts.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidImpact`] or
    /// [`TaskDomainError::InvalidEffort`] for non-positive or non-finite
    /// numeric inputs, and [`TaskDomainError::UnknownUrgency`] when the
    /// urgency string is outside the fixed tier set.
    pub fn from_parts(impact: f64, effort: f64, urgency: &str) -> Result<Self, TaskDomainError> {
        let impact = Impact::new(impact)?;
        let effort = Effort::new(effort)?;
        let urgency = Urgency::try_from(urgency)?;
        Ok(Self::compute(impact, effort, urgency))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored task annotated with its derived priority score.
///
/// Serializes as the task's fields plus a `priority_score` field,
/// matching the listing payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    task: Task,
    priority_score: PriorityScore,
}

impl ScoredTask {
    /// Annotates a task with its computed score.
    #[must_use]
    pub fn new(task: Task) -> Self {
        let priority_score = task.priority_score();
        Self {
            task,
            priority_score,
        }
    }

    /// Returns the underlying task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the derived priority score.
    #[must_use]
    pub const fn priority_score(&self) -> PriorityScore {
        self.priority_score
    }

    /// Consumes the annotation, returning the task.
    #[must_use]
    pub fn into_task(self) -> Task {
        self.task
    }
}

/// Annotates tasks with priority scores and orders them for listing.
///
/// Returns a new sequence sorted by score descending; the input is not
/// mutated. The sort is stable, so tasks with equal scores keep their
/// input order, and re-ranking an already ranked sequence yields the same
/// order.
#[must_use]
pub fn rank_by_priority(tasks: &[Task]) -> Vec<ScoredTask> {
    let mut scored: Vec<ScoredTask> = tasks.iter().cloned().map(ScoredTask::new).collect();
    scored.sort_by(|a, b| {
        b.priority_score
            .value()
            .total_cmp(&a.priority_score.value())
    });
    scored
}
