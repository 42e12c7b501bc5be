//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The impact value is zero, negative, or not finite.
    #[error("invalid impact {0}, expected a positive finite number")]
    InvalidImpact(f64),

    /// The effort value is zero, negative, or not finite. Effort divides
    /// the weighted impact, so zero must be rejected rather than produce
    /// an infinite score.
    #[error("invalid effort {0}, expected a positive finite number")]
    InvalidEffort(f64),

    /// The urgency value is outside the fixed tier set.
    #[error("unknown urgency: {0}")]
    UnknownUrgency(String),

    /// The subtask duration is zero.
    #[error("invalid subtask duration {0}, expected a positive number of minutes")]
    InvalidDuration(u32),

    /// The Definition of Done gate did not pass.
    #[error("Done Definition not met: Missing evidence or peer review.")]
    DoneDefinitionNotMet,

    /// The task has already been completed; the transition is one-way.
    #[error("task {0} is already completed")]
    AlreadyCompleted(TaskId),
}

/// Error returned while parsing urgency tiers from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown urgency: {0}")]
pub struct ParseUrgencyError(pub String);

impl From<ParseUrgencyError> for TaskDomainError {
    fn from(err: ParseUrgencyError) -> Self {
        Self::UnknownUrgency(err.0)
    }
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
