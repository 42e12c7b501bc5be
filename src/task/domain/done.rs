//! Definition-of-Done checklist gating task completion.

use super::{EvidenceLink, TaskDomainError};
use serde::{Deserialize, Serialize};

/// Completion checklist submitted when marking a task done.
///
/// The checklist is a pure decision input: evaluating it performs no I/O
/// and mutates nothing. Callers apply the resulting status change through
/// storage as a single atomic update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoneChecklist {
    evidence_link: Option<String>,
    peer_review_checked: Option<bool>,
}

impl DoneChecklist {
    /// Creates an empty checklist with no evidence and no peer review.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            evidence_link: None,
            peer_review_checked: None,
        }
    }

    /// Sets the evidence link.
    #[must_use]
    pub fn with_evidence_link(mut self, link: impl Into<String>) -> Self {
        self.evidence_link = Some(link.into());
        self
    }

    /// Sets the peer review flag.
    #[must_use]
    pub const fn with_peer_review(mut self, checked: bool) -> Self {
        self.peer_review_checked = Some(checked);
        self
    }

    /// Returns the submitted evidence link, if any.
    #[must_use]
    pub fn evidence_link(&self) -> Option<&str> {
        self.evidence_link.as_deref()
    }

    /// Returns the submitted peer review flag, if any.
    #[must_use]
    pub const fn peer_review_checked(&self) -> Option<bool> {
        self.peer_review_checked
    }

    /// Evaluates the Definition of Done.
    ///
    /// Passes iff the evidence link is present and non-empty after
    /// trimming and peer review is strictly confirmed. On success the
    /// validated evidence link is returned for the caller to persist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DoneDefinitionNotMet`] when either
    /// requirement is missing.
    pub fn evaluate(&self) -> Result<EvidenceLink, TaskDomainError> {
        if self.peer_review_checked != Some(true) {
            return Err(TaskDomainError::DoneDefinitionNotMet);
        }
        let link = self
            .evidence_link
            .as_deref()
            .ok_or(TaskDomainError::DoneDefinitionNotMet)?;
        EvidenceLink::new(link)
    }
}
