//! Diesel row models for task board persistence.

use super::schema::{subtasks, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Impact rating.
    pub impact: f64,
    /// Effort rating.
    pub effort: f64,
    /// Urgency tier.
    pub urgency: String,
    /// Lifecycle status.
    pub status: String,
    /// Evidence link recorded at completion.
    pub evidence_link: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Impact rating.
    pub impact: f64,
    /// Effort rating.
    pub effort: f64,
    /// Urgency tier.
    pub urgency: String,
    /// Lifecycle status.
    pub status: String,
    /// Evidence link recorded at completion.
    pub evidence_link: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for subtask records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = subtasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SubtaskRow {
    /// Subtask identifier.
    pub id: uuid::Uuid,
    /// Parent task identifier.
    pub parent_id: uuid::Uuid,
    /// Subtask title.
    pub title: String,
    /// Estimated duration in minutes.
    pub duration_minutes: i32,
    /// Completion flag.
    pub is_done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for subtask records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = subtasks)]
pub struct NewSubtaskRow {
    /// Subtask identifier.
    pub id: uuid::Uuid,
    /// Parent task identifier.
    pub parent_id: uuid::Uuid,
    /// Subtask title.
    pub title: String,
    /// Estimated duration in minutes.
    pub duration_minutes: i32,
    /// Completion flag.
    pub is_done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
