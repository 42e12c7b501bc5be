//! `PostgreSQL` repository implementations for task board storage.

use super::{
    models::{NewSubtaskRow, NewTaskRow, SubtaskRow, TaskRow},
    schema::{subtasks, tasks},
};
use crate::task::{
    domain::{
        Effort, EvidenceLink, Impact, PersistedSubtaskData, PersistedTaskData, Subtask, SubtaskId,
        Task, TaskId, TaskStatus, Urgency,
    },
    ports::{
        SubtaskRepository, SubtaskRepositoryError, SubtaskRepositoryResult, TaskRepository,
        TaskRepositoryError, TaskRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task board adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns the pool build error when the database is unreachable or the
/// URL is malformed.
pub fn build_pool(database_url: &str) -> Result<TaskPgPool, diesel::r2d2::PoolError> {
    Pool::builder().build(ConnectionManager::new(database_url))
}

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn complete(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let evidence = task
            .evidence_link()
            .map(|link| link.as_str().to_owned());
        let status = task.status().as_str().to_owned();
        let updated_at = task.updated_at();

        self.run_blocking(move |connection| {
            // Single conditional update: the pending guard serializes
            // racing completion attempts at the row level.
            let updated = diesel::update(
                tasks::table.filter(
                    tasks::id
                        .eq(task_id.into_inner())
                        .and(tasks::status.eq(TaskStatus::Pending.as_str())),
                ),
            )
            .set((
                tasks::status.eq(status),
                tasks::evidence_link.eq(evidence),
                tasks::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if updated == 0 {
                let exists = tasks::table
                    .filter(tasks::id.eq(task_id.into_inner()))
                    .select(tasks::id)
                    .first::<uuid::Uuid>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)?;
                return match exists {
                    Some(_) => Err(TaskRepositoryError::AlreadyCompleted(task_id)),
                    None => Err(TaskRepositoryError::NotFound(task_id)),
                };
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count_all(&self) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let count = tasks::table
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn count_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let count = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        impact: task.impact().value(),
        effort: task.effort().value(),
        urgency: task.urgency().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        evidence_link: task.evidence_link().map(|link| link.as_str().to_owned()),
        due_date: task.due_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        impact: persisted_impact,
        effort: persisted_effort,
        urgency: persisted_urgency,
        status: persisted_status,
        evidence_link: persisted_evidence,
        due_date,
        created_at,
        updated_at,
    } = row;

    let impact = Impact::new(persisted_impact).map_err(TaskRepositoryError::persistence)?;
    let effort = Effort::new(persisted_effort).map_err(TaskRepositoryError::persistence)?;
    let urgency =
        Urgency::try_from(persisted_urgency.as_str()).map_err(TaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let evidence_link = persisted_evidence
        .map(EvidenceLink::new)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title,
        description,
        impact,
        effort,
        urgency,
        status,
        evidence_link,
        due_date,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}

/// `PostgreSQL`-backed subtask repository.
#[derive(Debug, Clone)]
pub struct PostgresSubtaskRepository {
    pool: TaskPgPool,
}

impl PostgresSubtaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> SubtaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> SubtaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(SubtaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(SubtaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl SubtaskRepository for PostgresSubtaskRepository {
    async fn store_batch(&self, batch: &[Subtask]) -> SubtaskRepositoryResult<()> {
        let rows = batch
            .iter()
            .map(to_new_subtask_row)
            .collect::<SubtaskRepositoryResult<Vec<NewSubtaskRow>>>()?;
        let ids: Vec<uuid::Uuid> = batch.iter().map(|s| s.id().into_inner()).collect();

        self.run_blocking(move |connection| {
            // This pre-check improves semantic error reporting but is not
            // relied on for correctness: the primary key still enforces
            // integrity, and the batch insert is a single statement.
            let existing = subtasks::table
                .filter(subtasks::id.eq_any(&ids))
                .select(subtasks::id)
                .first::<uuid::Uuid>(connection)
                .optional()
                .map_err(SubtaskRepositoryError::persistence)?;
            if let Some(id) = existing {
                return Err(SubtaskRepositoryError::DuplicateSubtask(
                    SubtaskId::from_uuid(id),
                ));
            }

            diesel::insert_into(subtasks::table)
                .values(&rows)
                .execute(connection)
                .map_err(SubtaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn list_by_parent(&self, parent_id: TaskId) -> SubtaskRepositoryResult<Vec<Subtask>> {
        self.run_blocking(move |connection| {
            let rows = subtasks::table
                .filter(subtasks::parent_id.eq(parent_id.into_inner()))
                .order(subtasks::created_at.asc())
                .select(SubtaskRow::as_select())
                .load::<SubtaskRow>(connection)
                .map_err(SubtaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_subtask).collect()
        })
        .await
    }
}

fn to_new_subtask_row(subtask: &Subtask) -> SubtaskRepositoryResult<NewSubtaskRow> {
    let duration_minutes =
        i32::try_from(subtask.duration_minutes()).map_err(SubtaskRepositoryError::persistence)?;
    Ok(NewSubtaskRow {
        id: subtask.id().into_inner(),
        parent_id: subtask.parent_id().into_inner(),
        title: subtask.title().to_owned(),
        duration_minutes,
        is_done: subtask.is_done(),
        created_at: subtask.created_at(),
    })
}

fn row_to_subtask(row: SubtaskRow) -> SubtaskRepositoryResult<Subtask> {
    let duration_minutes =
        u32::try_from(row.duration_minutes).map_err(SubtaskRepositoryError::persistence)?;
    let data = PersistedSubtaskData {
        id: SubtaskId::from_uuid(row.id),
        parent_id: TaskId::from_uuid(row.parent_id),
        title: row.title,
        duration_minutes,
        is_done: row.is_done,
        created_at: row.created_at,
    };
    Ok(Subtask::from_persisted(data))
}
