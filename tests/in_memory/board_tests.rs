//! In-memory integration tests for task creation and priority listing.

use std::sync::Arc;

use missionboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskStatus},
    services::{CreateTaskRequest, TaskBoardError, TaskBoardService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestBoard = TaskBoardService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn board() -> TestBoard {
    TaskBoardService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_start_pending(board: TestBoard) {
    let task = board
        .create(CreateTaskRequest::new("New work item", 4.0, 2.0, "high"))
        .await
        .expect("creation should succeed");

    assert_eq!(task.status(), TaskStatus::Pending);
    assert!(task.evidence_link().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_returns_weighted_impact_density_order(board: TestBoard) {
    // A = impact 5, effort 5, medium -> 1.0; B = impact 10, effort 2,
    // critical -> 7.5. The listing must return [B, A].
    let task_a = board
        .create(CreateTaskRequest::new("Task A", 5.0, 5.0, "medium"))
        .await
        .expect("first creation should succeed");
    let task_b = board
        .create(CreateTaskRequest::new("Task B", 10.0, 2.0, "critical"))
        .await
        .expect("second creation should succeed");

    let ranked = board
        .list_by_priority()
        .await
        .expect("listing should succeed");

    let ids: Vec<_> = ranked.iter().map(|s| s.task().id()).collect();
    assert_eq!(ids, vec![task_b.id(), task_a.id()]);
    let scores: Vec<f64> = ranked.iter().map(|s| s.priority_score().value()).collect();
    assert_eq!(scores, vec![7.5, 1.0]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_does_not_mutate_stored_tasks(board: TestBoard) -> eyre::Result<()> {
    let created = board
        .create(CreateTaskRequest::new("Stable record", 9.0, 3.0, "low"))
        .await
        .expect("creation should succeed");

    let _ = board.list_by_priority().await?;
    let _ = board.list_by_priority().await?;

    let stored = board
        .find_by_id(created.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;
    eyre::ensure!(stored == created, "listing must not rewrite stored rows");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_scoring_inputs_reject_the_whole_request(board: TestBoard) {
    let zero_effort = board
        .create(CreateTaskRequest::new("Divide by zero", 5.0, 0.0, "low"))
        .await;
    assert!(matches!(
        zero_effort,
        Err(TaskBoardError::Domain(TaskDomainError::InvalidEffort(_)))
    ));

    let unknown_urgency = board
        .create(CreateTaskRequest::new("Unknown tier", 5.0, 2.0, "urgent"))
        .await;
    assert!(matches!(
        unknown_urgency,
        Err(TaskBoardError::Domain(TaskDomainError::UnknownUrgency(_)))
    ));

    let listed = board
        .list_by_priority()
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty(), "rejected requests must not persist");
}
