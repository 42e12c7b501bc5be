//! In-memory integration tests for task breakdown.

use std::sync::Arc;

use missionboard::task::{
    adapters::memory::{InMemorySubtaskRepository, InMemoryTaskRepository},
    domain::TaskId,
    ports::TaskRepositoryError,
    services::{BreakdownError, BreakdownService, CreateTaskRequest, TaskBoardService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestBoard = TaskBoardService<InMemoryTaskRepository, DefaultClock>;
type TestBreakdown =
    BreakdownService<InMemoryTaskRepository, InMemorySubtaskRepository, DefaultClock>;

#[fixture]
fn services() -> (TestBoard, TestBreakdown) {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let subtasks = Arc::new(InMemorySubtaskRepository::new());
    let clock = Arc::new(DefaultClock);
    (
        TaskBoardService::new(Arc::clone(&tasks), Arc::clone(&clock)),
        BreakdownService::new(tasks, subtasks, clock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn breakdown_persists_plan_under_parent(services: (TestBoard, TestBreakdown)) {
    let (board, breakdown) = services;
    let parent = board
        .create(CreateTaskRequest::new("Launch checklist", 7.0, 3.0, "high"))
        .await
        .expect("creation should succeed");

    let created = breakdown
        .breakdown(parent.id())
        .await
        .expect("breakdown should succeed");
    let listed = breakdown
        .list_for_task(parent.id())
        .await
        .expect("listing should succeed");

    assert_eq!(created.len(), 3);
    assert_eq!(listed, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn breakdown_titles_reference_the_parent(services: (TestBoard, TestBreakdown)) {
    let (board, breakdown) = services;
    let parent = board
        .create(CreateTaskRequest::new("Migration plan", 7.0, 3.0, "high"))
        .await
        .expect("creation should succeed");

    let created = breakdown
        .breakdown(parent.id())
        .await
        .expect("breakdown should succeed");

    let titles: Vec<&str> = created.iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Research Migration plan",
            "Draft outline for Migration plan",
            "Review requirements",
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn breakdown_of_missing_task_is_rejected(services: (TestBoard, TestBreakdown)) {
    let (_, breakdown) = services;

    let result = breakdown.breakdown(TaskId::new()).await;

    assert!(matches!(
        result,
        Err(BreakdownError::Task(TaskRepositoryError::NotFound(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_unknown_parent_returns_empty(services: (TestBoard, TestBreakdown)) {
    let (_, breakdown) = services;

    let listed = breakdown
        .list_for_task(TaskId::new())
        .await
        .expect("listing should succeed");

    assert!(listed.is_empty());
}
