//! In-memory integration tests for completion gating and races.

use std::sync::Arc;

use missionboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskStatus},
    services::{CompleteTaskRequest, CreateTaskRequest, TaskBoardError, TaskBoardService},
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
async fn completion_persists_status_and_evidence(board: TestBoard) -> eyre::Result<()> {
    let task = board
        .create(CreateTaskRequest::new("Deliverable", 5.0, 5.0, "medium"))
        .await
        .expect("creation should succeed");

    board
        .complete(
            CompleteTaskRequest::new(task.id())
                .with_evidence_link("http://example.com/pr/11")
                .with_peer_review(true),
        )
        .await
        .expect("completion should succeed");

    let stored = board
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;
    eyre::ensure!(stored.status() == TaskStatus::Completed);
    eyre::ensure!(
        stored.evidence_link().map(|link| link.as_str()) == Some("http://example.com/pr/11")
    );
    Ok(())
}

#[rstest]
#[case(None, Some(true))]
#[case(Some(""), Some(true))]
#[case(Some("http://example.com/pr/11"), Some(false))]
#[case(Some("http://example.com/pr/11"), None)]
#[tokio::test(flavor = "multi_thread")]
async fn incomplete_checklists_are_rejected_without_mutation(
    board: TestBoard,
    #[case] evidence_link: Option<&str>,
    #[case] peer_review: Option<bool>,
) -> eyre::Result<()> {
    let task = board
        .create(CreateTaskRequest::new("Gated work", 5.0, 5.0, "medium"))
        .await
        .expect("creation should succeed");

    let mut request = CompleteTaskRequest::new(task.id());
    if let Some(link) = evidence_link {
        request = request.with_evidence_link(link);
    }
    if let Some(checked) = peer_review {
        request = request.with_peer_review(checked);
    }

    let result = board.complete(request).await;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskBoardError::Domain(TaskDomainError::DoneDefinitionNotMet))
        ),
        "expected DoneDefinitionNotMet, got {result:?}"
    );

    let stored = board
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task should exist"))?;
    eyre::ensure!(stored.status() == TaskStatus::Pending);
    eyre::ensure!(stored.evidence_link().is_none());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn gate_failure_carries_fixed_message(board: TestBoard) -> eyre::Result<()> {
    let task = board
        .create(CreateTaskRequest::new("Message check", 5.0, 5.0, "medium"))
        .await
        .expect("creation should succeed");

    let err = board
        .complete(CompleteTaskRequest::new(task.id()))
        .await
        .expect_err("empty checklist must fail");

    eyre::ensure!(
        err.to_string() == "Done Definition not met: Missing evidence or peer review."
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn racing_completions_allow_exactly_one_winner(board: TestBoard) {
    let task = board
        .create(CreateTaskRequest::new("Contended task", 5.0, 5.0, "medium"))
        .await
        .expect("creation should succeed");
    let request = CompleteTaskRequest::new(task.id())
        .with_evidence_link("http://example.com/pr/11")
        .with_peer_review(true);

    let (first, second) = tokio::join!(
        board.complete(request.clone()),
        board.complete(request.clone()),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one completion may win the race");
}
