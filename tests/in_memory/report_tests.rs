//! In-memory integration tests for reporting.

use std::sync::Arc;

use chrono::{Duration, Utc};
use missionboard::report::{ReportService, VelocityTrend};
use missionboard::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{CompleteTaskRequest, CreateTaskRequest, TaskBoardService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestBoard = TaskBoardService<InMemoryTaskRepository, DefaultClock>;
type TestReports = ReportService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn services() -> (TestBoard, TestReports) {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);
    (
        TaskBoardService::new(Arc::clone(&repository), Arc::clone(&clock)),
        ReportService::new(repository, clock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_tracks_completion_share(services: (TestBoard, TestReports)) {
    let (board, reports) = services;
    let done = board
        .create(CreateTaskRequest::new("Completed work", 5.0, 5.0, "medium"))
        .await
        .expect("creation should succeed");
    board
        .create(CreateTaskRequest::new("Open work", 5.0, 5.0, "medium"))
        .await
        .expect("creation should succeed");
    board
        .complete(
            CompleteTaskRequest::new(done.id())
                .with_evidence_link("http://example.com/pr/5")
                .with_peer_review(true),
        )
        .await
        .expect("completion should succeed");

    let stats = reports.dashboard().await.expect("dashboard should succeed");

    assert_eq!(stats.percent_complete, 50.0);
    assert_eq!(stats.velocity_trend, VelocityTrend::Stable);
    assert_eq!(stats.next_action, "Review Open work");
    assert_eq!(stats.blockers, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn standup_reports_overdue_completions_and_open_work(services: (TestBoard, TestReports)) {
    let (board, reports) = services;
    let shipped = board
        .create(
            CreateTaskRequest::new("Shipped feature", 5.0, 5.0, "medium")
                .with_due_date(Utc::now() - Duration::days(1)),
        )
        .await
        .expect("creation should succeed");
    board
        .create(CreateTaskRequest::new("Next feature", 5.0, 5.0, "medium"))
        .await
        .expect("creation should succeed");
    board
        .complete(
            CompleteTaskRequest::new(shipped.id())
                .with_evidence_link("http://example.com/pr/6")
                .with_peer_review(true),
        )
        .await
        .expect("completion should succeed");

    let summary = reports.standup().await.expect("standup should succeed");

    assert_eq!(summary.yesterday, vec!["Shipped feature".to_owned()]);
    assert_eq!(summary.today, vec!["Next feature".to_owned()]);
    assert_eq!(summary.impediments, vec!["None".to_owned()]);
}
