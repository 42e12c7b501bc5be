//! When steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use missionboard::task::services::CompleteTaskRequest;
use rstest_bdd_macros::when;

fn created_task_id(
    world: &TaskCompletionWorld,
) -> Result<missionboard::task::domain::TaskId, eyre::Report> {
    world
        .last_created_task
        .as_ref()
        .map(missionboard::task::domain::Task::id)
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
}

fn record_completion(world: &mut TaskCompletionWorld, request: CompleteTaskRequest) {
    let result = run_async(world.service.complete(request));
    if let Ok(ref updated) = result {
        world.last_created_task = Some(updated.clone());
    }
    world.last_completion_result = Some(result);
}

#[when(r#"the task is completed with evidence "{evidence}" and peer review confirmed"#)]
fn complete_with_full_checklist(
    world: &mut TaskCompletionWorld,
    evidence: String,
) -> Result<(), eyre::Report> {
    let task_id = created_task_id(world)?;
    let request = CompleteTaskRequest::new(task_id)
        .with_evidence_link(evidence)
        .with_peer_review(true);
    record_completion(world, request);
    Ok(())
}

#[when(r#"the task is completed with evidence "{evidence}" and peer review unconfirmed"#)]
fn complete_without_review(
    world: &mut TaskCompletionWorld,
    evidence: String,
) -> Result<(), eyre::Report> {
    let task_id = created_task_id(world)?;
    let request = CompleteTaskRequest::new(task_id)
        .with_evidence_link(evidence)
        .with_peer_review(false);
    record_completion(world, request);
    Ok(())
}

#[when("the task is completed with peer review only")]
fn complete_without_evidence(world: &mut TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task_id = created_task_id(world)?;
    let request = CompleteTaskRequest::new(task_id).with_peer_review(true);
    record_completion(world, request);
    Ok(())
}
