//! Then steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use missionboard::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskBoardError,
};
use rstest_bdd_macros::then;

#[then("the completion succeeds")]
fn completion_succeeds(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_completion_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;

    if result.is_err() {
        return Err(eyre::eyre!("expected completion to succeed, got {result:?}"));
    }
    Ok(())
}

#[then("the completion fails with the done definition message")]
fn completion_fails_with_gate_message(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_completion_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;

    let Err(err) = result else {
        return Err(eyre::eyre!("expected completion to fail, got {result:?}"));
    };
    if !matches!(
        err,
        TaskBoardError::Domain(TaskDomainError::DoneDefinitionNotMet)
    ) {
        return Err(eyre::eyre!("expected DoneDefinitionNotMet, got {err:?}"));
    }
    if err.to_string() != "Done Definition not met: Missing evidence or peer review." {
        return Err(eyre::eyre!("unexpected gate message: {err}"));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskCompletionWorld, status: String) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;
    let stored = run_async(world.service.find_by_id(task.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("task not found in storage"))?;

    if stored.status() != expected_status {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected_status.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}
