//! Given steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use eyre::WrapErr;
use missionboard::task::services::CreateTaskRequest;
use rstest_bdd_macros::given;

#[given(r#"a pending task "{title}""#)]
fn pending_task(world: &mut TaskCompletionWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(CreateTaskRequest::new(title, 5.0, 5.0, "medium")),
    )
    .wrap_err("create task for completion scenario")?;
    world.last_created_task = Some(created);
    Ok(())
}
