//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasktrack::task::services::{
    CreateTaskRequest, DeleteTaskRequest, ListTasksRequest, UpdateTaskRequest,
};

#[when(r#""{handle}" creates a task titled "{title}" described as "{description}""#)]
fn create_task(
    world: &mut TaskLifecycleWorld,
    handle: String,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let requester = world.requester(&handle)?;
    let result = run_async(
        world
            .service
            .create(&requester, CreateTaskRequest::new(title, description)),
    );
    if let Ok(ref created) = result {
        world.current_task = Some(created.id.to_string());
    }
    world.last_result = Some(result.map(|created| created.message));
    Ok(())
}

#[when(r#""{handle}" updates the task status to "{status}""#)]
fn update_status(
    world: &mut TaskLifecycleWorld,
    handle: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = UpdateTaskRequest::new(world.task_id()?).with_status(status);
    apply_update(world, &handle, request)
}

#[when(r#""{handle}" updates the task title to "{title}""#)]
fn update_title(
    world: &mut TaskLifecycleWorld,
    handle: String,
    title: String,
) -> Result<(), eyre::Report> {
    let request = UpdateTaskRequest::new(world.task_id()?).with_title(title);
    apply_update(world, &handle, request)
}

fn apply_update(
    world: &mut TaskLifecycleWorld,
    handle: &str,
    request: UpdateTaskRequest,
) -> Result<(), eyre::Report> {
    let requester = world.requester(handle)?;
    let result = run_async(world.service.update(&requester, request));
    world.last_result = Some(result.map(|ack| ack.message));
    Ok(())
}

#[when(r#""{handle}" deletes the task"#)]
fn delete_task(world: &mut TaskLifecycleWorld, handle: String) -> Result<(), eyre::Report> {
    let requester = world.requester(&handle)?;
    let request = DeleteTaskRequest::new(world.task_id()?);
    let result = run_async(world.service.delete(&requester, request));
    world.last_result = Some(result.map(|ack| ack.message));
    Ok(())
}

#[when(r#""{handle}" lists page {page:u32} with limit {limit:u32}"#)]
fn list_page(
    world: &mut TaskLifecycleWorld,
    handle: String,
    page: u32,
    limit: u32,
) -> Result<(), eyre::Report> {
    let requester = world.requester(&handle)?;
    let request = ListTasksRequest::new(page).with_limit(limit);
    let listing = run_async(world.service.list(&requester, request))
        .wrap_err("list tasks in scenario")?;
    world.last_listing = Some(listing);
    Ok(())
}
