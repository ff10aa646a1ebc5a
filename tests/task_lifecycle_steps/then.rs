//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use tasktrack::task::{
    domain::TaskStatus,
    services::{GetTaskRequest, ListTasksRequest, TaskErrorKind},
};

fn expect_message(world: &TaskLifecycleWorld, expected: &str) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    match result {
        Ok(message) if message == expected => Ok(()),
        other => Err(eyre::eyre!("expected '{expected}', got {other:?}")),
    }
}

#[then("the task is created successfully")]
fn task_created(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    expect_message(world, "create task successfully")
}

#[then("the update succeeds")]
fn update_succeeds(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    expect_message(world, "update task successfully")
}

#[then("the deletion succeeds")]
fn deletion_succeeds(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    expect_message(world, "delete task successfully")
}

#[then("the request is rejected as forbidden")]
fn rejected_as_forbidden(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    match result {
        Err(err) if err.kind() == TaskErrorKind::Forbidden => Ok(()),
        other => Err(eyre::eyre!("expected forbidden error, got {other:?}")),
    }
}

#[then(r#""{handle}" sees the task with status "{status}" owned by "{first_name}""#)]
fn sees_task(
    world: &TaskLifecycleWorld,
    handle: String,
    status: String,
    first_name: String,
) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let requester = world.requester(&handle)?;
    let view = run_async(
        world
            .service
            .get(&requester, GetTaskRequest::new(world.task_id()?)),
    )
    .wrap_err("read task in scenario")?;

    eyre::ensure!(
        view.status == expected_status,
        "expected status {expected_status}, found {}",
        view.status
    );
    let owner = view
        .user
        .ok_or_else(|| eyre::eyre!("task view has no owner profile"))?;
    eyre::ensure!(
        owner.first_name == first_name,
        "expected owner {first_name}, found {}",
        owner.first_name
    );
    Ok(())
}

#[then(r#"reading the task as "{handle}" reports not found"#)]
fn read_reports_not_found(
    world: &TaskLifecycleWorld,
    handle: String,
) -> Result<(), eyre::Report> {
    let requester = world.requester(&handle)?;
    let result = run_async(
        world
            .service
            .get(&requester, GetTaskRequest::new(world.task_id()?)),
    );
    match result {
        Err(err) if err.kind() == TaskErrorKind::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected not found, got {other:?}")),
    }
}

#[then(r#"listing page {page:u32} as "{handle}" returns {count:usize} tasks"#)]
fn listing_returns(
    world: &TaskLifecycleWorld,
    page: u32,
    handle: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let requester = world.requester(&handle)?;
    let listing = run_async(world.service.list(&requester, ListTasksRequest::new(page)))
        .wrap_err("list tasks in scenario")?;
    eyre::ensure!(
        listing.items.len() == count,
        "expected {count} tasks, found {}",
        listing.items.len()
    );
    Ok(())
}

#[then("the listing contains {count:usize} tasks")]
fn listing_contains(world: &TaskLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;
    eyre::ensure!(
        listing.items.len() == count,
        "expected {count} tasks, found {}",
        listing.items.len()
    );
    Ok(())
}

#[then("the listing reports a total of {total:u64}")]
fn listing_total(world: &TaskLifecycleWorld, total: u64) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;
    eyre::ensure!(
        listing.total == total,
        "expected total {total}, found {}",
        listing.total
    );
    Ok(())
}

#[then("the listing has no next page")]
fn listing_has_no_next_page(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing"))?;
    eyre::ensure!(!listing.has_next, "expected the last page");
    Ok(())
}
