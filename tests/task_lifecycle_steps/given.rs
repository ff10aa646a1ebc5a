//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::{
    domain::{SimpleUser, UserId},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

#[given(r#"a user "{handle}" named "{first_name}" "{last_name}""#)]
fn registered_user(
    world: &mut TaskLifecycleWorld,
    handle: String,
    first_name: String,
    last_name: String,
) -> Result<(), eyre::Report> {
    let user_id = UserId::from_raw(world.next_user_id)?;
    world.next_user_id += 1;
    world
        .users
        .insert(SimpleUser::new(user_id, first_name, last_name))?;
    world.handles.insert(handle, user_id);
    Ok(())
}

#[given(r#""{handle}" has created a task titled "{title}""#)]
fn task_created(
    world: &mut TaskLifecycleWorld,
    handle: String,
    title: String,
) -> Result<(), eyre::Report> {
    let requester = world.requester(&handle)?;
    let created = run_async(
        world
            .service
            .create(&requester, CreateTaskRequest::new(title, "scenario task")),
    )
    .wrap_err("create task for scenario setup")?;
    world.current_task = Some(created.id.to_string());
    Ok(())
}

#[given(r#""{handle}" has created {count:u32} tasks"#)]
fn many_tasks_created(
    world: &mut TaskLifecycleWorld,
    handle: String,
    count: u32,
) -> Result<(), eyre::Report> {
    let requester = world.requester(&handle)?;
    for index in 1..=count {
        let request = CreateTaskRequest::new(format!("Task {index}"), "bulk");
        run_async(world.service.create(&requester, request))
            .wrap_err_with(|| format!("create task {index} for scenario setup"))?;
    }
    Ok(())
}

#[given(r#""{handle}" has updated the task status to "{status}""#)]
fn task_status_updated(
    world: &mut TaskLifecycleWorld,
    handle: String,
    status: String,
) -> Result<(), eyre::Report> {
    let requester = world.requester(&handle)?;
    let request = UpdateTaskRequest::new(world.task_id()?).with_status(status);
    run_async(world.service.update(&requester, request))
        .wrap_err("update task status for scenario setup")?;
    Ok(())
}
