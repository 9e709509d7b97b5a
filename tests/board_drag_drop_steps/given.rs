//! Given steps for board BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::{project::services::CreateProjectRequest, task::services::CreateTaskRequest};

#[given(r#"a project named "{name}""#)]
fn project_named(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let project = run_async(world.projects.create_project(CreateProjectRequest::new(name)))
        .wrap_err("create project for board scenario")?;
    world.project = Some(project);
    Ok(())
}

#[given(r#"a task "{title}" with status "{status}""#)]
fn task_with_status(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed_status = parse_status(&status)?;
    let project_id = world.project()?.id();
    let request = CreateTaskRequest::new(project_id, title.clone(), 1).with_status(parsed_status);
    let created = run_async(world.tasks.create_task(request))
        .wrap_err("create task for board scenario")?;
    world.task_ids.insert(title, created.id());
    Ok(())
}

#[given("the board has been loaded")]
fn board_has_been_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = run_async(world.build_board()?.load());
    world.last_view = Some(view);
    Ok(())
}

#[given(r#""{title}" has been removed behind the board's back"#)]
fn removed_behind_board(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    run_async(world.tasks.delete_task(task_id)).wrap_err("delete task directly")?;
    Ok(())
}
