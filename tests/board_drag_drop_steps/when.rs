//! When steps for board BDD scenarios.

use super::world::{BoardWorld, parse_status, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the board is loaded")]
fn board_is_loaded(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = run_async(world.build_board()?.load());
    world.last_view = Some(view);
    Ok(())
}

#[when("the board is refreshed")]
fn board_is_refreshed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = run_async(world.board()?.refresh());
    world.last_view = Some(view);
    Ok(())
}

#[when(r#""{title}" is dragged onto "{status}""#)]
fn dragged_onto(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let task_id = world.task_id(&title)?;
    let board = world.board()?;

    eyre::ensure!(board.begin_drag(task_id), "drag of {title:?} was refused");
    eyre::ensure!(
        board.drag_over(task_id, target),
        "hover of {title:?} was refused"
    );
    let outcome = run_async(board.drop_task(task_id, target));
    let view = board.view();

    world.last_drop = Some(outcome);
    world.last_view = Some(view);
    Ok(())
}

#[when(r#""{title}" is deleted from the board"#)]
fn deleted_from_board(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&title)?;
    let board = world.board()?;
    let outcome = run_async(board.delete_task(task_id));
    let view = board.view();

    world.last_delete = Some(outcome);
    world.last_view = Some(view);
    Ok(())
}

#[when("the project is deleted")]
fn project_is_deleted(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    run_async(world.projects.delete_project(project_id)).wrap_err("delete scenario project")?;
    Ok(())
}
