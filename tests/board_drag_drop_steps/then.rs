//! Then steps for board BDD scenarios.

use super::world::{BoardWorld, parse_status};
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{BoardView, ColumnView, FailureKind, NoticeOperation},
    services::{DeleteOutcome, DropOutcome},
};

fn column<'a>(world: &'a BoardWorld, label: &str) -> Result<&'a ColumnView, eyre::Report> {
    let status = parse_status(label)?;
    let view = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("board has not been rendered"))?;
    if let BoardView::Failed { message } = view {
        return Err(eyre::eyre!("board failed to load: {message}"));
    }
    view.column(status)
        .ok_or_else(|| eyre::eyre!("no {status} column on the board"))
}

#[then(r#"the "{status}" column lists "{titles}""#)]
fn column_lists(world: &BoardWorld, status: String, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    let listed = column(world, &status)?;
    let actual: Vec<&str> = listed.cards.iter().map(|card| card.title.as_str()).collect();

    eyre::ensure!(
        actual == expected,
        "expected {status} to list {expected:?}, found {actual:?}"
    );
    eyre::ensure!(listed.count == expected.len(), "column count mismatch");
    Ok(())
}

#[then(r#"the "{status}" column is empty"#)]
fn column_is_empty(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let shown = column(world, &status)?;
    eyre::ensure!(
        shown.cards.is_empty(),
        "expected {status} to be empty, found {} cards",
        shown.cards.len()
    );
    Ok(())
}

#[then("the move is acknowledged")]
fn move_is_acknowledged(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_drop {
        Some(DropOutcome::Moved(_)) => Ok(()),
        other => Err(eyre::eyre!("expected an acknowledged move, got {other:?}")),
    }
}

#[then("the drop changes nothing")]
fn drop_changes_nothing(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_drop {
        Some(DropOutcome::Unchanged) => Ok(()),
        other => Err(eyre::eyre!("expected an unchanged drop, got {other:?}")),
    }
}

#[then("the board reports a rejected status update")]
fn reports_rejected_update(world: &BoardWorld) -> Result<(), eyre::Report> {
    let notices = world.board()?.take_notices();
    let [notice] = notices.as_slice() else {
        return Err(eyre::eyre!("expected one notice, found {notices:?}"));
    };
    eyre::ensure!(
        notice.kind == FailureKind::Rejected && notice.operation == NoticeOperation::StatusUpdate,
        "unexpected notice {notice:?}"
    );
    Ok(())
}

#[then("the delete is acknowledged")]
fn delete_is_acknowledged(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_delete {
        Some(DeleteOutcome::Deleted) => Ok(()),
        other => Err(eyre::eyre!("expected an acknowledged delete, got {other:?}")),
    }
}
