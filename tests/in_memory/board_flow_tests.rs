//! End-to-end board flows over the in-memory stores.

use super::helpers::{Stack, stack};
use rstest::rstest;
use taskboard::{
    board::{
        domain::{BoardView, FailureKind},
        services::{DeleteOutcome, DropOutcome},
    },
    config::BoardConfig,
    task::{
        domain::{TaskFilter, TaskStatus},
        services::{CreateTaskRequest, TaskLifecycleError},
    },
};

fn titles(view: &BoardView, status: TaskStatus) -> Vec<String> {
    view.column(status)
        .map(|column| column.cards.iter().map(|card| card.title.clone()).collect())
        .unwrap_or_default()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_shows_only_its_project(stack: Stack) -> Result<(), eyre::Report> {
    let apollo = stack.project("Apollo").await?;
    let gemini = stack.project("Gemini").await?;
    stack.task(apollo.id(), "Ours", TaskStatus::ToDo).await?;
    stack.task(gemini.id(), "Theirs", TaskStatus::ToDo).await?;

    let view = stack.board(apollo.id(), BoardConfig::default()).load().await;

    assert_eq!(titles(&view, TaskStatus::ToDo), vec!["Ours".to_owned()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moved_task_is_persisted(stack: Stack) -> Result<(), eyre::Report> {
    let project = stack.project("Apollo").await?;
    let task = stack.task(project.id(), "Ship", TaskStatus::ToDo).await?;
    let board = stack.board(project.id(), BoardConfig::default());
    board.load().await;

    let outcome = board.drop_task(task.id(), TaskStatus::Completed).await;

    assert!(matches!(outcome, DropOutcome::Moved(_)));
    let stored = stack
        .tasks
        .find_by_id(task.id())
        .await?
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    assert_eq!(stored.status(), TaskStatus::Completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cards_resolve_usernames_and_format_dates(stack: Stack) -> Result<(), eyre::Report> {
    let project = stack.project("Apollo").await?;
    let start = chrono::DateTime::parse_from_rfc3339("2024-05-01T08:00:00Z")?.with_timezone(&chrono::Utc);
    let request = CreateTaskRequest::new(project.id(), "Dated", 1)
        .with_assignee(2)
        .with_start_date(start)
        .with_points(8);
    stack.tasks.create_task(request).await?;
    let config = BoardConfig {
        date_format: "%Y-%m-%d".to_owned(),
        ..BoardConfig::default()
    };

    let view = stack.board(project.id(), config).load().await;

    let card = view
        .column(TaskStatus::ToDo)
        .and_then(|column| column.cards.first())
        .ok_or_else(|| eyre::eyre!("card missing"))?;
    assert_eq!(card.author.as_deref(), Some("ada"));
    assert_eq!(card.assignee.as_deref(), Some("grace"));
    assert_eq!(card.dates.as_deref(), Some("2024-05-01"));
    assert_eq!(card.points.as_deref(), Some("8 pts"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_twice_reports_rejection(stack: Stack) -> Result<(), eyre::Report> {
    let project = stack.project("Apollo").await?;
    let task = stack.task(project.id(), "Once", TaskStatus::UnderReview).await?;
    let board = stack.board(project.id(), BoardConfig::default());
    board.load().await;
    stack.tasks.delete_task(task.id()).await?;

    let outcome = board.delete_task(task.id()).await;

    let DeleteOutcome::Failed(notice) = outcome else {
        return Err(eyre::eyre!("expected a failed delete, got {outcome:?}"));
    };
    assert_eq!(notice.kind, FailureKind::Rejected);
    let refreshed = board.refresh().await;
    assert!(titles(&refreshed, TaskStatus::UnderReview).is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_removal_cascades_to_tasks(stack: Stack) -> Result<(), eyre::Report> {
    let project = stack.project("Doomed").await?;
    stack.task(project.id(), "First", TaskStatus::ToDo).await?;
    stack.task(project.id(), "Second", TaskStatus::Completed).await?;

    stack.projects.delete_project(project.id()).await?;

    let remaining = stack
        .tasks
        .list_tasks(TaskFilter::for_project(project.id()))
        .await?;
    assert!(remaining.is_empty());
    assert!(stack.projects.list_projects().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_for_removed_projects_are_refused(stack: Stack) -> Result<(), eyre::Report> {
    let project = stack.project("Gone").await?;
    stack.projects.delete_project(project.id()).await?;

    let result = stack.task(project.id(), "Late", TaskStatus::ToDo).await;

    let err = result.err().ok_or_else(|| eyre::eyre!("orphan task was stored"))?;
    let lifecycle = err
        .downcast_ref::<TaskLifecycleError>()
        .ok_or_else(|| eyre::eyre!("unexpected error: {err}"))?;
    assert!(matches!(
        lifecycle,
        TaskLifecycleError::ProjectNotFound(id) if *id == project.id()
    ));
    Ok(())
}
