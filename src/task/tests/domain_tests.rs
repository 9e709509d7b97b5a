//! Domain-focused tests for task construction and status changes.

use crate::project::domain::ProjectId;
use crate::task::domain::{
    Task, TaskDomainError, TaskDraft, TaskFilter, TaskPriority, TaskStatus, UserId, parse_tags,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
fn author() -> UserId {
    UserId::new(1).expect("valid user id")
}

#[rstest]
fn draft_rejects_blank_title(author: UserId) {
    let result = TaskDraft::new(ProjectId::new(), "   ", author);
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn draft_trims_title_and_defaults_to_to_do(clock: DefaultClock, author: UserId) {
    let draft = TaskDraft::new(ProjectId::new(), "  Write release notes ", author)
        .expect("valid draft");
    let task = Task::new(draft, &clock);

    assert_eq!(task.title(), "Write release notes");
    assert_eq!(task.status(), TaskStatus::ToDo);
    assert_eq!(task.created_at(), task.updated_at());
}

#[rstest]
#[case(0)]
#[case(-4)]
fn user_id_rejects_non_positive_values(#[case] value: i64) {
    assert_eq!(UserId::new(value), Err(TaskDomainError::InvalidUserId(value)));
}

#[rstest]
fn draft_rejects_negative_points(author: UserId) {
    let result = TaskDraft::new(ProjectId::new(), "Estimate", author)
        .expect("valid draft")
        .with_points(-1);
    assert_eq!(result, Err(TaskDomainError::InvalidPoints(-1)));
}

#[rstest]
#[case(0)]
#[case(13)]
fn draft_keeps_non_negative_points(clock: DefaultClock, author: UserId, #[case] points: i32) {
    let draft = TaskDraft::new(ProjectId::new(), "Estimate", author)
        .expect("valid draft")
        .with_description("sized")
        .with_points(points)
        .expect("non-negative points are accepted");
    let task = Task::new(draft, &clock);

    assert_eq!(task.points(), Some(points));
    assert_eq!(task.description(), Some("sized"));
}

#[rstest]
#[case("To Do", TaskStatus::ToDo)]
#[case("work in progress", TaskStatus::WorkInProgress)]
#[case(" Under Review ", TaskStatus::UnderReview)]
#[case("COMPLETED", TaskStatus::Completed)]
fn status_parses_labels_case_insensitively(#[case] label: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(label), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_label() {
    let err = TaskStatus::try_from("Blocked").expect_err("unknown label");
    assert_eq!(err.to_string(), "unknown task status: Blocked");
}

#[rstest]
fn status_serializes_with_display_labels() {
    let json = serde_json::to_string(&TaskStatus::WorkInProgress).expect("serializes");
    assert_eq!(json, "\"Work In Progress\"");
}

#[rstest]
fn status_order_is_fixed() {
    let labels: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.as_str()).collect();
    assert_eq!(
        labels,
        vec!["To Do", "Work In Progress", "Under Review", "Completed"]
    );
}

#[rstest]
#[case("urgent", TaskPriority::Urgent)]
#[case("Backlog", TaskPriority::Backlog)]
fn priority_parses_labels(#[case] label: &str, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::try_from(label), Ok(expected));
}

#[rstest]
#[case(None, vec![])]
#[case(Some(""), vec![])]
#[case(Some("ui"), vec!["ui"])]
#[case(Some("ui, backend ,,db"), vec!["ui", "backend", "db"])]
fn tags_split_on_commas(#[case] raw: Option<&str>, #[case] expected: Vec<&str>) {
    assert_eq!(parse_tags(raw), expected);
}

#[rstest]
fn change_status_reports_whether_anything_changed(clock: DefaultClock, author: UserId) {
    let draft = TaskDraft::new(ProjectId::new(), "Review PR", author).expect("valid draft");
    let mut task = Task::new(draft, &clock);
    let created = task.updated_at();

    assert!(!task.change_status(TaskStatus::ToDo, &clock));
    assert_eq!(task.updated_at(), created);

    assert!(task.change_status(TaskStatus::Completed, &clock));
    assert_eq!(task.status(), TaskStatus::Completed);
    assert!(task.updated_at() >= created);
}

#[rstest]
fn filter_matches_only_its_project(clock: DefaultClock, author: UserId) {
    let project_id = ProjectId::new();
    let draft = TaskDraft::new(project_id, "Scoped", author).expect("valid draft");
    let task = Task::new(draft, &clock);

    assert!(TaskFilter::for_project(project_id).matches(&task));
    assert!(!TaskFilter::for_project(ProjectId::new()).matches(&task));
}
