//! Card rendering tests.

use super::fixtures::task;
use crate::board::domain::{BadgeTone, PriorityBadge, TaskCard, format_date_range};
use crate::project::domain::ProjectId;
use crate::task::domain::{
    PersistedTaskData, Task, TaskDraft, TaskPriority, TaskStatus, UserId,
};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

const FORMAT: &str = "%m/%d/%Y";

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid date")
}

#[fixture]
fn detailed() -> Task {
    let draft = TaskDraft::new(ProjectId::new(), "Polish card", UserId::new(1).expect("id"))
        .expect("valid draft")
        .with_description("Tighten spacing")
        .with_priority(TaskPriority::Urgent)
        .with_tags("ui, design")
        .with_start_date(date(2024, 1, 5))
        .with_due_date(date(2024, 2, 1))
        .with_points(5)
        .expect("valid points")
        .with_assignee(UserId::new(2).expect("id"));
    Task::new(draft, &DefaultClock)
}

#[rstest]
fn card_shows_every_present_field(detailed: Task) {
    let card = TaskCard::render(
        &detailed,
        Some("ada".to_owned()),
        Some("grace".to_owned()),
        FORMAT,
        false,
    );

    assert_eq!(card.title, "Polish card");
    assert_eq!(
        card.priority,
        Some(PriorityBadge {
            label: "Urgent",
            tone: BadgeTone::Red
        })
    );
    assert_eq!(card.tags, vec!["ui".to_owned(), "design".to_owned()]);
    assert_eq!(card.dates.as_deref(), Some("01/05/2024 - 02/01/2024"));
    assert_eq!(card.description.as_deref(), Some("Tighten spacing"));
    assert_eq!(card.points.as_deref(), Some("5 pts"));
    assert_eq!(card.author.as_deref(), Some("ada"));
    assert_eq!(card.assignee.as_deref(), Some("grace"));
    assert!(card.can_delete);
}

#[rstest]
fn bare_card_omits_optional_sections() {
    let bare = task(ProjectId::new(), "Bare", TaskStatus::ToDo);

    let card = TaskCard::render(&bare, None, None, FORMAT, false);

    assert_eq!(card.priority, None);
    assert!(card.tags.is_empty());
    assert_eq!(card.dates, None);
    assert_eq!(card.points, None);
}

#[rstest]
fn in_flight_card_disables_delete(detailed: Task) {
    let card = TaskCard::render(&detailed, None, None, FORMAT, true);

    assert!(card.in_flight);
    assert!(!card.can_delete);
}

#[rstest]
#[case(TaskPriority::Urgent, BadgeTone::Red)]
#[case(TaskPriority::High, BadgeTone::Yellow)]
#[case(TaskPriority::Medium, BadgeTone::Green)]
#[case(TaskPriority::Low, BadgeTone::Blue)]
#[case(TaskPriority::Backlog, BadgeTone::Gray)]
fn badge_tone_follows_priority(#[case] priority: TaskPriority, #[case] tone: BadgeTone) {
    assert_eq!(PriorityBadge::from(priority).tone, tone);
}

#[rstest]
fn single_date_renders_without_separator() {
    assert_eq!(
        format_date_range(None, Some(date(2024, 3, 9)), FORMAT).as_deref(),
        Some("03/09/2024")
    );
    assert_eq!(
        format_date_range(Some(date(2024, 3, 9)), None, "%Y-%m-%d").as_deref(),
        Some("2024-03-09")
    );
}

#[rstest]
fn zero_points_still_render() {
    let mut data = persisted();
    data.points = Some(0);

    let card = TaskCard::render(&Task::from_persisted(data), None, None, FORMAT, false);

    assert_eq!(card.points.as_deref(), Some("0 pts"));
}

fn persisted() -> PersistedTaskData {
    let timestamp = date(2024, 1, 1);
    PersistedTaskData {
        id: crate::task::domain::TaskId::new(),
        project_id: ProjectId::new(),
        title: "Stored".to_owned(),
        description: None,
        status: TaskStatus::Completed,
        priority: None,
        tags: None,
        start_date: None,
        due_date: None,
        points: None,
        author_id: UserId::new(3).expect("id"),
        assignee_id: None,
        created_at: timestamp,
        updated_at: timestamp,
    }
}
