//! Render model for a single task card.

use crate::task::domain::{Task, TaskId, TaskPriority};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Colour family of a priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    /// Urgent.
    Red,
    /// High.
    Yellow,
    /// Medium.
    Green,
    /// Low.
    Blue,
    /// Backlog.
    Gray,
}

/// Priority badge shown in the card header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityBadge {
    /// Badge text.
    pub label: &'static str,
    /// Badge colour.
    pub tone: BadgeTone,
}

impl From<TaskPriority> for PriorityBadge {
    fn from(priority: TaskPriority) -> Self {
        let tone = match priority {
            TaskPriority::Urgent => BadgeTone::Red,
            TaskPriority::High => BadgeTone::Yellow,
            TaskPriority::Medium => BadgeTone::Green,
            TaskPriority::Low => BadgeTone::Blue,
            TaskPriority::Backlog => BadgeTone::Gray,
        };
        Self {
            label: priority.as_str(),
            tone,
        }
    }
}

/// Everything a board needs to draw one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    /// Task rendered by this card.
    pub task_id: TaskId,
    /// Task title.
    pub title: String,
    /// Priority badge, present only when the task has a priority.
    pub priority: Option<PriorityBadge>,
    /// Tag chips.
    pub tags: Vec<String>,
    /// Formatted date range, present when either date is set.
    pub dates: Option<String>,
    /// Description text.
    pub description: Option<String>,
    /// Point estimate label such as `"5 pts"`.
    pub points: Option<String>,
    /// Author username, when the directory knows it.
    pub author: Option<String>,
    /// Assignee username, when assigned and known.
    pub assignee: Option<String>,
    /// Whether the task is being dragged or awaits a request.
    pub in_flight: bool,
    /// Whether the delete affordance is active.
    pub can_delete: bool,
}

impl TaskCard {
    /// Builds the card for `task`.
    ///
    /// `author` and `assignee` are usernames already resolved by the caller;
    /// the card never looks users up itself.
    #[must_use]
    pub fn render(
        task: &Task,
        author: Option<String>,
        assignee: Option<String>,
        date_format: &str,
        in_flight: bool,
    ) -> Self {
        Self {
            task_id: task.id(),
            title: task.title().to_owned(),
            priority: task.priority().map(PriorityBadge::from),
            tags: task.tag_list().into_iter().map(str::to_owned).collect(),
            dates: format_date_range(task.start_date(), task.due_date(), date_format),
            description: task.description().map(str::to_owned),
            points: task.points().map(|points| format!("{points} pts")),
            author,
            assignee,
            in_flight,
            can_delete: !in_flight,
        }
    }
}

/// Formats the dates that are present.
///
/// Both dates render as `"<start> - <due>"`; a single date renders alone
/// with no separator; no dates yield `None`.
#[must_use]
pub fn format_date_range(
    start: Option<DateTime<Utc>>,
    due: Option<DateTime<Utc>>,
    date_format: &str,
) -> Option<String> {
    let start_label = start.map(|date| format_date(date, date_format));
    let due_label = due.map(|date| format_date(date, date_format));
    match (start_label, due_label) {
        (Some(start_text), Some(due_text)) => Some(format!("{start_text} - {due_text}")),
        (Some(single), None) | (None, Some(single)) => Some(single),
        (None, None) => None,
    }
}

fn format_date(date: DateTime<Utc>, date_format: &str) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", date.format(date_format)).is_err() {
        return date.date_naive().to_string();
    }
    rendered
}
