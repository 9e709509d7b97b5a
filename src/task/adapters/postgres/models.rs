//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status label.
    pub status: String,
    /// Optional priority label.
    pub priority: Option<String>,
    /// Optional raw tag list.
    pub tags: Option<String>,
    /// Optional start date.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional point estimate.
    pub points: Option<i32>,
    /// Author user identifier.
    pub author_user_id: i64,
    /// Optional assignee user identifier.
    pub assigned_user_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project identifier.
    pub project_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status label.
    pub status: String,
    /// Optional priority label.
    pub priority: Option<String>,
    /// Optional raw tag list.
    pub tags: Option<String>,
    /// Optional start date.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional point estimate.
    pub points: Option<i32>,
    /// Author user identifier.
    pub author_user_id: i64,
    /// Optional assignee user identifier.
    pub assigned_user_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model covering every mutable task column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Status label.
    pub status: String,
    /// Optional priority label.
    pub priority: Option<String>,
    /// Optional raw tag list.
    pub tags: Option<String>,
    /// Optional start date.
    pub start_date: Option<DateTime<Utc>>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional point estimate.
    pub points: Option<i32>,
    /// Optional assignee user identifier.
    pub assigned_user_id: Option<i64>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
