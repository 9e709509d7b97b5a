//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records shown on project boards.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Insertion sequence, used for listing order.
        seq -> Int8,
        /// Owning project identifier.
        project_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Status label, one board column.
        #[max_length = 50]
        status -> Varchar,
        /// Optional priority label.
        #[max_length = 50]
        priority -> Nullable<Varchar>,
        /// Optional raw comma-separated tag list.
        tags -> Nullable<Text>,
        /// Optional start date.
        start_date -> Nullable<Timestamptz>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Optional point estimate.
        points -> Nullable<Int4>,
        /// Author user identifier.
        author_user_id -> Int8,
        /// Optional assignee user identifier.
        assigned_user_id -> Nullable<Int8>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
