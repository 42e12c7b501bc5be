//! Diesel schema for task board persistence.

diesel::table! {
    /// Task records with scoring inputs and completion state.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Impact rating.
        impact -> Float8,
        /// Effort rating.
        effort -> Float8,
        /// Urgency tier.
        #[max_length = 50]
        urgency -> Varchar,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Evidence link recorded at completion.
        #[max_length = 2048]
        evidence_link -> Nullable<Varchar>,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Subtask records created by task breakdown.
    subtasks (id) {
        /// Subtask identifier.
        id -> Uuid,
        /// Parent task identifier.
        parent_id -> Uuid,
        /// Subtask title.
        #[max_length = 255]
        title -> Varchar,
        /// Estimated duration in minutes.
        duration_minutes -> Int4,
        /// Completion flag.
        is_done -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(subtasks -> tasks (parent_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, subtasks);
