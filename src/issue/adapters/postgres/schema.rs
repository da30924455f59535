//! Diesel schema for issue persistence.

diesel::table! {
    /// Issue records with their status history and comments.
    issues (issue_id) {
        /// Opaque issue identifier.
        #[max_length = 64]
        issue_id -> Varchar,
        /// Issue category.
        issue_type -> Text,
        /// Free-form description.
        description -> Text,
        /// Free-form location.
        location -> Text,
        /// Priority level.
        #[max_length = 16]
        priority -> Varchar,
        /// Reporter contact address.
        email -> Nullable<Text>,
        /// Current status.
        status -> Text,
        /// Current assignee.
        assigned_to -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Status history entries, oldest first.
        status_history -> Jsonb,
        /// Comment entries, oldest first.
        comments -> Jsonb,
    }
}
