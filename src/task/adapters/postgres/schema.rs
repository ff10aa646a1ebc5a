//! Diesel schema for task persistence.

diesel::table! {
    /// Task records owned by users of the user service.
    tasks (id) {
        /// Sequential task identifier.
        id -> Int4,
        /// Owning user identifier.
        user_id -> Int4,
        /// Task title.
        #[max_length = 256]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Task lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
