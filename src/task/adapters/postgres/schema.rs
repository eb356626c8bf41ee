//! Diesel schema for calendar task persistence.

diesel::table! {
    /// One row per task occurrence.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Task title.
        title -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Completion timestamp, set exactly when `completed` is true.
        completed_at -> Nullable<Timestamptz>,
        /// Calendar day the task occurs on.
        task_day -> Date,
        /// Free-form time label.
        task_day_time -> Text,
        /// Series membership flag.
        is_recurring -> Bool,
        /// Number of occurrences in the series.
        week_count -> Int4,
        /// Series original for generated occurrences.
        original_task_id -> Nullable<Int8>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
