//! User-authored workout entries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A workout a user wrote down by hand.
///
/// Duration and calories are free-form text as entered ("30 min",
/// "250"); they are only displayed, never aggregated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomWorkout {
    /// Unique identifier
    pub id: u64,

    /// Owner of the entry
    pub user_id: String,

    /// Title of the workout
    pub title: String,

    /// Duration as entered
    pub duration: String,

    /// Calories as entered
    pub kcal: String,

    /// Timestamp when the entry was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the entry was last modified (UTC)
    pub updated_at: Timestamp,
}
