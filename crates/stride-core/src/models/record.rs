//! Completed session records and their stored form.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Immutable summary of a workout session that ran to completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedSessionRecord {
    /// User who completed the session
    pub user_id: String,

    /// Title of the workout that was played
    pub workout_title: String,

    /// Plan duration in minutes, parsed from the plan's duration label
    pub total_duration_minutes: u32,

    /// Plan calorie estimate
    pub total_kcal: u32,

    /// Moment the last segment reached zero (UTC)
    pub completed_at: Timestamp,
}

/// A completed session as stored in the workout log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutLog {
    /// Row identifier
    pub id: u64,

    #[serde(flatten)]
    pub record: CompletedSessionRecord,
}
