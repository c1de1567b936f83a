//! Data models for workouts, completed sessions and progress.
//!
//! This module contains the core domain models of the stride workout tracker.
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay separate from
//! presentation.
//!
//! # Model Overview
//!
//! - [`WorkoutPlan`] / [`Segment`]: read-only plans served by the catalog. A
//!   plan's segments are played in order by the session player.
//! - [`CompletedSessionRecord`]: produced exactly once when the last segment
//!   of a session finishes; handed to the log sink.
//! - [`WorkoutLog`]: a record after it has been stored.
//! - [`CustomWorkout`]: a user-authored workout entry.
//! - [`UserProfile`]: body stats and fitness level, merged field by field.
//! - [`ProgressReport`] / [`DailyTotals`]: today's aggregate over the logs.
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{Segment, WorkoutPlan};
//!
//! let plan = WorkoutPlan {
//!     id: "quick".to_string(),
//!     title: "Quick Burn".to_string(),
//!     description: "Short and sharp".to_string(),
//!     level: "Beginner".to_string(),
//!     total_duration_label: "1 Mins".to_string(),
//!     total_kcal: 15,
//!     segments: vec![Segment::new("1", "Jumping Jacks", 60)],
//! };
//!
//! assert_eq!(plan.total_seconds(), 60);
//! assert_eq!(plan.duration_minutes(), Some(1));
//! assert!(plan.validate().is_ok());
//! ```

pub mod custom;
pub mod profile;
pub mod record;
pub mod report;
pub mod requests;
pub mod workout;

#[cfg(test)]
mod tests;

pub use custom::CustomWorkout;
pub use profile::UserProfile;
pub use record::{CompletedSessionRecord, WorkoutLog};
pub use report::{DailyTotals, DayWindow, ProgressReport};
pub use requests::{UpdateCustomWorkoutRequest, UpdateProfileRequest};
pub use workout::{Segment, WorkoutPlan};
