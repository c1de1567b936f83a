//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints its items one after another and has a fixed message
//! for the empty case.

use std::fmt;

use crate::models::{CustomWorkout, WorkoutLog, WorkoutPlan};

/// Catalog listing: one heading per workout with its headline figures.
///
/// ```rust
/// use stride_core::{catalog::{BuiltinCatalog, WorkoutCatalog}, display::WorkoutPlans};
///
/// let catalog = BuiltinCatalog::new()?;
/// let output = WorkoutPlans(catalog.list()).to_string();
/// assert!(output.contains("## Morning Yoga (ID: 3)"));
/// # Ok::<(), stride_core::StrideError>(())
/// ```
pub struct WorkoutPlans(pub Vec<WorkoutPlan>);

impl WorkoutPlans {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutPlan> {
        self.0.iter()
    }
}

impl fmt::Display for WorkoutPlans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No workouts found.");
        }
        for plan in &self.0 {
            writeln!(f, "## {} (ID: {})", plan.title, plan.id)?;
            writeln!(f)?;
            writeln!(
                f,
                "- **Level**: {} | **Duration**: {} | **Calories**: {} kcal",
                plan.level, plan.total_duration_label, plan.total_kcal
            )?;
            writeln!(f, "- **Rounds**: {}", plan.segments.len())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Completed sessions, newest first.
pub struct WorkoutLogs(pub Vec<WorkoutLog>);

impl WorkoutLogs {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkoutLog> {
        self.0.iter()
    }
}

impl fmt::Display for WorkoutLogs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No workouts logged yet.");
        }
        for log in &self.0 {
            write!(f, "{log}")?;
        }
        Ok(())
    }
}

pub struct CustomWorkouts(pub Vec<CustomWorkout>);

impl CustomWorkouts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CustomWorkout> {
        self.0.iter()
    }
}

impl fmt::Display for CustomWorkouts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No custom workouts found.");
        }
        for workout in &self.0 {
            write!(f, "{workout}")?;
        }
        Ok(())
    }
}
