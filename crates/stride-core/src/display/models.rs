//! Display implementations for domain models.
//!
//! Everything here renders markdown so the terminal renderer and MCP clients
//! get the same text.

use std::fmt;

use super::datetime::{Clock, LocalDateTime};
use crate::{
    models::{CustomWorkout, ProgressReport, UserProfile, WorkoutLog, WorkoutPlan},
    player::{PlayerSnapshot, SessionPhase},
};

impl fmt::Display for WorkoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Level: {}", self.level)?;
        writeln!(f, "- Duration: {}", self.total_duration_label)?;
        writeln!(f, "- Calories: {} kcal", self.total_kcal)?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.segments.is_empty() {
            writeln!(f, "\nNo rounds in this workout.")?;
            return Ok(());
        }

        writeln!(f, "\n## Rounds")?;
        writeln!(f)?;
        for (index, segment) in self.segments.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({})",
                index + 1,
                segment.title,
                Clock(segment.duration_seconds)
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for WorkoutLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.record.workout_title, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Completed**: {}",
            LocalDateTime(&self.record.completed_at)
        )?;
        writeln!(f, "- **Duration**: {} min", self.record.total_duration_minutes)?;
        writeln!(f, "- **Calories**: {} kcal", self.record.total_kcal)?;
        writeln!(f)
    }
}

impl fmt::Display for CustomWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Duration**: {}", self.duration)?;
        writeln!(f, "- **Calories**: {}", self.kcal)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        if self.updated_at != self.created_at {
            writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Progress for {}", self.day)?;
        writeln!(f)?;
        writeln!(f, "- Workouts: {}", self.today.workouts)?;
        writeln!(f, "- Calories: {} kcal", self.today.calories)?;
        writeln!(f, "- Minutes: {}", self.today.minutes)?;

        writeln!(f, "\n## Recent History")?;
        writeln!(f)?;
        if self.history.is_empty() {
            return writeln!(f, "No workouts logged yet.");
        }
        for log in &self.history {
            writeln!(
                f,
                "- {} ({} min, {} kcal) on {}",
                log.record.workout_title,
                log.record.total_duration_minutes,
                log.record.total_kcal,
                LocalDateTime(&log.record.completed_at)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field(value: Option<impl fmt::Display>, unit: &str) -> String {
            value.map_or_else(|| "Not set".to_string(), |value| format!("{value}{unit}"))
        }

        writeln!(f, "# Profile for {}", self.user_id)?;
        writeln!(f)?;
        writeln!(f, "- **Name**: {}", field(self.name.as_deref(), ""))?;
        writeln!(f, "- **Age**: {}", field(self.age, ""))?;
        writeln!(f, "- **Weight**: {}", field(self.weight_kg, " kg"))?;
        writeln!(f, "- **Height**: {}", field(self.height_cm, " cm"))?;
        writeln!(f, "- **Gender**: {}", field(self.gender.as_deref(), ""))?;
        writeln!(
            f,
            "- **Fitness level**: {}",
            field(self.fitness_level.as_deref(), "")
        )?;
        let onboarding = if self.onboarding_complete {
            "complete"
        } else {
            "pending"
        };
        writeln!(f, "- **Onboarding**: {onboarding}")?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))
    }
}

/// Single-line status for a live session.
impl fmt::Display for PlayerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            SessionPhase::Idle => write!(f, "{}: ready", self.workout_title),
            SessionPhase::Completed => write!(
                f,
                "{}: completed in {}",
                self.workout_title,
                Clock(u32::try_from(self.elapsed_seconds).unwrap_or(u32::MAX))
            ),
            SessionPhase::Aborted => write!(f, "{}: quit", self.workout_title),
            SessionPhase::Running => {
                write!(
                    f,
                    "Round {}/{} {} {}",
                    self.current_index + 1,
                    self.segment_count,
                    self.segment_title.as_deref().unwrap_or_default(),
                    Clock(self.remaining_seconds)
                )?;
                if let Some(next) = &self.next_segment_title {
                    write!(f, " | next: {next}")?;
                }
                if self.quit_pending {
                    write!(f, " | quit workout? [y/n]")
                } else if self.is_paused {
                    write!(f, " | paused")
                } else {
                    Ok(())
                }
            }
        }
    }
}
