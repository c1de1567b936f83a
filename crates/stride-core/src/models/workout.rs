//! Workout plan and segment definitions.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StrideError};

/// One timed exercise step within a workout plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    /// Identifier, unique within its plan
    pub id: String,

    /// Exercise name
    pub title: String,

    /// Countdown length in whole seconds
    pub duration_seconds: u32,
}

impl Segment {
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration_seconds: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_seconds,
        }
    }
}

/// A workout as served by the catalog.
///
/// The aggregate metadata (`total_duration_label`, `total_kcal`) is display
/// data authored alongside the plan and is never recomputed from segments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPlan {
    /// Catalog identifier
    pub id: String,

    /// Display name
    pub title: String,

    /// Short description of the routine
    pub description: String,

    /// Difficulty label (e.g. "Advanced")
    pub level: String,

    /// Human duration label such as "45 Mins"
    pub total_duration_label: String,

    /// Estimated calories burned
    pub total_kcal: u32,

    /// Segments in execution order
    pub segments: Vec<Segment>,
}

impl WorkoutPlan {
    /// Sum of all segment durations in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.segments
            .iter()
            .map(|segment| u64::from(segment.duration_seconds))
            .sum()
    }

    /// Numeric minute count parsed from the leading integer of
    /// `total_duration_label` ("45 Mins" -> 45).
    pub fn duration_minutes(&self) -> Option<u32> {
        let label = self.total_duration_label.trim_start();
        let digits_end = label
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(label.len());
        label[..digits_end].parse().ok()
    }

    /// Checks the preconditions for playing this plan.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::EmptyPlan` when there are no segments and
    /// `StrideError::InvalidPlan` for a missing title, a zero-length segment,
    /// duplicate segment IDs or an unparseable duration label.
    pub fn validate(&self) -> Result<()> {
        if self.segments.is_empty() {
            return Err(StrideError::EmptyPlan {
                plan_id: self.id.clone(),
            });
        }

        let invalid = |reason: String| StrideError::InvalidPlan {
            plan_id: self.id.clone(),
            reason,
        };

        if self.title.trim().is_empty() {
            return Err(invalid("title is empty".to_string()));
        }

        if self.duration_minutes().is_none() {
            return Err(invalid(format!(
                "duration label '{}' has no minute count",
                self.total_duration_label
            )));
        }

        for (index, segment) in self.segments.iter().enumerate() {
            if segment.duration_seconds == 0 {
                return Err(invalid(format!(
                    "segment '{}' has zero duration",
                    segment.title
                )));
            }
            if self.segments[..index].iter().any(|s| s.id == segment.id) {
                return Err(invalid(format!("duplicate segment id '{}'", segment.id)));
            }
        }

        Ok(())
    }
}
