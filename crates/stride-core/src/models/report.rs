//! Daily progress aggregation over the workout log.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use super::WorkoutLog;
use crate::error::{Result, StrideError};

/// Half-open window `[start, end)` covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub day: Date,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DayWindow {
    /// Builds the window of the calendar day that contains `instant` in `tz`.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Configuration` if the day boundaries fall
    /// outside the supported time range.
    pub fn containing(instant: Timestamp, tz: TimeZone) -> Result<Self> {
        let time_error = |e: jiff::Error| StrideError::Configuration {
            message: format!("Failed to compute day boundaries: {e}"),
        };

        let start = instant
            .to_zoned(tz)
            .start_of_day()
            .map_err(time_error)?;
        let end = start
            .tomorrow()
            .and_then(|next| next.start_of_day())
            .map_err(time_error)?;

        Ok(Self {
            day: start.date(),
            start: start.timestamp(),
            end: end.timestamp(),
        })
    }

    /// Window for the current day in the system time zone.
    pub fn today() -> Result<Self> {
        Self::containing(Timestamp::now(), TimeZone::system())
    }

    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Totals for one day of training.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyTotals {
    pub workouts: u32,
    pub calories: u32,
    pub minutes: u32,
}

impl DailyTotals {
    fn add(&mut self, log: &WorkoutLog) {
        self.workouts += 1;
        self.calories = self.calories.saturating_add(log.record.total_kcal);
        self.minutes = self
            .minutes
            .saturating_add(log.record.total_duration_minutes);
    }
}

/// Today's totals plus the recent history they were computed from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressReport {
    pub day: Date,
    pub today: DailyTotals,
    pub history: Vec<WorkoutLog>,
}

impl ProgressReport {
    /// Aggregates `history` into today's totals. Only logs inside `window`
    /// count towards the totals; the full history is kept for display.
    pub fn from_logs(window: &DayWindow, history: Vec<WorkoutLog>) -> Self {
        let today = history
            .iter()
            .filter(|log| window.contains(log.record.completed_at))
            .fold(DailyTotals::default(), |mut totals, log| {
                totals.add(log);
                totals
            });

        Self {
            day: window.day,
            today,
            history,
        }
    }
}
