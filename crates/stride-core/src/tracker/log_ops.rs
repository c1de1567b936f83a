//! Workout log and progress operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::{CompletedSessionRecord, DayWindow, ProgressReport, WorkoutLog},
    params::{ListHistory, UserScope},
};

/// Number of recent sessions included in a progress report.
pub const REPORT_HISTORY_LIMIT: u32 = 10;

impl Tracker {
    /// Stores a completed session.
    pub async fn log_session(&self, record: &CompletedSessionRecord) -> Result<WorkoutLog> {
        let record = record.clone();
        self.with_database(move |db| db.insert_log(&record)).await
    }

    /// Lists completed sessions, newest first.
    pub async fn list_history(&self, params: &ListHistory) -> Result<Vec<WorkoutLog>> {
        let user_id = params.user_id.clone();
        let limit = params.limit;
        self.with_database(move |db| db.list_logs(&user_id, limit))
            .await
    }

    /// Today's totals in the system time zone plus recent history.
    pub async fn progress_report(&self, params: &UserScope) -> Result<ProgressReport> {
        self.progress_report_for(params, DayWindow::today()?).await
    }

    /// Totals for the day covered by `window` plus recent history.
    pub async fn progress_report_for(
        &self,
        params: &UserScope,
        window: DayWindow,
    ) -> Result<ProgressReport> {
        let user_id = params.user_id.clone();

        self.with_database(move |db| {
            let day_logs = db.list_logs_between(&user_id, window.start, window.end)?;
            let recent = db.list_logs(&user_id, Some(REPORT_HISTORY_LIMIT))?;

            Ok(ProgressReport {
                history: recent,
                ..ProgressReport::from_logs(&window, day_logs)
            })
        })
        .await
    }
}
