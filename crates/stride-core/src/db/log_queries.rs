//! Workout log inserts and queries.

use rusqlite::params;

use super::{stored_timestamp, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{CompletedSessionRecord, WorkoutLog},
};

const INSERT_LOG_SQL: &str = "INSERT INTO workout_logs (user_id, workout_title, duration_minutes, kcal, completed_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_LOGS_SQL: &str = "SELECT id, user_id, workout_title, duration_minutes, kcal, completed_at FROM workout_logs WHERE user_id = ?1 ORDER BY completed_at DESC, id DESC LIMIT ?2";
const SELECT_LOGS_BETWEEN_SQL: &str = "SELECT id, user_id, workout_title, duration_minutes, kcal, completed_at FROM workout_logs WHERE user_id = ?1 AND completed_at >= ?2 AND completed_at < ?3 ORDER BY completed_at DESC, id DESC";

impl super::Database {
    /// Appends a completed session to the log.
    pub fn insert_log(&mut self, record: &CompletedSessionRecord) -> Result<WorkoutLog> {
        self.connection
            .execute(
                INSERT_LOG_SQL,
                params![
                    &record.user_id,
                    &record.workout_title,
                    record.total_duration_minutes,
                    record.total_kcal,
                    stored_timestamp(record.completed_at),
                ],
            )
            .db_context("Failed to insert workout log")?;

        Ok(WorkoutLog {
            id: self.connection.last_insert_rowid() as u64,
            record: record.clone(),
        })
    }

    /// Lists a user's logs, newest first. `None` returns every log.
    pub fn list_logs(&self, user_id: &str, limit: Option<u32>) -> Result<Vec<WorkoutLog>> {
        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map_or(-1, i64::from);

        let mut stmt = self
            .connection
            .prepare(SELECT_LOGS_SQL)
            .db_context("Failed to prepare query")?;

        let logs = stmt
            .query_map(params![user_id, limit], Self::build_log_from_row)
            .db_context("Failed to query workout logs")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch workout logs")?;

        Ok(logs)
    }

    /// Logs completed in `[start, end)`, newest first.
    pub fn list_logs_between(
        &self,
        user_id: &str,
        start: jiff::Timestamp,
        end: jiff::Timestamp,
    ) -> Result<Vec<WorkoutLog>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LOGS_BETWEEN_SQL)
            .db_context("Failed to prepare query")?;

        let logs = stmt
            .query_map(
                params![user_id, stored_timestamp(start), stored_timestamp(end)],
                Self::build_log_from_row,
            )
            .db_context("Failed to query workout logs")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch workout logs")?;

        Ok(logs)
    }

    fn build_log_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<WorkoutLog> {
        Ok(WorkoutLog {
            id: row.get::<_, i64>(0)? as u64,
            record: CompletedSessionRecord {
                user_id: row.get(1)?,
                workout_title: row.get(2)?,
                total_duration_minutes: row.get(3)?,
                total_kcal: row.get(4)?,
                completed_at: timestamp_column(row, 5)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::{db::Database, models::CompletedSessionRecord};

    fn record(user: &str, title: &str, second: i64) -> CompletedSessionRecord {
        CompletedSessionRecord {
            user_id: user.to_string(),
            workout_title: title.to_string(),
            total_duration_minutes: 20,
            total_kcal: 100,
            completed_at: Timestamp::from_second(second).unwrap(),
        }
    }

    #[test]
    fn test_insert_and_list_newest_first() {
        let mut db = Database::in_memory().unwrap();
        db.insert_log(&record("local", "Older", 1_700_000_000)).unwrap();
        let newer = db.insert_log(&record("local", "Newer", 1_700_000_600)).unwrap();
        db.insert_log(&record("someone-else", "Hidden", 1_700_000_300))
            .unwrap();

        let logs = db.list_logs("local", None).unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0], newer);
        assert_eq!(logs[1].record.workout_title, "Older");

        let limited = db.list_logs("local", Some(1)).unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].record.workout_title, "Newer");
    }

    #[test]
    fn test_fractional_seconds_sort_correctly() {
        let mut db = Database::in_memory().unwrap();
        let whole = Timestamp::from_second(1_700_000_000).unwrap();
        let later = Timestamp::from_nanosecond(1_700_000_000_500_000_000).unwrap();

        let mut first = record("local", "Whole", 0);
        first.completed_at = whole;
        let mut second = record("local", "Fractional", 0);
        second.completed_at = later;
        db.insert_log(&second).unwrap();
        db.insert_log(&first).unwrap();

        let logs = db.list_logs("local", None).unwrap();
        assert_eq!(logs[0].record.workout_title, "Fractional");
        assert_eq!(logs[0].record.completed_at, later);
    }

    #[test]
    fn test_list_between_is_half_open() {
        let mut db = Database::in_memory().unwrap();
        db.insert_log(&record("local", "Start", 1_000)).unwrap();
        db.insert_log(&record("local", "Inside", 1_500)).unwrap();
        db.insert_log(&record("local", "End", 2_000)).unwrap();

        let logs = db
            .list_logs_between(
                "local",
                Timestamp::from_second(1_000).unwrap(),
                Timestamp::from_second(2_000).unwrap(),
            )
            .unwrap();
        let titles: Vec<_> = logs.iter().map(|l| l.record.workout_title.as_str()).collect();
        assert_eq!(titles, vec!["Inside", "Start"]);
    }
}
