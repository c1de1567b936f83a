//! Custom workout CRUD operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::{stored_timestamp, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, StrideError},
    models::{CustomWorkout, UpdateCustomWorkoutRequest},
};

const INSERT_WORKOUT_SQL: &str = "INSERT INTO custom_workouts (user_id, title, duration, kcal, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_WORKOUT_SQL: &str = "SELECT id, user_id, title, duration, kcal, created_at, updated_at FROM custom_workouts WHERE id = ?1";
const SELECT_WORKOUTS_BY_USER_SQL: &str = "SELECT id, user_id, title, duration, kcal, created_at, updated_at FROM custom_workouts WHERE user_id = ?1 ORDER BY created_at DESC, id DESC";
const UPDATE_WORKOUT_SQL: &str =
    "UPDATE custom_workouts SET title = ?1, duration = ?2, kcal = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_WORKOUT_SQL: &str = "DELETE FROM custom_workouts WHERE id = ?1";

impl super::Database {
    /// Stores a new custom workout for `user_id`.
    pub fn create_custom_workout(
        &mut self,
        user_id: &str,
        title: &str,
        duration: &str,
        kcal: &str,
    ) -> Result<CustomWorkout> {
        let now = Timestamp::now();
        let now_str = stored_timestamp(now);

        self.connection
            .execute(
                INSERT_WORKOUT_SQL,
                params![user_id, title, duration, kcal, &now_str, &now_str],
            )
            .db_context("Failed to insert custom workout")?;

        Ok(CustomWorkout {
            id: self.connection.last_insert_rowid() as u64,
            user_id: user_id.into(),
            title: title.into(),
            duration: duration.into(),
            kcal: kcal.into(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn get_custom_workout(&self, id: u64) -> Result<Option<CustomWorkout>> {
        let Ok(row_id) = i64::try_from(id) else {
            return Ok(None);
        };
        let mut stmt = self
            .connection
            .prepare(SELECT_WORKOUT_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![row_id], Self::build_workout_from_row)
            .optional()
            .db_context("Failed to get custom workout")
    }

    /// Lists a user's custom workouts, most recently created first.
    pub fn list_custom_workouts(&self, user_id: &str) -> Result<Vec<CustomWorkout>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_WORKOUTS_BY_USER_SQL)
            .db_context("Failed to prepare query")?;

        let workouts = stmt
            .query_map(params![user_id], Self::build_workout_from_row)
            .db_context("Failed to query custom workouts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch custom workouts")?;

        Ok(workouts)
    }

    /// Applies a partial update and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::CustomWorkoutNotFound` if no such entry exists.
    pub fn update_custom_workout(
        &mut self,
        id: u64,
        request: UpdateCustomWorkoutRequest,
    ) -> Result<CustomWorkout> {
        let row_id = i64::try_from(id).map_err(|_| StrideError::CustomWorkoutNotFound { id })?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_WORKOUT_SQL, params![row_id], Self::build_workout_from_row)
            .optional()
            .db_context("Failed to get current custom workout")?
            .ok_or(StrideError::CustomWorkoutNotFound { id })?;

        if request.is_empty() {
            return Ok(current);
        }

        let updated = CustomWorkout {
            title: request.title.unwrap_or(current.title),
            duration: request.duration.unwrap_or(current.duration),
            kcal: request.kcal.unwrap_or(current.kcal),
            updated_at: Timestamp::now(),
            ..current
        };

        tx.execute(
            UPDATE_WORKOUT_SQL,
            params![
                &updated.title,
                &updated.duration,
                &updated.kcal,
                stored_timestamp(updated.updated_at),
                row_id
            ],
        )
        .db_context("Failed to update custom workout")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }

    /// Deletes an entry. Returns false if it did not exist.
    pub fn delete_custom_workout(&mut self, id: u64) -> Result<bool> {
        let Ok(row_id) = i64::try_from(id) else {
            return Ok(false);
        };
        let affected = self
            .connection
            .execute(DELETE_WORKOUT_SQL, params![row_id])
            .db_context("Failed to delete custom workout")?;

        Ok(affected > 0)
    }

    fn build_workout_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CustomWorkout> {
        Ok(CustomWorkout {
            id: row.get::<_, i64>(0)? as u64,
            user_id: row.get(1)?,
            title: row.get(2)?,
            duration: row.get(3)?,
            kcal: row.get(4)?,
            created_at: timestamp_column(row, 5)?,
            updated_at: timestamp_column(row, 6)?,
        })
    }
}
