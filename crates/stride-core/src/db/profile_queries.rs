//! User profile storage.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::{stored_timestamp, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{UpdateProfileRequest, UserProfile},
};

const SELECT_PROFILE_SQL: &str = "SELECT user_id, name, age, weight_kg, height_cm, gender, fitness_level, onboarding_complete, created_at, updated_at FROM user_profiles WHERE user_id = ?1";
const UPSERT_PROFILE_SQL: &str = "INSERT INTO user_profiles (user_id, name, age, weight_kg, height_cm, gender, fitness_level, onboarding_complete, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    ON CONFLICT(user_id) DO UPDATE SET name = excluded.name, age = excluded.age, weight_kg = excluded.weight_kg, height_cm = excluded.height_cm, gender = excluded.gender, fitness_level = excluded.fitness_level, onboarding_complete = excluded.onboarding_complete, updated_at = excluded.updated_at";

impl super::Database {
    pub fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROFILE_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![user_id], Self::build_profile_from_row)
            .optional()
            .db_context("Failed to get profile")
    }

    /// Merges `request` into the user's profile, creating it on first use.
    ///
    /// Fields the request leaves as `None` keep their stored value.
    pub fn upsert_profile(
        &mut self,
        user_id: &str,
        request: UpdateProfileRequest,
    ) -> Result<UserProfile> {
        let now = Timestamp::now();
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(SELECT_PROFILE_SQL, params![user_id], Self::build_profile_from_row)
            .optional()
            .db_context("Failed to get current profile")?
            .unwrap_or_else(|| UserProfile::empty(user_id, now));

        let merged = UserProfile {
            name: request.name.or(current.name),
            age: request.age.or(current.age),
            weight_kg: request.weight_kg.or(current.weight_kg),
            height_cm: request.height_cm.or(current.height_cm),
            gender: request.gender.or(current.gender),
            fitness_level: request.fitness_level.or(current.fitness_level),
            onboarding_complete: request
                .onboarding_complete
                .unwrap_or(current.onboarding_complete),
            updated_at: now,
            ..current
        };

        tx.execute(
            UPSERT_PROFILE_SQL,
            params![
                &merged.user_id,
                &merged.name,
                merged.age,
                merged.weight_kg,
                merged.height_cm,
                &merged.gender,
                &merged.fitness_level,
                merged.onboarding_complete,
                stored_timestamp(merged.created_at),
                stored_timestamp(merged.updated_at),
            ],
        )
        .db_context("Failed to save profile")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(merged)
    }

    fn build_profile_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UserProfile> {
        Ok(UserProfile {
            user_id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            weight_kg: row.get(3)?,
            height_cm: row.get(4)?,
            gender: row.get(5)?,
            fitness_level: row.get(6)?,
            onboarding_complete: row.get(7)?,
            created_at: timestamp_column(row, 8)?,
            updated_at: timestamp_column(row, 9)?,
        })
    }
}
