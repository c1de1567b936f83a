//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Brings databases created by older releases up to the current schema.
    fn apply_migrations(&self) -> Result<()> {
        // Early databases tracked only a creation time for custom workouts
        let has_updated_at: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('custom_workouts') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect custom_workouts table")?;

        if !has_updated_at {
            self.connection
                .execute_batch(
                    "ALTER TABLE custom_workouts ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';
                     UPDATE custom_workouts SET updated_at = created_at;",
                )
                .db_context("Failed to add updated_at column to custom_workouts")?;
        }

        Ok(())
    }
}
