//! SQLite storage for workout logs, custom workouts and user profiles.
//!
//! Every query lives in an `impl Database` block in one of the submodules,
//! grouped by table. Timestamps are stored as RFC 3339 text.

use std::path::Path;

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod log_queries;
pub mod migrations;
pub mod profile_queries;
pub mod workout_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database, used by unit tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads a text column holding a timestamp.
pub(crate) fn timestamp_column(
    row: &rusqlite::Row<'_>,
    index: usize,
) -> rusqlite::Result<jiff::Timestamp> {
    row.get::<_, String>(index)?
        .parse::<jiff::Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Text form used for stored timestamps. A fixed nine-digit fraction keeps
/// lexicographic order equal to chronological order.
pub(crate) fn stored_timestamp(timestamp: jiff::Timestamp) -> String {
    format!("{timestamp:.9}")
}
