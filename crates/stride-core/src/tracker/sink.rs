//! Log sink backed by the workout database.

use std::path::PathBuf;

use log::debug;

use crate::{db::Database, error::Result, models::CompletedSessionRecord, sink::SessionLogSink};

/// Writes completed sessions to the `workout_logs` table.
///
/// Each record opens its own connection; the dispatcher calls this on the
/// blocking pool.
#[derive(Debug, Clone)]
pub struct DatabaseSink {
    db_path: PathBuf,
}

impl DatabaseSink {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl SessionLogSink for DatabaseSink {
    fn record(&self, record: &CompletedSessionRecord) -> Result<()> {
        let mut db = Database::new(&self.db_path)?;
        let log = db.insert_log(record)?;
        debug!("Stored workout log {} for {}", log.id, record.user_id);
        Ok(())
    }
}
