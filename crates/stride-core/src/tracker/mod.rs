//! Async façade over the workout database.
//!
//! [`Tracker`] owns nothing but a database path. Each call opens a
//! connection on the blocking thread pool, runs its queries and returns, so a
//! tracker is cheap to clone and share between the CLI, the MCP server and
//! the [`DatabaseSink`] that stores completed sessions.
//!
//! ```rust,no_run
//! use stride_core::{params::ListHistory, TrackerBuilder};
//!
//! # async fn example() -> stride_core::Result<()> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/stride.db"))
//!     .build()
//!     .await?;
//!
//! let history = tracker.list_history(&ListHistory::default()).await?;
//! println!("{} sessions logged", history.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, StrideError},
};

pub mod builder;
pub mod handlers;
pub mod log_ops;
pub mod profile_ops;
pub mod sink;
pub mod workout_ops;


pub use builder::TrackerBuilder;
pub use sink::DatabaseSink;

/// Entry point for stored workout data.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Log sink that writes completed sessions into this tracker's database.
    pub fn sink(&self) -> DatabaseSink {
        DatabaseSink::new(self.db_path.clone())
    }

    /// Runs `operation` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(StrideError::join)?
    }
}
