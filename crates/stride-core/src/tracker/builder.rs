//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, StrideError},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
}

impl TrackerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path. `None` keeps the default.
    ///
    /// The default follows the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/stride/stride.db` or `~/.local/share/stride/stride.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Creates the database file and schema if needed and returns the tracker.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::FileSystem` if the parent directory cannot be
    /// created and `StrideError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StrideError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(StrideError::join)??;

        log::debug!("Using database at {}", db_path.display());
        Ok(Tracker::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_data_file("stride.db")
            .map_err(|e| StrideError::XdgDirectory(e.to_string()))
    }
}
