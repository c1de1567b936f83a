//! Error types for the stride library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all catalog, player and tracker operations.
#[derive(Error, Debug)]
pub enum StrideError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No stock workout with the given ID
    #[error("Workout '{id}' not found")]
    WorkoutNotFound { id: String },
    /// No custom workout with the given ID
    #[error("Custom workout with ID {id} not found")]
    CustomWorkoutNotFound { id: u64 },
    /// A plan without segments cannot be played
    #[error("Workout '{plan_id}' has no segments")]
    EmptyPlan { plan_id: String },
    /// A plan with missing or malformed fields
    #[error("Workout '{plan_id}' is invalid: {reason}")]
    InvalidPlan { plan_id: String, reason: String },
    /// A player control issued in a phase that does not accept it
    #[error("Cannot {action} while session is {from}")]
    InvalidTransition { from: String, action: String },
    /// A completed session could not be handed to the log sink
    #[error("Session log delivery failed: {message}")]
    Delivery { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration and runtime plumbing errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StrideError {
        StrideError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StrideError {
        StrideError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StrideError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StrideError::database(message).with_source(e))
    }
}

/// Result type alias for stride operations
pub type Result<T> = std::result::Result<T, StrideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = StrideError::invalid_input("title").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'title': must not be empty"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to load log").unwrap_err();
        assert!(matches!(err, StrideError::Database { .. }));
        assert!(err.to_string().contains("Failed to load log"));
    }

    #[test]
    fn test_transition_message() {
        let err = StrideError::InvalidTransition {
            from: "completed".to_string(),
            action: "start".to_string(),
        };
        assert_eq!(err.to_string(), "Cannot start while session is completed");
    }
}
