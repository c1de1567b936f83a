//! Result wrapper types for displaying operation outcomes.
//!
//! Custom workout changes and profile updates report through these wrappers
//! so the CLI and the MCP server print the same confirmation.

use std::fmt;

use crate::models::{CustomWorkout, UserProfile};

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use jiff::Timestamp;
/// use stride_core::{display::CreateResult, models::CustomWorkout};
///
/// let workout = CustomWorkout {
///     id: 1,
///     user_id: "local".to_string(),
///     title: "Stairs".to_string(),
///     duration: "15 Mins".to_string(),
///     kcal: "90".to_string(),
///     created_at: Timestamp::UNIX_EPOCH,
///     updated_at: Timestamp::UNIX_EPOCH,
/// };
///
/// let output = CreateResult::new(workout).to_string();
/// assert!(output.starts_with("Created custom workout with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<CustomWorkout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created custom workout with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with the
/// list of changed fields.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<CustomWorkout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated custom workout with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<UserProfile> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated profile for {}", self.resource.user_id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<CustomWorkout> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted custom workout '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}
