//! One-line confirmation and failure messages.

use std::fmt;

/// Outcome message for operations that have nothing else to show, such as a
/// delete of a missing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }

    /// Failure for a lookup that found nothing.
    pub fn not_found(kind: &str, id: impl fmt::Display) -> Self {
        Self::failure(format!("{kind} with ID {id} not found"))
    }

    /// Failure for a user who has never saved a profile.
    pub fn missing_profile(user_id: &str) -> Self {
        Self::failure(format!("No profile saved for user '{user_id}'"))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}
