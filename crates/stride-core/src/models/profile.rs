//! Per-user profile collected during onboarding.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Fitness levels a profile can name, in display form.
pub const FITNESS_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Body stats and preferences for one user.
///
/// Every field except the onboarding flag is optional: a profile is built up
/// by merging partial updates, and fields nobody has set stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// User the profile belongs to
    pub user_id: String,

    /// Display name
    pub name: Option<String>,

    /// Age in years
    pub age: Option<u32>,

    /// Body weight in kilograms
    pub weight_kg: Option<f64>,

    /// Height in centimetres
    pub height_cm: Option<f64>,

    pub gender: Option<String>,

    /// One of [`FITNESS_LEVELS`]
    pub fitness_level: Option<String>,

    /// Set once body stats have been saved
    pub onboarding_complete: bool,

    /// Timestamp when the profile was first stored (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the last merge (UTC)
    pub updated_at: Timestamp,
}

impl UserProfile {
    /// Profile with nothing set, as seen before the first update.
    pub fn empty(user_id: impl Into<String>, now: Timestamp) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            age: None,
            weight_kg: None,
            height_cm: None,
            gender: None,
            fitness_level: None,
            onboarding_complete: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Canonical spelling of a fitness level, matched case-insensitively.
pub fn canonical_fitness_level(level: &str) -> Option<&'static str> {
    let level = level.trim();
    FITNESS_LEVELS
        .into_iter()
        .find(|known| known.eq_ignore_ascii_case(level))
}
