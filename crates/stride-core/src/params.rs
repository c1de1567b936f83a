//! Parameter structures shared by the CLI and MCP front-ends.
//!
//! Front-ends wrap these in their own framework types (clap `Args`, MCP
//! request wrappers) and convert into them, so the tracker API never depends
//! on a particular interface. JSON schema derives are only compiled with the
//! `schema` feature.
//!
//! ```ignore
//! // In the CLI crate
//! #[derive(Args)]
//! pub struct HistoryArgs {
//!     #[arg(short, long)]
//!     pub limit: Option<u32>,
//! }
//!
//! // converted with the user from the global --user flag
//! let params = ListHistory { user_id, limit: args.limit };
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, StrideError},
    models::{profile::canonical_fitness_level, UpdateCustomWorkoutRequest, UpdateProfileRequest},
};

/// User assumed when none is configured.
pub const DEFAULT_USER_ID: &str = "local";

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

/// Generic parameters for operations requiring just an ID.
///
/// Used for showing and deleting custom workouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Reference to a catalog workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WorkoutRef {
    /// Catalog ID of the workout ("1", "2", ...). Unknown IDs resolve to the
    /// default workout.
    pub workout_id: String,
}

/// Parameters for operations scoped to one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UserScope {
    /// User whose data to read (defaults to "local")
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl Default for UserScope {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

/// Parameters for listing completed sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListHistory {
    /// User whose history to list (defaults to "local")
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Maximum number of entries, newest first
    pub limit: Option<u32>,
}

impl Default for ListHistory {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            limit: None,
        }
    }
}

/// Parameters for creating a custom workout.
///
/// Duration and calories are free text ("30 Mins", "250") and are stored as
/// entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateCustomWorkout {
    /// Owner of the entry (defaults to "local")
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Title of the workout (required)
    pub title: String,
    /// Duration as shown to the user, e.g. "30 Mins" (required)
    pub duration: String,
    /// Calories as shown to the user, e.g. "250" (required)
    pub kcal: String,
}

impl CreateCustomWorkout {
    /// Checks that every field holds more than whitespace.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        require_text("user_id", &self.user_id)?;
        require_text("title", &self.title)?;
        require_text("duration", &self.duration)?;
        require_text("kcal", &self.kcal)
    }
}

/// Parameters for a partial update of a custom workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateCustomWorkout {
    /// Custom workout ID to update (required)
    pub id: u64,
    /// New title
    pub title: Option<String>,
    /// New duration text
    pub duration: Option<String>,
    /// New calories text
    pub kcal: Option<String>,
}

impl UpdateCustomWorkout {
    /// Validates the provided fields and builds the storage request.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if a provided field is blank.
    pub fn validate(&self) -> Result<UpdateCustomWorkoutRequest> {
        for (field, value) in [
            ("title", &self.title),
            ("duration", &self.duration),
            ("kcal", &self.kcal),
        ] {
            if let Some(value) = value {
                require_text(field, value)?;
            }
        }

        Ok(UpdateCustomWorkoutRequest {
            title: self.title.clone(),
            duration: self.duration.clone(),
            kcal: self.kcal.clone(),
        })
    }
}

/// Parameters for merging fields into a user's profile.
///
/// Only the fields given are changed. Saving any body stat marks onboarding
/// complete unless `onboarding_complete` says otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateProfile {
    /// User whose profile to update (defaults to "local")
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Display name
    pub name: Option<String>,
    /// Age in years, 1 to 120
    pub age: Option<u32>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimetres
    pub height_cm: Option<f64>,
    /// Gender as the user describes it
    pub gender: Option<String>,
    /// "Beginner", "Intermediate" or "Advanced"
    pub fitness_level: Option<String>,
    /// Override for the onboarding flag
    pub onboarding_complete: Option<bool>,
}

impl Default for UpdateProfile {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            name: None,
            age: None,
            weight_kg: None,
            height_cm: None,
            gender: None,
            fitness_level: None,
            onboarding_complete: None,
        }
    }
}

impl UpdateProfile {
    /// Validates the provided fields and builds the merge request. Text is
    /// trimmed and the fitness level is normalized.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if no field is given, a text field
    /// is blank, a number is out of range or the fitness level is unknown.
    pub fn validate(&self) -> Result<UpdateProfileRequest> {
        require_text("user_id", &self.user_id)?;
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(gender) = &self.gender {
            require_text("gender", gender)?;
        }
        if let Some(age) = self.age {
            if !(1..=120).contains(&age) {
                return Err(
                    StrideError::invalid_input("age").with_reason("must be between 1 and 120")
                );
            }
        }
        require_positive("weight_kg", self.weight_kg)?;
        require_positive("height_cm", self.height_cm)?;

        let fitness_level = match &self.fitness_level {
            Some(level) => Some(
                canonical_fitness_level(level)
                    .ok_or_else(|| {
                        StrideError::invalid_input("fitness_level")
                            .with_reason("must be Beginner, Intermediate or Advanced")
                    })?
                    .to_string(),
            ),
            None => None,
        };

        let mut request = UpdateProfileRequest {
            name: self.name.as_deref().map(|name| name.trim().to_string()),
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            gender: self.gender.as_deref().map(|gender| gender.trim().to_string()),
            fitness_level,
            onboarding_complete: self.onboarding_complete,
        };
        if request.is_empty() {
            return Err(StrideError::invalid_input("profile").with_reason("no fields to update"));
        }
        if request.onboarding_complete.is_none() && request.has_stats() {
            request.onboarding_complete = Some(true);
        }
        Ok(request)
    }
}

fn require_positive(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(value) if !(value.is_finite() && value > 0.0) => {
            Err(StrideError::invalid_input(field).with_reason("must be a positive number"))
        }
        _ => Ok(()),
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StrideError::invalid_input(field).with_reason("must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_params() -> CreateCustomWorkout {
        CreateCustomWorkout {
            user_id: DEFAULT_USER_ID.to_string(),
            title: "Stairs".to_string(),
            duration: "15 Mins".to_string(),
            kcal: "90".to_string(),
        }
    }

    #[test]
    fn test_create_validate_accepts_complete_form() {
        assert!(create_params().validate().is_ok());
    }

    #[test]
    fn test_create_validate_rejects_blank_fields() {
        let mut params = create_params();
        params.duration = "   ".to_string();

        match params.validate().unwrap_err() {
            StrideError::InvalidInput { field, reason } => {
                assert_eq!(field, "duration");
                assert_eq!(reason, "must not be empty");
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_update_validate_builds_request() {
        let params = UpdateCustomWorkout {
            id: 3,
            kcal: Some("150".to_string()),
            ..Default::default()
        };

        let request = params.validate().unwrap();
        assert_eq!(request.kcal.as_deref(), Some("150"));
        assert!(request.title.is_none());
    }

    #[test]
    fn test_update_validate_rejects_blank_title() {
        let params = UpdateCustomWorkout {
            id: 3,
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(StrideError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_profile_stats_complete_onboarding() {
        let params = UpdateProfile {
            age: Some(21),
            fitness_level: Some("intermediate".to_string()),
            ..Default::default()
        };

        let request = params.validate().unwrap();
        assert_eq!(request.fitness_level.as_deref(), Some("Intermediate"));
        assert_eq!(request.onboarding_complete, Some(true));

        let rename = UpdateProfile {
            name: Some("  Ana ".to_string()),
            ..Default::default()
        };
        let request = rename.validate().unwrap();
        assert_eq!(request.name.as_deref(), Some("Ana"));
        assert_eq!(request.onboarding_complete, None);
    }

    #[test]
    fn test_profile_validate_rejects_bad_values() {
        let cases = [
            (UpdateProfile::default(), "profile"),
            (
                UpdateProfile {
                    age: Some(0),
                    ..Default::default()
                },
                "age",
            ),
            (
                UpdateProfile {
                    weight_kg: Some(-60.0),
                    ..Default::default()
                },
                "weight_kg",
            ),
            (
                UpdateProfile {
                    height_cm: Some(f64::NAN),
                    ..Default::default()
                },
                "height_cm",
            ),
            (
                UpdateProfile {
                    fitness_level: Some("Elite".to_string()),
                    ..Default::default()
                },
                "fitness_level",
            ),
            (
                UpdateProfile {
                    name: Some(" ".to_string()),
                    ..Default::default()
                },
                "name",
            ),
        ];

        for (params, expected) in cases {
            match params.validate() {
                Err(StrideError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("Expected InvalidInput for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_user_defaults_when_missing() {
        let params: ListHistory = serde_json::from_str(r#"{"limit": 5}"#).unwrap();
        assert_eq!(params.user_id, DEFAULT_USER_ID);
        assert_eq!(params.limit, Some(5));
    }
}
