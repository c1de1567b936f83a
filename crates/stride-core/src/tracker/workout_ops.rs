//! Custom workout operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::CustomWorkout,
    params::{CreateCustomWorkout, Id, UpdateCustomWorkout, UserScope},
};

impl Tracker {
    /// Creates a custom workout after checking all fields are filled in.
    pub async fn create_custom_workout(
        &self,
        params: &CreateCustomWorkout,
    ) -> Result<CustomWorkout> {
        params.validate()?;
        let params = params.clone();

        self.with_database(move |db| {
            db.create_custom_workout(
                params.user_id.trim(),
                params.title.trim(),
                params.duration.trim(),
                params.kcal.trim(),
            )
        })
        .await
    }

    pub async fn get_custom_workout(&self, params: &Id) -> Result<Option<CustomWorkout>> {
        let id = params.id;
        self.with_database(move |db| db.get_custom_workout(id)).await
    }

    /// Lists a user's custom workouts, newest first.
    pub async fn list_custom_workouts(&self, params: &UserScope) -> Result<Vec<CustomWorkout>> {
        let user_id = params.user_id.clone();
        self.with_database(move |db| db.list_custom_workouts(&user_id))
            .await
    }

    /// Applies the provided fields, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` for blank fields and
    /// `StrideError::CustomWorkoutNotFound` for unknown IDs.
    pub async fn update_custom_workout(
        &self,
        params: &UpdateCustomWorkout,
    ) -> Result<CustomWorkout> {
        let request = params.validate()?;
        let id = params.id;
        self.with_database(move |db| db.update_custom_workout(id, request))
            .await
    }

    /// Deletes a custom workout, returning it if it existed.
    pub async fn delete_custom_workout(&self, params: &Id) -> Result<Option<CustomWorkout>> {
        let id = params.id;

        self.with_database(move |db| {
            let workout = db.get_custom_workout(id)?;
            if workout.is_some() {
                db.delete_custom_workout(id)?;
            }
            Ok(workout)
        })
        .await
    }
}
