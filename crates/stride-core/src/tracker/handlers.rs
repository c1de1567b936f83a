//! Tracker operations that return display wrappers.
//!
//! The CLI and the MCP server both call these so that a given operation
//! prints the same markdown everywhere.

use super::Tracker;
use crate::{
    display::{CreateResult, CustomWorkouts, DeleteResult, UpdateResult, WorkoutLogs},
    error::Result,
    models::{CustomWorkout, UserProfile},
    params::{CreateCustomWorkout, Id, ListHistory, UpdateCustomWorkout, UpdateProfile, UserScope},
};

impl Tracker {
    pub async fn list_history_result(&self, params: &ListHistory) -> Result<WorkoutLogs> {
        self.list_history(params).await.map(WorkoutLogs)
    }

    pub async fn list_custom_workouts_result(
        &self,
        params: &UserScope,
    ) -> Result<CustomWorkouts> {
        self.list_custom_workouts(params).await.map(CustomWorkouts)
    }

    pub async fn create_custom_workout_result(
        &self,
        params: &CreateCustomWorkout,
    ) -> Result<CreateResult<CustomWorkout>> {
        self.create_custom_workout(params).await.map(CreateResult::new)
    }

    /// Updates a custom workout and records which fields were changed.
    pub async fn update_custom_workout_result(
        &self,
        params: &UpdateCustomWorkout,
    ) -> Result<UpdateResult<CustomWorkout>> {
        let changes = params.validate()?.describe_changes();
        let workout = self.update_custom_workout(params).await?;
        Ok(UpdateResult::with_changes(workout, changes))
    }

    /// Deletes a custom workout. `None` if nothing had that ID.
    pub async fn delete_custom_workout_result(
        &self,
        params: &Id,
    ) -> Result<Option<DeleteResult<CustomWorkout>>> {
        Ok(self
            .delete_custom_workout(params)
            .await?
            .map(DeleteResult::new))
    }

    /// Merges into a profile and records which fields were changed.
    pub async fn update_profile_result(
        &self,
        params: &UpdateProfile,
    ) -> Result<UpdateResult<UserProfile>> {
        let changes = params.validate()?.describe_changes();
        let profile = self.update_profile(params).await?;
        Ok(UpdateResult::with_changes(profile, changes))
    }
}
