//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;
use stride_core::{
    catalog::{BuiltinCatalog, Lookup, WorkoutCatalog},
    display::{OperationStatus, WorkoutPlans},
    params as core, Tracker,
};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types stay free of rmcp. The wrapper is serde-transparent so
// the JSON shape is exactly the core type's, and it forwards the schema.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type WorkoutRef = McpParams<core::WorkoutRef>;
pub type UserScope = McpParams<core::UserScope>;
pub type ListHistory = McpParams<core::ListHistory>;
pub type CreateCustomWorkout = McpParams<core::CreateCustomWorkout>;
pub type UpdateCustomWorkout = McpParams<core::UpdateCustomWorkout>;
pub type UpdateProfile = McpParams<core::UpdateProfile>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Arc<Tracker>,
    catalog: Arc<BuiltinCatalog>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Tracker>, catalog: Arc<BuiltinCatalog>) -> Self {
        Self { tracker, catalog }
    }

    pub async fn list_workouts(&self) -> McpResult {
        debug!("list_workouts");

        let plans = WorkoutPlans(self.catalog.list());
        text(format!("# Workouts\n\n{plans}"))
    }

    pub async fn show_workout(&self, Parameters(params): Parameters<WorkoutRef>) -> McpResult {
        debug!("show_workout: {params:?}");

        let workout_id = &params.as_ref().workout_id;
        match self.catalog.lookup(workout_id) {
            Lookup::Found(plan) => text(plan.to_string()),
            Lookup::NotFound => Err(McpError::invalid_params(
                format!("Workout '{workout_id}' not found"),
                None,
            )),
        }
    }

    pub async fn list_history(&self, Parameters(params): Parameters<ListHistory>) -> McpResult {
        debug!("list_history: {params:?}");

        let logs = self
            .tracker
            .list_history_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list history", &e))?;

        text(format!("# History\n\n{logs}"))
    }

    pub async fn progress_report(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("progress_report: {params:?}");

        let report = self
            .tracker
            .progress_report(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to build progress report", &e))?;

        text(report.to_string())
    }

    pub async fn add_custom_workout(
        &self,
        Parameters(params): Parameters<CreateCustomWorkout>,
    ) -> McpResult {
        debug!("add_custom_workout: {params:?}");

        let result = self
            .tracker
            .create_custom_workout_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add custom workout", &e))?;

        text(result.to_string())
    }

    pub async fn list_custom_workouts(
        &self,
        Parameters(params): Parameters<UserScope>,
    ) -> McpResult {
        debug!("list_custom_workouts: {params:?}");

        let workouts = self
            .tracker
            .list_custom_workouts_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list custom workouts", &e))?;

        text(format!("# Custom Workouts\n\n{workouts}"))
    }

    pub async fn show_custom_workout(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_custom_workout: {params:?}");

        let id = params.as_ref().id;
        let workout = self
            .tracker
            .get_custom_workout(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get custom workout", &e))?
            .ok_or_else(|| {
                McpError::invalid_params(format!("Custom workout with ID {id} not found"), None)
            })?;

        text(workout.to_string())
    }

    pub async fn update_custom_workout(
        &self,
        Parameters(params): Parameters<UpdateCustomWorkout>,
    ) -> McpResult {
        debug!("update_custom_workout: {params:?}");

        let result = self
            .tracker
            .update_custom_workout_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update custom workout", &e))?;

        text(result.to_string())
    }

    pub async fn delete_custom_workout(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_custom_workout: {params:?}");

        let id = params.as_ref().id;
        let deleted = self
            .tracker
            .delete_custom_workout_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete custom workout", &e))?;

        match deleted {
            Some(result) => text(result.to_string()),
            None => text(OperationStatus::not_found("Custom workout", id).to_string()),
        }
    }

    pub async fn show_profile(&self, Parameters(params): Parameters<UserScope>) -> McpResult {
        debug!("show_profile: {params:?}");

        let profile = self
            .tracker
            .get_profile(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get profile", &e))?;

        match profile {
            Some(profile) => text(profile.to_string()),
            None => text(OperationStatus::missing_profile(&params.as_ref().user_id).to_string()),
        }
    }

    pub async fn update_profile(&self, Parameters(params): Parameters<UpdateProfile>) -> McpResult {
        debug!("update_profile: {params:?}");

        let result = self
            .tracker
            .update_profile_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update profile", &e))?;

        text(result.to_string())
    }
}
