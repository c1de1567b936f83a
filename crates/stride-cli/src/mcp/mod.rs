//! MCP server for stride
//!
//! Exposes the workout catalog, session history, the daily progress report,
//! custom workouts and user profiles as Model Context Protocol tools over
//! stdio. Sessions are not playable here; the countdown needs a terminal.

use std::{future::Future, sync::Arc};

use anyhow::{Context, Result};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use stride_core::{catalog::BuiltinCatalog, Tracker};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    CreateCustomWorkout, Id, ListHistory, McpHandlers, McpResult, UpdateCustomWorkout,
    UpdateProfile, UserScope, WorkoutRef,
};

const INSTRUCTIONS: &str = r#"Stride is a guided workout player and progress tracker. Workouts are played in the terminal; this server lets you browse them and read what was done.

## Core Concepts
- **Workouts**: stock plans with an ID ("1", "2", ...), level, duration, calories and timed rounds
- **History**: completed sessions, newest first. A session is only logged when every round was finished
- **Progress report**: today's workout count, calories and minutes, plus recent history
- **Custom workouts**: free-form entries (title, duration, calories) a user keeps for themselves
- **Profile**: a user's name, age, weight (kg), height (cm), gender and fitness level. Updates merge; fields left out keep their value

## Users
Every history, report, custom workout and profile tool takes an optional `user_id`. It defaults to "local", the user the terminal app logs as unless configured otherwise.

## Tool Categories
- **Catalog**: list_workouts, show_workout
- **Progress**: list_history, progress_report
- **Custom workouts**: add_custom_workout, list_custom_workouts, show_custom_workout, update_custom_workout, delete_custom_workout
- **Profile**: show_profile, update_profile"#;

/// MCP server for stride
#[derive(Clone)]
pub struct StrideMcpServer {
    tracker: Arc<Tracker>,
    catalog: Arc<BuiltinCatalog>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StrideMcpServer {
    pub fn new(tracker: Tracker) -> Result<Self> {
        let catalog = BuiltinCatalog::new().context("Failed to load workout catalog")?;
        Ok(Self {
            tracker: Arc::new(tracker),
            catalog: Arc::new(catalog),
            tool_router: Self::tool_router(),
        })
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.tracker.clone(), self.catalog.clone())
    }

    #[tool(
        name = "list_workouts",
        description = "List the stock workouts with their IDs, level, total duration and calories. Use an ID with show_workout to see the rounds."
    )]
    async fn list_workouts(&self) -> McpResult {
        self.handlers().list_workouts().await
    }

    #[tool(
        name = "show_workout",
        description = "Show one stock workout by catalog ID, including every round and its length as MM:SS. Unknown IDs are an error."
    )]
    async fn show_workout(&self, params: Parameters<WorkoutRef>) -> McpResult {
        self.handlers().show_workout(params).await
    }

    #[tool(
        name = "list_history",
        description = "List a user's completed sessions, newest first, with completion time, duration in minutes and calories. Optional limit caps the number of entries."
    )]
    async fn list_history(&self, params: Parameters<ListHistory>) -> McpResult {
        self.handlers().list_history(params).await
    }

    #[tool(
        name = "progress_report",
        description = "Today's totals for a user (workouts, calories, minutes) in the server's local time zone, followed by the most recent sessions."
    )]
    async fn progress_report(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().progress_report(params).await
    }

    #[tool(
        name = "add_custom_workout",
        description = "Save a custom workout for a user. Title, duration and kcal are required free-form text, e.g. duration '30 Mins' and kcal '250'. Returns the new ID."
    )]
    async fn add_custom_workout(&self, params: Parameters<CreateCustomWorkout>) -> McpResult {
        self.handlers().add_custom_workout(params).await
    }

    #[tool(
        name = "list_custom_workouts",
        description = "List a user's custom workouts, newest first."
    )]
    async fn list_custom_workouts(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().list_custom_workouts(params).await
    }

    #[tool(
        name = "show_custom_workout",
        description = "Show one custom workout by ID."
    )]
    async fn show_custom_workout(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_custom_workout(params).await
    }

    #[tool(
        name = "update_custom_workout",
        description = "Change the title, duration or kcal of a custom workout. Only the fields given are changed; at least one is required and none may be blank."
    )]
    async fn update_custom_workout(&self, params: Parameters<UpdateCustomWorkout>) -> McpResult {
        self.handlers().update_custom_workout(params).await
    }

    #[tool(
        name = "delete_custom_workout",
        description = "Permanently delete a custom workout by ID. Completed session history is not affected."
    )]
    async fn delete_custom_workout(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_custom_workout(params).await
    }

    #[tool(
        name = "show_profile",
        description = "Show a user's profile: name, age, weight, height, gender, fitness level and whether onboarding is complete."
    )]
    async fn show_profile(&self, params: Parameters<UserScope>) -> McpResult {
        self.handlers().show_profile(params).await
    }

    #[tool(
        name = "update_profile",
        description = "Merge fields into a user's profile, creating it if needed. Fields left out keep their value. fitness_level is Beginner, Intermediate or Advanced. Saving a body stat marks onboarding complete unless onboarding_complete is given."
    )]
    async fn update_profile(&self, params: Parameters<UpdateProfile>) -> McpResult {
        self.handlers().update_profile(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StrideMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stride".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StrideMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting stride MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
