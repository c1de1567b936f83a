//! Stride CLI Application
//!
//! Plays guided workouts in the terminal, keeps the session history and
//! serves it over MCP.

mod args;
mod cli;
mod mcp;
mod play;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, StrideMcpServer};
use renderer::TerminalRenderer;
use stride_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Stride started with database {}", tracker.database_path().display());

    if let Some(Serve) = command {
        info!("Starting stride MCP server");
        return run_stdio_server(StrideMcpServer::new(tracker)?)
            .await
            .context("MCP server failed");
    }

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color), user)?;

    match command {
        Some(Workout { command }) => cli.handle_workout_command(command).await,
        Some(Start(args)) => cli.start_workout(args).await,
        Some(History(args)) => cli.list_history(args).await,
        Some(Report) => cli.show_report().await,
        Some(Custom { command }) => cli.handle_custom_command(command).await,
        Some(Profile { command }) => cli.handle_profile_command(command).await,
        Some(Serve) | None => cli.list_workouts().await,
    }
}
