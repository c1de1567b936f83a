use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CustomCommands, HistoryArgs, ProfileCommands, StartArgs, WorkoutCommands};

/// Guided workouts and progress tracking in the terminal
///
/// Stride plays stock workouts round by round with a one-second countdown,
/// logs every completed session and reports today's totals. It can also run
/// as an MCP (Model Context Protocol) server so assistants can browse
/// workouts and read progress.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stride/stride.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User whose sessions, custom workouts and profile to use
    #[arg(long, global = true, env = "STRIDE_USER", default_value = "local")]
    pub user: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command the workout catalog is listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the workout catalog
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Play a workout with a live countdown
    #[command(alias = "s")]
    Start(StartArgs),
    /// List completed sessions, newest first
    #[command(alias = "h")]
    History(HistoryArgs),
    /// Show today's totals and recent history
    #[command(alias = "r")]
    Report,
    /// Manage your own workout entries
    #[command(alias = "c")]
    Custom {
        #[command(subcommand)]
        command: CustomCommands,
    },
    /// Show or update your profile
    #[command(alias = "p")]
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Start the MCP server
    Serve,
}
