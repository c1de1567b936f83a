//! Core library for the stride workout tracker.
//!
//! The crate covers three concerns:
//!
//! - **Catalog** ([`catalog`]): the stock workouts, looked up by ID with an
//!   explicit fallback to the default plan.
//! - **Session player** ([`player`]): a deterministic state machine that
//!   counts down a plan's segments, plus a tokio runner that feeds it one tick
//!   per second. Completion records leave the player through a non-blocking
//!   [`sink::CompletionOutbox`].
//! - **Tracking** ([`tracker`]): SQLite-backed history, daily progress,
//!   custom workouts and user profiles behind an async façade.
//!
//! Domain models implement [`std::fmt::Display`] as markdown; see
//! [`display`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stride_core::{
//!     catalog::{resolve_or_default, BuiltinCatalog},
//!     player::{SessionPlayer, SessionRunner},
//!     sink::SinkDispatcher,
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("stride.db"))
//!     .build()
//!     .await?;
//!
//! let catalog = BuiltinCatalog::new()?;
//! let (plan, _fallback) = resolve_or_default(&catalog, "3");
//!
//! let dispatcher = SinkDispatcher::spawn(tracker.sink());
//! let player = SessionPlayer::new(plan, "local", dispatcher.outbox());
//! let outcome = SessionRunner::new(player).spawn()?.wait().await?;
//! println!("{}", outcome.snapshot);
//!
//! dispatcher.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod player;
pub mod sink;
pub mod tracker;

// Re-export commonly used types
pub use catalog::{BuiltinCatalog, Lookup, WorkoutCatalog};
pub use db::Database;
pub use display::{
    CreateResult, CustomWorkouts, DeleteResult, OperationStatus, UpdateResult, WorkoutLogs,
    WorkoutPlans,
};
pub use error::{Result, StrideError};
pub use models::{
    CompletedSessionRecord, CustomWorkout, ProgressReport, Segment, UserProfile, WorkoutLog,
    WorkoutPlan,
};
pub use params::{
    CreateCustomWorkout, Id, ListHistory, UpdateCustomWorkout, UpdateProfile, UserScope,
    WorkoutRef,
};
pub use player::{SessionPhase, SessionPlayer, SessionRunner};
pub use tracker::{DatabaseSink, Tracker, TrackerBuilder};
