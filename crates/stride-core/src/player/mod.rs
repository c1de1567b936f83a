//! Guided workout session player.
//!
//! The player is split in two layers:
//!
//! - [`SessionPlayer`]: a deterministic state machine. Time only moves when
//!   the owner calls [`SessionPlayer::on_tick`], so tests can step through a
//!   whole session without waiting on a clock.
//! - [`SessionRunner`]: drives a player from a one-second tokio interval and
//!   a command channel, publishing [`PlayerSnapshot`]s as state changes.
//!
//! ```text
//!            start()
//!   Idle ───────────▶ Running ──(last segment hits 0)──▶ Completed
//!                     │  ▲   │
//!        request_quit │  │   │ tick / skip / pause / resume
//!                     ▼  │   └──────────────┐
//!                  quit pending ◀───────────┘
//!                     │  └── cancel_quit ──▶ Running
//!                     └── confirm_quit ───▶ Aborted
//! ```

mod machine;
mod runner;
mod state;


pub use machine::SessionPlayer;
pub use runner::{SessionHandle, SessionOutcome, SessionRunner, DEFAULT_TICK_INTERVAL};
pub use state::{PlayerCommand, PlayerSnapshot, SessionPhase, SessionState, Transition};
