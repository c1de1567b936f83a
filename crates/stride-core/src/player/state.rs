//! Session phases, state, commands and snapshots.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Created but not started
    #[default]
    Idle,

    /// Counting down through segments
    Running,

    /// Last segment finished; a record was produced
    Completed,

    /// Quit by the user; no record
    Aborted,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Running => "running",
            SessionPhase::Completed => "completed",
            SessionPhase::Aborted => "aborted",
        }
    }

    /// Completed and Aborted accept no further input.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Completed | SessionPhase::Aborted)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable state owned by one player for the length of a session.
///
/// While `phase` is `Running`, `current_index` is a valid segment index and
/// `remaining_seconds` never exceeds that segment's duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_index: usize,
    pub remaining_seconds: u32,
    pub is_paused: bool,
    pub phase: SessionPhase,
    /// A quit was requested and awaits confirmation. The countdown is paused
    /// while this is set.
    pub quit_pending: bool,
}

/// User controls accepted by a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Pause,
    Resume,
    TogglePause,
    SkipForward,
    SkipBackward,
    RequestQuit,
    ConfirmQuit,
    CancelQuit,
}

impl FromStr for PlayerCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pause" => Ok(PlayerCommand::Pause),
            "resume" => Ok(PlayerCommand::Resume),
            "toggle" => Ok(PlayerCommand::TogglePause),
            "next" | "skip" | "forward" => Ok(PlayerCommand::SkipForward),
            "back" | "previous" | "backward" => Ok(PlayerCommand::SkipBackward),
            "quit" => Ok(PlayerCommand::RequestQuit),
            "confirm" => Ok(PlayerCommand::ConfirmQuit),
            "cancel" => Ok(PlayerCommand::CancelQuit),
            _ => Err(format!("Invalid player command: {s}")),
        }
    }
}

/// What a single input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Input had no effect in the current state
    Ignored,
    Started,
    Ticked { remaining_seconds: u32 },
    Advanced { index: usize },
    Rewound { index: usize },
    Paused,
    Resumed,
    QuitRequested,
    QuitCancelled,
    Completed,
    Aborted,
}

impl Transition {
    /// Whether the next tick should be a full period away. True for every
    /// transition that begins a fresh countdown or lifts a pause.
    pub fn restarts_countdown(&self) -> bool {
        matches!(
            self,
            Transition::Started
                | Transition::Advanced { .. }
                | Transition::Rewound { .. }
                | Transition::Resumed
                | Transition::QuitCancelled
        )
    }
}

/// Read-only view of a session for presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub workout_title: String,
    pub phase: SessionPhase,
    pub current_index: usize,
    pub segment_count: usize,
    pub segment_title: Option<String>,
    pub next_segment_title: Option<String>,
    pub segment_duration_seconds: u32,
    pub remaining_seconds: u32,
    pub is_paused: bool,
    pub quit_pending: bool,
    /// Ticks applied so far
    pub elapsed_seconds: u64,
}
