//! Discrete-time session state machine.

use jiff::Timestamp;
use log::{debug, info};

use super::state::{PlayerCommand, PlayerSnapshot, SessionPhase, SessionState, Transition};
use crate::{
    error::{Result, StrideError},
    models::{CompletedSessionRecord, Segment, WorkoutPlan},
    sink::CompletionOutbox,
};

/// Plays one workout plan from start to completion or abort.
///
/// The player owns its [`SessionState`] exclusively and changes it only in
/// response to calls on this type. Autonomous progress comes from
/// [`on_tick`](Self::on_tick), one call per elapsed second.
pub struct SessionPlayer {
    plan: WorkoutPlan,
    user_id: String,
    state: SessionState,
    paused_before_quit: bool,
    duration_minutes: u32,
    elapsed_seconds: u64,
    record: Option<CompletedSessionRecord>,
    outbox: CompletionOutbox,
}

impl SessionPlayer {
    /// Creates an idle player. Completion records are queued on `outbox`.
    pub fn new(plan: WorkoutPlan, user_id: impl Into<String>, outbox: CompletionOutbox) -> Self {
        Self {
            plan,
            user_id: user_id.into(),
            state: SessionState::default(),
            paused_before_quit: false,
            duration_minutes: 0,
            elapsed_seconds: 0,
            record: None,
            outbox,
        }
    }

    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    /// Number of ticks applied so far.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// The record produced on completion, if any.
    pub fn record(&self) -> Option<&CompletedSessionRecord> {
        self.record.as_ref()
    }

    /// Segment under the cursor. `None` before the session starts.
    pub fn current_segment(&self) -> Option<&Segment> {
        if self.state.phase == SessionPhase::Idle {
            return None;
        }
        self.plan.segments.get(self.state.current_index)
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        let current = self.current_segment();
        let next_title = match self.state.phase {
            SessionPhase::Idle => self.plan.segments.first(),
            _ => self.plan.segments.get(self.state.current_index + 1),
        }
        .map(|segment| segment.title.clone());

        PlayerSnapshot {
            workout_title: self.plan.title.clone(),
            phase: self.state.phase,
            current_index: self.state.current_index,
            segment_count: self.plan.segments.len(),
            segment_title: current.map(|segment| segment.title.clone()),
            next_segment_title: next_title,
            segment_duration_seconds: current.map_or(0, |segment| segment.duration_seconds),
            remaining_seconds: self.state.remaining_seconds,
            is_paused: self.state.is_paused,
            quit_pending: self.state.quit_pending,
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    /// Moves from `Idle` to `Running` on the first segment.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidTransition` if the session was already
    /// started, and the plan's validation error (`EmptyPlan`, `InvalidPlan`)
    /// if the plan cannot be played. The state is unchanged on error.
    pub fn start(&mut self) -> Result<Transition> {
        if self.state.phase != SessionPhase::Idle {
            return Err(StrideError::InvalidTransition {
                from: self.state.phase.to_string(),
                action: "start".to_string(),
            });
        }
        self.plan.validate()?;

        self.duration_minutes = self.plan.duration_minutes().unwrap_or_default();
        self.state = SessionState {
            current_index: 0,
            remaining_seconds: self.plan.segments[0].duration_seconds,
            is_paused: false,
            phase: SessionPhase::Running,
            quit_pending: false,
        };

        info!(
            "Started '{}' for {} ({} segments)",
            self.plan.title,
            self.user_id,
            self.plan.segments.len()
        );
        Ok(Transition::Started)
    }

    /// Applies one second of countdown. Ignored unless running and unpaused.
    pub fn on_tick(&mut self) -> Transition {
        if self.state.phase != SessionPhase::Running || self.state.is_paused {
            return Transition::Ignored;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        self.elapsed_seconds += 1;

        if self.state.remaining_seconds == 0 {
            self.settle()
        } else {
            Transition::Ticked {
                remaining_seconds: self.state.remaining_seconds,
            }
        }
    }

    pub fn apply(&mut self, command: PlayerCommand) -> Transition {
        let transition = match command {
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Resume => self.resume(),
            PlayerCommand::TogglePause => {
                if self.state.is_paused {
                    self.resume()
                } else {
                    self.pause()
                }
            }
            PlayerCommand::SkipForward => self.skip_forward(),
            PlayerCommand::SkipBackward => self.skip_backward(),
            PlayerCommand::RequestQuit => self.request_quit(),
            PlayerCommand::ConfirmQuit => self.confirm_quit(),
            PlayerCommand::CancelQuit => self.cancel_quit(),
        };
        debug!("{command:?} -> {transition:?}");
        transition
    }

    pub fn pause(&mut self) -> Transition {
        if !self.accepts_controls() || self.state.is_paused {
            return Transition::Ignored;
        }
        self.state.is_paused = true;
        Transition::Paused
    }

    pub fn resume(&mut self) -> Transition {
        if !self.accepts_controls() || !self.state.is_paused {
            return Transition::Ignored;
        }
        self.state.is_paused = false;
        Transition::Resumed
    }

    /// Jumps to the next segment. On the last segment this only acts when the
    /// countdown is already at zero, in which case it completes the session.
    pub fn skip_forward(&mut self) -> Transition {
        if !self.accepts_controls() {
            return Transition::Ignored;
        }
        if self.state.current_index < self.last_index() {
            return self.enter_segment(self.state.current_index + 1, true);
        }
        if self.state.remaining_seconds == 0 {
            return self.complete();
        }
        Transition::Ignored
    }

    /// Returns to the start of the previous segment. No-op on the first.
    pub fn skip_backward(&mut self) -> Transition {
        if !self.accepts_controls() || self.state.current_index == 0 {
            return Transition::Ignored;
        }
        self.enter_segment(self.state.current_index - 1, false)
    }

    /// Pauses the countdown and waits for confirm or cancel.
    pub fn request_quit(&mut self) -> Transition {
        if !self.accepts_controls() {
            return Transition::Ignored;
        }
        self.paused_before_quit = self.state.is_paused;
        self.state.is_paused = true;
        self.state.quit_pending = true;
        Transition::QuitRequested
    }

    /// Drops the quit request and restores the pause state it interrupted.
    pub fn cancel_quit(&mut self) -> Transition {
        if self.state.phase != SessionPhase::Running || !self.state.quit_pending {
            return Transition::Ignored;
        }
        self.state.quit_pending = false;
        self.state.is_paused = self.paused_before_quit;
        Transition::QuitCancelled
    }

    /// Ends the session without a record.
    pub fn confirm_quit(&mut self) -> Transition {
        if self.state.phase != SessionPhase::Running || !self.state.quit_pending {
            return Transition::Ignored;
        }
        self.state.quit_pending = false;
        self.state.phase = SessionPhase::Aborted;
        info!(
            "Aborted '{}' at segment {} with {}s left",
            self.plan.title,
            self.state.current_index + 1,
            self.state.remaining_seconds
        );
        Transition::Aborted
    }

    fn accepts_controls(&self) -> bool {
        self.state.phase == SessionPhase::Running && !self.state.quit_pending
    }

    fn last_index(&self) -> usize {
        self.plan.segments.len().saturating_sub(1)
    }

    /// Resolves a countdown that reached zero.
    fn settle(&mut self) -> Transition {
        if self.state.current_index < self.last_index() {
            self.enter_segment(self.state.current_index + 1, true)
        } else {
            self.complete()
        }
    }

    fn enter_segment(&mut self, index: usize, forward: bool) -> Transition {
        self.state.current_index = index;
        self.state.remaining_seconds = self.plan.segments[index].duration_seconds;
        debug!(
            "Segment {}/{}: {}",
            index + 1,
            self.plan.segments.len(),
            self.plan.segments[index].title
        );
        if forward {
            Transition::Advanced { index }
        } else {
            Transition::Rewound { index }
        }
    }

    fn complete(&mut self) -> Transition {
        if self.record.is_some() {
            return Transition::Ignored;
        }

        self.state.phase = SessionPhase::Completed;
        self.state.remaining_seconds = 0;
        self.state.is_paused = false;

        let record = CompletedSessionRecord {
            user_id: self.user_id.clone(),
            workout_title: self.plan.title.clone(),
            total_duration_minutes: self.duration_minutes,
            total_kcal: self.plan.total_kcal,
            completed_at: Timestamp::now(),
        };
        info!(
            "Completed '{}' for {} after {}s",
            record.workout_title, record.user_id, self.elapsed_seconds
        );

        self.outbox.deliver(record.clone());
        self.record = Some(record);
        Transition::Completed
    }

    #[cfg(test)]
    pub(super) fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }
}
