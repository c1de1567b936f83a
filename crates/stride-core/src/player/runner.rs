//! Clock-driven runner for a session player.

use std::time::Duration;

use log::{debug, info};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use super::{
    machine::SessionPlayer,
    state::{PlayerCommand, PlayerSnapshot, SessionPhase, Transition},
};
use crate::{
    error::{Result, StrideError},
    models::CompletedSessionRecord,
};

/// Period between countdown ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Final state of a session whose task ran to a terminal phase.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub phase: SessionPhase,
    pub record: Option<CompletedSessionRecord>,
    pub snapshot: PlayerSnapshot,
}

/// Starts a player and drives it from a tokio interval.
pub struct SessionRunner {
    player: SessionPlayer,
    tick_interval: Duration,
}

impl SessionRunner {
    pub fn new(player: SessionPlayer) -> Self {
        Self {
            player,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Overrides the tick period. Intended for demos and tests.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Starts the session and spawns its clock task on the current runtime.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` for a zero tick interval and the
    /// player's start error if the plan cannot be played. Nothing is spawned
    /// on error.
    pub fn spawn(self) -> Result<SessionHandle> {
        let Self {
            mut player,
            tick_interval,
        } = self;

        if tick_interval.is_zero() {
            return Err(StrideError::invalid_input("tick_interval").with_reason("must be positive"));
        }
        player.start()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(player.snapshot());
        let task = tokio::spawn(run_session(player, tick_interval, command_rx, snapshot_tx));

        Ok(SessionHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            task: Some(task),
        })
    }
}

async fn run_session(
    mut player: SessionPlayer,
    period: Duration,
    mut commands: mpsc::UnboundedReceiver<PlayerCommand>,
    snapshots: watch::Sender<PlayerSnapshot>,
) -> SessionOutcome {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    // A stalled runtime must not replay missed seconds in a burst.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut commands_open = true;

    while !player.phase().is_terminal() {
        let transition = tokio::select! {
            _ = ticker.tick() => player.on_tick(),
            command = commands.recv(), if commands_open => match command {
                Some(command) => player.apply(command),
                None => {
                    debug!("Command channel closed; session continues on the clock");
                    commands_open = false;
                    Transition::Ignored
                }
            },
        };

        if transition.restarts_countdown() {
            ticker.reset();
        }
        if transition != Transition::Ignored {
            snapshots.send_replace(player.snapshot());
        }
    }

    info!("Session '{}' ended: {}", player.plan().title, player.phase());

    SessionOutcome {
        phase: player.phase(),
        record: player.record().cloned(),
        snapshot: player.snapshot(),
    }
}

/// Control surface for a running session.
///
/// Dropping the handle aborts the session task, which stops the clock; a
/// session torn down this way never produces a record.
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<PlayerCommand>,
    snapshots: watch::Receiver<PlayerSnapshot>,
    task: Option<JoinHandle<SessionOutcome>>,
}

impl SessionHandle {
    /// Queues a control for the session.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidTransition` once the session has ended.
    pub fn send(&self, command: PlayerCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| StrideError::InvalidTransition {
                from: self.snapshot().phase.to_string(),
                action: format!("{command:?}"),
            })
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<PlayerSnapshot> {
        self.snapshots.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }

    /// Waits for the session to reach a terminal phase.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Configuration` if the session task panicked or
    /// was cancelled.
    pub async fn wait(mut self) -> Result<SessionOutcome> {
        let outcome = match self.task.as_mut() {
            Some(task) => task.await.map_err(StrideError::join),
            None => Err(StrideError::Configuration {
                message: "Session task already consumed".to_string(),
            }),
        };
        self.task = None;
        outcome
    }

    /// Stops the clock and returns the outcome if the session had already
    /// ended on its own.
    ///
    /// A session that reached `Completed` before the cancel took effect keeps
    /// its outcome, and its record stays in the outbox.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Configuration` if the session task panicked.
    pub async fn cancel(mut self) -> Result<Option<SessionOutcome>> {
        let Some(task) = self.task.take() else {
            return Ok(None);
        };
        task.abort();

        match task.await {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) if e.is_cancelled() => {
                debug!("Session cancelled before it ended");
                Ok(None)
            }
            Err(e) => Err(StrideError::join(e)),
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                debug!("Session handle dropped; cancelling clock");
            }
            task.abort();
        }
    }
}
