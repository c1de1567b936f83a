//! Line-driven front-end for a guided workout.
//!
//! The session runs on its own task. This module only relays stdin lines to
//! it as commands and prints every snapshot it publishes. Stdin is read on a
//! plain thread because a blocking read cannot be cancelled and would
//! otherwise hold up runtime shutdown.

use std::{io, thread, time::Duration};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use stride_core::{
    display::Clock,
    models::WorkoutPlan,
    player::{PlayerCommand, SessionOutcome, SessionPhase, SessionPlayer, SessionRunner},
    sink::SinkDispatcher,
    Tracker,
};
use tokio::sync::mpsc;

use crate::renderer::TerminalRenderer;

const CONTROLS_HELP: &str =
    "Controls: p pause | r resume | n next | b back | q quit (then y to confirm, n to continue)";

/// Turns input lines into player commands.
///
/// After `q` the next `y` or `n` answers the quit question; otherwise `n`
/// means next round.
#[derive(Debug, Default)]
pub struct Controls {
    awaiting_quit_answer: bool,
}

impl Controls {
    pub fn interpret(&mut self, line: &str) -> Option<PlayerCommand> {
        let input = line.trim().to_lowercase();

        if self.awaiting_quit_answer {
            match input.as_str() {
                "y" | "yes" => {
                    self.awaiting_quit_answer = false;
                    return Some(PlayerCommand::ConfirmQuit);
                }
                "n" | "no" => {
                    self.awaiting_quit_answer = false;
                    return Some(PlayerCommand::CancelQuit);
                }
                _ => {}
            }
        }

        let command = match input.as_str() {
            "" => None,
            "p" => Some(PlayerCommand::Pause),
            "r" => Some(PlayerCommand::Resume),
            "n" => Some(PlayerCommand::SkipForward),
            "b" => Some(PlayerCommand::SkipBackward),
            "q" => Some(PlayerCommand::RequestQuit),
            word => word.parse().ok(),
        };

        match command {
            Some(PlayerCommand::RequestQuit) => self.awaiting_quit_answer = true,
            Some(PlayerCommand::ConfirmQuit | PlayerCommand::CancelQuit) => {
                self.awaiting_quit_answer = false;
            }
            _ => {}
        }
        command
    }
}

enum Exit {
    Finished,
    Interrupted,
}

/// Plays `plan` until it completes, is quit, or the user hits Ctrl-C.
pub async fn run(
    plan: WorkoutPlan,
    user: &str,
    tracker: &Tracker,
    renderer: &TerminalRenderer,
    tick_interval: Duration,
) -> Result<()> {
    renderer.render(&format!(
        "# {}\n\n{} rounds, {}, {} kcal\n\n{CONTROLS_HELP}\n\n",
        plan.title,
        plan.segments.len(),
        plan.total_duration_label,
        plan.total_kcal
    ))?;

    let dispatcher = SinkDispatcher::spawn(tracker.sink());
    let player = SessionPlayer::new(plan, user, dispatcher.outbox());
    let handle = SessionRunner::new(player)
        .with_tick_interval(tick_interval)
        .spawn()
        .context("Failed to start workout")?;

    let mut snapshots = handle.subscribe();
    let mut input = spawn_stdin_reader();
    let mut input_open = true;
    let mut controls = Controls::default();

    renderer.status(&handle.snapshot().to_string())?;

    let exit = loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break Exit::Finished;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                renderer.status(&snapshot.to_string())?;
                if snapshot.phase.is_terminal() {
                    break Exit::Finished;
                }
            }
            line = input.recv(), if input_open => match line {
                Some(line) => match controls.interpret(&line) {
                    Some(command) => {
                        if let Err(e) = handle.send(command) {
                            debug!("Control not delivered: {e}");
                        }
                    }
                    None if !line.trim().is_empty() => renderer.status(CONTROLS_HELP)?,
                    None => {}
                },
                None => {
                    debug!("Stdin closed; workout continues on the clock");
                    input_open = false;
                }
            },
            _ = tokio::signal::ctrl_c() => break Exit::Interrupted,
        }
    };
    renderer.end_status()?;

    let summary = match exit {
        Exit::Finished => {
            let outcome = handle.wait().await.context("Workout session failed")?;
            summary(&outcome)
        }
        Exit::Interrupted => {
            info!("Interrupted; cancelling session");
            let outcome = handle.cancel().await.context("Workout session failed")?;
            interrupted_summary(outcome.as_ref())
        }
    };

    let stats = dispatcher
        .shutdown()
        .await
        .context("Failed to flush workout log")?;
    if stats.failed > 0 {
        warn!("{} completed session(s) could not be logged", stats.failed);
    }

    renderer.render(&summary)
}

fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (sender, receiver) = mpsc::unbounded_channel();

    thread::spawn(move || {
        for line in io::stdin().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read stdin: {e}");
                    break;
                }
            }
        }
    });

    receiver
}

fn summary(outcome: &SessionOutcome) -> String {
    match (outcome.phase, &outcome.record) {
        (SessionPhase::Completed, Some(record)) => format!(
            "## Workout complete\n\n- **Workout**: {}\n- **Duration**: {} min\n- **Calories**: {} kcal\n- **Time played**: {}\n",
            record.workout_title,
            record.total_duration_minutes,
            record.total_kcal,
            Clock(u32::try_from(outcome.snapshot.elapsed_seconds).unwrap_or(u32::MAX))
        ),
        _ => "## Workout ended early\n\nNothing was logged.\n".to_string(),
    }
}

/// A session that ended before Ctrl-C took effect keeps its own summary.
fn interrupted_summary(outcome: Option<&SessionOutcome>) -> String {
    match outcome {
        Some(outcome) => summary(outcome),
        None => "## Workout cancelled\n\nNothing was logged.\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use stride_core::{models::Segment, player::SessionHandle, sink::CompletionOutbox};

    use super::*;

    fn spawn_session(seconds: u32) -> SessionHandle {
        let plan = WorkoutPlan {
            id: "9".to_string(),
            title: "Quick Burn".to_string(),
            description: String::new(),
            level: "Beginner".to_string(),
            total_duration_label: "1 Mins".to_string(),
            total_kcal: 15,
            segments: vec![Segment::new("1", "Burpees", seconds)],
        };
        let (outbox, _records) = CompletionOutbox::channel();
        SessionRunner::new(SessionPlayer::new(plan, "local", outbox))
            .with_tick_interval(Duration::from_millis(1))
            .spawn()
            .unwrap()
    }

    #[tokio::test]
    async fn test_interrupt_after_completion_reports_logged_workout() {
        let handle = spawn_session(2);
        let mut snapshots = handle.subscribe();
        snapshots
            .wait_for(|s| s.phase == SessionPhase::Completed)
            .await
            .unwrap();

        let outcome = handle.cancel().await.unwrap();
        let text = interrupted_summary(outcome.as_ref());
        assert!(text.starts_with("## Workout complete"));
        assert!(text.contains("- **Calories**: 15 kcal"));
        assert!(!text.contains("Nothing was logged."));
    }

    #[tokio::test]
    async fn test_interrupt_while_running_logs_nothing() {
        let handle = spawn_session(3600);

        let outcome = handle.cancel().await.unwrap();
        assert!(outcome.is_none());
        assert_eq!(
            interrupted_summary(outcome.as_ref()),
            "## Workout cancelled\n\nNothing was logged.\n"
        );
    }

    #[test]
    fn test_single_letter_controls() {
        let mut controls = Controls::default();
        assert_eq!(controls.interpret("p"), Some(PlayerCommand::Pause));
        assert_eq!(controls.interpret(" R "), Some(PlayerCommand::Resume));
        assert_eq!(controls.interpret("n"), Some(PlayerCommand::SkipForward));
        assert_eq!(controls.interpret("b"), Some(PlayerCommand::SkipBackward));
        assert_eq!(controls.interpret(""), None);
        assert_eq!(controls.interpret("jump"), None);
    }

    #[test]
    fn test_quit_question_takes_y_and_n() {
        let mut controls = Controls::default();
        assert_eq!(controls.interpret("q"), Some(PlayerCommand::RequestQuit));
        assert_eq!(controls.interpret("n"), Some(PlayerCommand::CancelQuit));

        // With the question answered, n means next round again
        assert_eq!(controls.interpret("n"), Some(PlayerCommand::SkipForward));

        controls.interpret("q");
        assert_eq!(controls.interpret("yes"), Some(PlayerCommand::ConfirmQuit));
    }

    #[test]
    fn test_words_are_accepted() {
        let mut controls = Controls::default();
        assert_eq!(controls.interpret("pause"), Some(PlayerCommand::Pause));
        assert_eq!(controls.interpret("quit"), Some(PlayerCommand::RequestQuit));
        assert_eq!(controls.interpret("cancel"), Some(PlayerCommand::CancelQuit));
        assert_eq!(controls.interpret("n"), Some(PlayerCommand::SkipForward));
    }
}
