//! End-to-end sessions: catalog, player, runner, dispatcher and database sink.

mod common;

use std::time::Duration;

use common::{create_test_tracker, short_plan};
use stride_core::{
    catalog::{resolve_or_default, BuiltinCatalog, WorkoutCatalog},
    params::{ListHistory, UserScope},
    player::{PlayerCommand, SessionPhase, SessionPlayer, SessionRunner},
    sink::{DeliveryStats, SinkDispatcher},
};

const FAST_TICK: Duration = Duration::from_millis(2);

#[tokio::test]
async fn test_completed_session_is_logged() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let dispatcher = SinkDispatcher::spawn(tracker.sink());

    let player = SessionPlayer::new(short_plan(), "runner-1", dispatcher.outbox());
    let handle = SessionRunner::new(player)
        .with_tick_interval(FAST_TICK)
        .spawn()
        .expect("Failed to start session");

    let outcome = handle.wait().await.expect("Session task failed");
    assert_eq!(outcome.phase, SessionPhase::Completed);
    assert_eq!(outcome.snapshot.elapsed_seconds, 5);

    let stats = dispatcher.shutdown().await.expect("Dispatcher failed");
    assert_eq!(stats, DeliveryStats { delivered: 1, failed: 0 });

    let history = tracker
        .list_history(&ListHistory {
            user_id: "runner-1".to_string(),
            limit: None,
        })
        .await
        .expect("Failed to list history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].record.workout_title, "Short Circuit");
    assert_eq!(history[0].record.total_duration_minutes, 5);
    assert_eq!(history[0].record.total_kcal, 40);
    assert_eq!(Some(&history[0].record), outcome.record.as_ref());

    let report = tracker
        .progress_report(&UserScope {
            user_id: "runner-1".to_string(),
        })
        .await
        .expect("Failed to build report");
    assert_eq!(report.today.workouts, 1);
    assert_eq!(report.today.calories, 40);
}

#[tokio::test]
async fn test_aborted_session_is_not_logged() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let dispatcher = SinkDispatcher::spawn(tracker.sink());

    let player = SessionPlayer::new(short_plan(), "local", dispatcher.outbox());
    let handle = SessionRunner::new(player)
        .with_tick_interval(Duration::from_secs(1))
        .spawn()
        .expect("Failed to start session");

    handle.send(PlayerCommand::SkipForward).unwrap();
    handle.send(PlayerCommand::RequestQuit).unwrap();
    handle.send(PlayerCommand::ConfirmQuit).unwrap();

    let outcome = handle.wait().await.expect("Session task failed");
    assert_eq!(outcome.phase, SessionPhase::Aborted);
    assert_eq!(outcome.snapshot.current_index, 1);
    assert!(outcome.record.is_none());

    let stats = dispatcher.shutdown().await.expect("Dispatcher failed");
    assert_eq!(stats, DeliveryStats::default());
    assert!(tracker
        .list_history(&ListHistory::default())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_unknown_workout_plays_default_plan() {
    let catalog = BuiltinCatalog::new().expect("Failed to build catalog");
    let (plan, fell_back) = resolve_or_default(&catalog, "does-not-exist");

    assert!(fell_back);
    assert_eq!(plan, catalog.default_plan());
    assert_eq!(plan.title, "Full Body Basics");

    let (_temp_dir, tracker) = create_test_tracker().await;
    let dispatcher = SinkDispatcher::spawn(tracker.sink());
    let player = SessionPlayer::new(plan, "local", dispatcher.outbox());

    // Skip through the rounds, then let the last one run out on a fast clock
    let handle = SessionRunner::new(player)
        .with_tick_interval(Duration::from_millis(1))
        .spawn()
        .unwrap();
    handle.send(PlayerCommand::SkipForward).unwrap();
    handle.send(PlayerCommand::SkipForward).unwrap();

    let outcome = handle.wait().await.unwrap();
    assert_eq!(outcome.phase, SessionPhase::Completed);
    dispatcher.shutdown().await.unwrap();

    let history = tracker.list_history(&ListHistory::default()).await.unwrap();
    assert_eq!(history[0].record.workout_title, "Full Body Basics");
    assert_eq!(history[0].record.total_duration_minutes, 20);
}
