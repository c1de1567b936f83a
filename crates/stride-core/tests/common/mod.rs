use std::path::PathBuf;

use stride_core::{Segment, Tracker, TrackerBuilder, WorkoutPlan};
use tempfile::TempDir;

/// Helper function to create a tracker on a throwaway database
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path: PathBuf = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// A five-second plan for sessions driven by a fast clock
#[allow(dead_code)]
pub fn short_plan() -> WorkoutPlan {
    WorkoutPlan {
        id: "short".to_string(),
        title: "Short Circuit".to_string(),
        description: "Two quick rounds".to_string(),
        level: "Beginner".to_string(),
        total_duration_label: "5 Mins".to_string(),
        total_kcal: 40,
        segments: vec![
            Segment::new("1", "High Knees", 3),
            Segment::new("2", "Squats", 2),
        ],
    }
}
