#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, tz::TimeZone, Timestamp};

    use crate::{
        error::StrideError,
        models::{
            CompletedSessionRecord, DayWindow, ProgressReport, Segment,
            UpdateCustomWorkoutRequest, UpdateProfileRequest, WorkoutLog, WorkoutPlan,
        },
    };

    fn create_test_plan(segments: Vec<Segment>) -> WorkoutPlan {
        WorkoutPlan {
            id: "test".to_string(),
            title: "Test Workout".to_string(),
            description: "A workout for tests".to_string(),
            level: "Beginner".to_string(),
            total_duration_label: "20 Mins".to_string(),
            total_kcal: 200,
            segments,
        }
    }

    fn create_test_log(id: u64, second: i64, kcal: u32, minutes: u32) -> WorkoutLog {
        WorkoutLog {
            id,
            record: CompletedSessionRecord {
                user_id: "user-1".to_string(),
                workout_title: format!("Workout {id}"),
                total_duration_minutes: minutes,
                total_kcal: kcal,
                completed_at: Timestamp::from_second(second).unwrap(),
            },
        }
    }

    #[test]
    fn test_duration_minutes_parses_leading_integer() {
        let mut plan = create_test_plan(vec![Segment::new("1", "Warm Up", 300)]);
        assert_eq!(plan.duration_minutes(), Some(20));

        plan.total_duration_label = "  45 Mins".to_string();
        assert_eq!(plan.duration_minutes(), Some(45));

        plan.total_duration_label = "30".to_string();
        assert_eq!(plan.duration_minutes(), Some(30));

        plan.total_duration_label = "About half an hour".to_string();
        assert_eq!(plan.duration_minutes(), None);
    }

    #[test]
    fn test_total_seconds_sums_segments() {
        let plan = create_test_plan(vec![
            Segment::new("1", "Warm Up", 5),
            Segment::new("2", "Push Ups", 10),
        ]);
        assert_eq!(plan.total_seconds(), 15);
    }

    #[test]
    fn test_validate_rejects_empty_plan() {
        let plan = create_test_plan(vec![]);
        assert!(matches!(
            plan.validate(),
            Err(StrideError::EmptyPlan { plan_id }) if plan_id == "test"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_duration_segment() {
        let plan = create_test_plan(vec![
            Segment::new("1", "Warm Up", 5),
            Segment::new("2", "Rest", 0),
        ]);
        let err = plan.validate().unwrap_err();
        assert!(matches!(err, StrideError::InvalidPlan { .. }));
        assert!(err.to_string().contains("zero duration"));
    }

    #[test]
    fn test_validate_rejects_duplicate_segment_ids() {
        let plan = create_test_plan(vec![
            Segment::new("1", "Warm Up", 5),
            Segment::new("1", "Push Ups", 10),
        ]);
        let err = plan.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate segment id"));
    }

    #[test]
    fn test_validate_rejects_unparseable_label() {
        let mut plan = create_test_plan(vec![Segment::new("1", "Warm Up", 5)]);
        plan.total_duration_label = "a while".to_string();
        assert!(matches!(
            plan.validate(),
            Err(StrideError::InvalidPlan { .. })
        ));
    }

    #[test]
    fn test_day_window_utc() {
        // 2022-01-01 12:00:00 UTC
        let noon = Timestamp::from_second(1641038400).unwrap();
        let window = DayWindow::containing(noon, TimeZone::UTC).unwrap();

        assert_eq!(window.day, date(2022, 1, 1));
        assert_eq!(window.start, Timestamp::from_second(1640995200).unwrap());
        assert_eq!(window.end, Timestamp::from_second(1641081600).unwrap());
        assert!(window.contains(window.start));
        assert!(!window.contains(window.end));
    }

    #[test]
    fn test_progress_report_counts_only_today() {
        let noon = Timestamp::from_second(1641038400).unwrap();
        let window = DayWindow::containing(noon, TimeZone::UTC).unwrap();

        let history = vec![
            create_test_log(3, 1641040000, 320, 45),
            create_test_log(2, 1640996000, 100, 20),
            // 2021-12-31, outside the window
            create_test_log(1, 1640950000, 250, 30),
        ];

        let report = ProgressReport::from_logs(&window, history);

        assert_eq!(report.day, date(2022, 1, 1));
        assert_eq!(report.today.workouts, 2);
        assert_eq!(report.today.calories, 420);
        assert_eq!(report.today.minutes, 65);
        assert_eq!(report.history.len(), 3);
    }

    #[test]
    fn test_progress_report_empty_history() {
        let window = DayWindow::containing(Timestamp::UNIX_EPOCH, TimeZone::UTC).unwrap();
        let report = ProgressReport::from_logs(&window, Vec::new());
        assert_eq!(report.today.workouts, 0);
        assert!(report.history.is_empty());
    }

    #[test]
    fn test_update_request_describes_changes() {
        let request = UpdateCustomWorkoutRequest {
            title: Some("Evening Run".to_string()),
            kcal: Some("400".to_string()),
            ..Default::default()
        };
        assert!(!request.is_empty());
        assert_eq!(
            request.describe_changes(),
            vec![
                "Title set to 'Evening Run'".to_string(),
                "Calories set to '400'".to_string()
            ]
        );
        assert!(UpdateCustomWorkoutRequest::default().is_empty());
    }

    #[test]
    fn test_profile_request_changes() {
        let request = UpdateProfileRequest {
            weight_kg: Some(62.5),
            fitness_level: Some("Advanced".to_string()),
            onboarding_complete: Some(true),
            ..Default::default()
        };
        assert!(!request.is_empty());
        assert!(request.has_stats());
        assert_eq!(
            request.describe_changes(),
            vec![
                "Weight set to 62.5 kg".to_string(),
                "Fitness level set to 'Advanced'".to_string(),
                "Onboarding marked complete".to_string(),
            ]
        );

        let rename = UpdateProfileRequest {
            name: Some("Ana".to_string()),
            ..Default::default()
        };
        assert!(!rename.has_stats());
        assert!(UpdateProfileRequest::default().is_empty());
    }

    #[test]
    fn test_fitness_level_is_case_insensitive() {
        use crate::models::profile::canonical_fitness_level;

        assert_eq!(canonical_fitness_level(" beginner "), Some("Beginner"));
        assert_eq!(canonical_fitness_level("ADVANCED"), Some("Advanced"));
        assert_eq!(canonical_fitness_level("Inter."), None);
    }
}
