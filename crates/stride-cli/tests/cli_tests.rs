use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a throwaway
/// database
fn stride_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("stride").expect("Failed to find stride binary");
    cmd.env_remove("STRIDE_USER")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Extract the ID from "Created custom workout with ID: N"
fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.strip_prefix("Created custom workout with ID: "))
        .map(|id| id.trim().to_string())
        .expect("No ID in output")
}

#[test]
fn test_cli_lists_workouts_without_command() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Workouts"))
        .stdout(predicate::str::contains("## Upper Body Power (ID: 1)"))
        .stdout(predicate::str::contains("## Leg Shred (ID: 2)"))
        .stdout(predicate::str::contains("## Morning Yoga (ID: 3)"));
}

#[test]
fn test_cli_show_workout() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["workout", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Leg Shred"))
        .stdout(predicate::str::contains("- Calories: 250 kcal"))
        .stdout(predicate::str::contains("1. Jump Squats (03:00)"))
        .stdout(predicate::str::contains("3. Calf Raises (02:00)"));
}

#[test]
fn test_cli_show_unknown_workout_fails() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["workout", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workout '42' not found"));
}

#[test]
fn test_cli_empty_history_and_report() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("# History"))
        .stdout(predicate::str::contains("No workouts logged yet."));

    stride_cmd(&temp_dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Progress for"))
        .stdout(predicate::str::contains("- Workouts: 0"))
        .stdout(predicate::str::contains("- Calories: 0 kcal"));
}

#[test]
fn test_cli_completed_workout_is_logged() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["start", "3", "--tick-millis", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Round 1/3 Sun Salutation"))
        .stdout(predicate::str::contains("## Workout complete"))
        .stdout(predicate::str::contains("- **Duration**: 20 min"))
        .stdout(predicate::str::contains("- **Calories**: 100 kcal"));

    stride_cmd(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Morning Yoga (ID: 1)"));

    stride_cmd(&temp_dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Workouts: 1"))
        .stdout(predicate::str::contains("- Calories: 100 kcal"))
        .stdout(predicate::str::contains("- Minutes: 20"));
}

#[test]
fn test_cli_history_is_per_user() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["--user", "ana", "start", "2", "--tick-millis", "1"])
        .write_stdin("")
        .assert()
        .success();

    stride_cmd(&temp_dir)
        .args(["history", "--user", "ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leg Shred"));

    stride_cmd(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts logged yet."));
}

#[test]
fn test_cli_unknown_workout_plays_default() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["start", "99", "--tick-millis", "1"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workout '99' not found, starting Full Body Basics instead.",
        ))
        .stdout(predicate::str::contains("## Workout complete"));
}

#[test]
fn test_cli_quit_workout_is_not_logged() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["start", "1"])
        .write_stdin("q\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Upper Body Power: quit"))
        .stdout(predicate::str::contains("Nothing was logged."));

    stride_cmd(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts logged yet."));
}

#[test]
fn test_cli_custom_workout_lifecycle() {
    let temp_dir = create_cli_test_environment();

    let output = stride_cmd(&temp_dir)
        .args(["custom", "add", "Stairs", "--duration", "15 Mins", "--kcal", "90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Stairs"))
        .get_output()
        .stdout
        .clone();
    let id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));

    stride_cmd(&temp_dir)
        .args(["custom", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Custom Workouts"))
        .stdout(predicate::str::contains("- **Duration**: 15 Mins"));

    stride_cmd(&temp_dir)
        .args(["custom", "update", &id, "--kcal", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("- **Calories**: 120"));

    stride_cmd(&temp_dir)
        .args(["custom", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted custom workout 'Stairs'"));

    stride_cmd(&temp_dir)
        .args(["custom", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No custom workouts found."));
}

#[test]
fn test_cli_custom_workout_validation() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["custom", "add", "  ", "--duration", "15 Mins", "--kcal", "90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));

    stride_cmd(&temp_dir)
        .args(["custom", "update", "7", "--title", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Custom workout with ID 7 not found"));

    stride_cmd(&temp_dir)
        .args(["custom", "delete", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom workout with ID 7 not found"));
}

#[test]
fn test_cli_custom_workouts_are_per_user() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .env("STRIDE_USER", "ana")
        .args(["custom", "add", "Rowing", "-d", "25 Mins", "-k", "210"])
        .assert()
        .success();

    stride_cmd(&temp_dir)
        .args(["custom", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No custom workouts found."));

    stride_cmd(&temp_dir)
        .args(["custom", "list", "--user", "ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rowing"));
}

#[test]
fn test_cli_profile_set_merges_fields() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile saved for user 'local'"));

    stride_cmd(&temp_dir)
        .args(["profile", "set", "--name", "Ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated profile for local"))
        .stdout(predicate::str::contains("- **Onboarding**: pending"));

    stride_cmd(&temp_dir)
        .args([
            "profile", "set", "--age", "21", "--weight", "60", "--height", "170", "--level",
            "advanced",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Fitness level set to 'Advanced'"));

    stride_cmd(&temp_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Profile for local"))
        .stdout(predicate::str::contains("- **Name**: Ana"))
        .stdout(predicate::str::contains("- **Age**: 21"))
        .stdout(predicate::str::contains("- **Weight**: 60 kg"))
        .stdout(predicate::str::contains("- **Gender**: Not set"))
        .stdout(predicate::str::contains("- **Onboarding**: complete"));

    stride_cmd(&temp_dir)
        .args(["profile", "show", "--user", "ben"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profile saved for user 'ben'"));
}

#[test]
fn test_cli_profile_validation() {
    let temp_dir = create_cli_test_environment();

    stride_cmd(&temp_dir)
        .args(["profile", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no fields to update"));

    stride_cmd(&temp_dir)
        .args(["profile", "set", "--level", "Elite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "must be Beginner, Intermediate or Advanced",
        ));
}
