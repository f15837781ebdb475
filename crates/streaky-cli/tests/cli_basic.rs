//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a temporary data directory and
//! verify its JSON output.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_streaky"))
        .env("STREAKY_DATA_DIR", data_dir)
        .env_remove("STREAKY_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_json(data_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (code, stdout, stderr) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {:?}: {}", args, stderr);
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_streak_show_on_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot = run_json(dir.path(), &["streak", "show"]);
    assert_eq!(snapshot["streak"], 0);
    assert_eq!(snapshot["completed_today"], false);
    assert!(snapshot["last_completion"].is_null());
}

#[test]
fn test_challenge_complete_builds_streak() {
    let dir = tempfile::tempdir().unwrap();
    let day1 = "2026-05-01T12:00:00Z";
    let day2 = "2026-05-02T12:00:00Z";
    let day4 = "2026-05-04T12:00:00Z";

    let snapshot = run_json(dir.path(), &["--at", day1, "challenge", "complete", "walk"]);
    assert_eq!(snapshot["streak"], 1);

    let snapshot = run_json(dir.path(), &["--at", day2, "challenge", "complete", "read"]);
    assert_eq!(snapshot["streak"], 2);

    let snapshot = run_json(dir.path(), &["--at", day4, "challenge", "complete", "walk"]);
    assert_eq!(snapshot["streak"], 1);
    assert_eq!(snapshot["completed_ids"], serde_json::json!(["read", "walk"]));
}

#[test]
fn test_streak_show_reconciles_lapse() {
    let dir = tempfile::tempdir().unwrap();
    run_json(dir.path(), &["--at", "2026-05-01T12:00:00Z", "challenge", "complete", "walk"]);
    run_json(dir.path(), &["--at", "2026-05-02T12:00:00Z", "challenge", "complete", "walk"]);

    let snapshot = run_json(dir.path(), &["--at", "2026-05-03T12:00:00Z", "streak", "show"]);
    assert_eq!(snapshot["streak"], 2);

    let snapshot = run_json(dir.path(), &["--at", "2026-05-06T12:00:00Z", "streak", "show"]);
    assert_eq!(snapshot["streak"], 0);
}

#[test]
fn test_challenge_status_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let status = run_json(dir.path(), &["challenge", "status", "walk"]);
    assert_eq!(status["completed"], false);

    run_json(dir.path(), &["challenge", "complete", "walk"]);
    let status = run_json(dir.path(), &["challenge", "status", "walk"]);
    assert_eq!(status["id"], "walk");
    assert_eq!(status["completed"], true);

    let list = run_json(dir.path(), &["challenge", "list"]);
    assert_eq!(list, serde_json::json!(["walk"]));
}

#[test]
fn test_premium_challenge_requires_entitlement() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["challenge", "complete", "ice-bath", "--premium"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("requires an active subscription"));

    let status = run_json(dir.path(), &["challenge", "status", "ice-bath"]);
    assert_eq!(status["completed"], false);

    let (code, stdout, _) = run_cli(dir.path(), &["config", "set", "entitlement.active", "true"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ok"));

    let snapshot = run_json(dir.path(), &["challenge", "complete", "ice-bath", "--premium"]);
    assert_eq!(snapshot["streak"], 1);
}

#[test]
fn test_habit_counter() {
    let dir = tempfile::tempdir().unwrap();
    let count = run_json(dir.path(), &["habit", "count", "water"]);
    assert_eq!(count["count"], 0);

    for expected in 1..=3 {
        let count = run_json(dir.path(), &["habit", "increment", "water"]);
        assert_eq!(count["count"], expected);
    }

    let count = run_json(dir.path(), &["habit", "count", "water"]);
    assert_eq!(count["count"], 3);
    let snapshot = run_json(dir.path(), &["streak", "show"]);
    assert_eq!(snapshot["streak"], 0);
}

#[test]
fn test_config_get_set_list() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "log.level"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "warn");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "display.pretty_json", "false"]);
    assert_eq!(code, 0);

    let config = run_json(dir.path(), &["config", "list"]);
    assert_eq!(config["display"]["pretty_json"], false);
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "get", "nope"]);
    assert_ne!(code, 0);
    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "nope", "1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_invalid_at_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["--at", "tomorrow", "streak", "show"]);
    assert_ne!(code, 0);
}
