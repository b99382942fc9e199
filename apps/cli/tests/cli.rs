//! Integration tests for the `beacon` binary.
//!
//! Every test points HOME at its own temp directory so the first-run config
//! write stays inside the sandbox. Output assertions use plain text because
//! `colored` disables escapes on piped stdout.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to build a `beacon` command with an isolated home directory.
fn beacon(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("beacon").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_menu_exit_immediately() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye"));
}

#[test]
fn test_menu_renders_registry() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BEACON MISSION CONTROL"))
        .stdout(predicate::str::contains("[0] Exit"))
        .stdout(predicate::str::contains("Website Audit"))
        .stdout(predicate::str::contains("(NEW!)"));
}

#[test]
fn test_menu_help_screen() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .write_stdin("h\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Special Commands"))
        .stdout(predicate::str::contains("acc, a11y"));
}

#[test]
fn test_menu_selection_panel() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .write_stdin("ai\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI Scan"))
        .stdout(predicate::str::contains("Estimated duration"));
}

#[test]
fn test_menu_unrecognized_input() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .write_stdin("zzz\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized input"));
}

#[test]
fn test_menu_recommendations() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .write_stdin("r\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recommended Next Steps"));
}

#[test]
fn test_menu_auto_run_totals() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .write_stdin("a\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto-Run Queue"))
        .stdout(predicate::str::contains("Total estimated: 9m 45s"));
}

#[test]
fn test_menu_handles_eof() {
    // No exit token at all: closing stdin must end the loop cleanly.
    let home = TempDir::new().unwrap();
    beacon(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("BEACON MISSION CONTROL"));
}

#[test]
fn test_list_human_output() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered commands"))
        .stdout(predicate::str::contains("Website Audit"))
        .stdout(predicate::str::contains("9 commands registered"));
}

#[test]
fn test_list_json_output() {
    let home = TempDir::new().unwrap();
    let assert = beacon(&home).arg("list").arg("--json").assert().success();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("list --json should emit valid JSON");
    let categories = json["categories"].as_array().expect("categories should be an array");
    assert_eq!(categories.len(), 3);
    assert!(stdout.contains("ai-scan"));
}

#[test]
fn test_theme_list_marks_active() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .arg("theme")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"))
        .stdout(predicate::str::contains("ocean"))
        .stdout(predicate::str::contains("→"));
}

#[test]
fn test_theme_preview_named_preset() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .arg("theme")
        .arg("preview")
        .arg("ocean")
        .assert()
        .success()
        .stdout(predicate::str::contains("ocean"))
        .stdout(predicate::str::contains("Formatters"));
}

#[test]
fn test_theme_preview_unknown_preset() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .arg("theme")
        .arg("preview")
        .arg("neon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}

#[test]
fn test_theme_flag_switches_glyphs() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .arg("--theme")
        .arg("mono")
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("+-"))
        .stdout(predicate::str::contains("╭").not());
}

#[test]
fn test_theme_flag_rejects_unknown_preset() {
    let home = TempDir::new().unwrap();
    beacon(&home)
        .arg("--theme")
        .arg("neon")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}

#[test]
fn test_default_config_written_on_first_run() {
    let home = TempDir::new().unwrap();
    beacon(&home).arg("list").assert().success();

    let config_path = home.path().join(".beacon").join("config.toml");
    assert!(config_path.exists(), "first run should write a default config");

    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("preset"));

    // A second run loads the file it just wrote.
    beacon(&home).arg("list").assert().success();
}
