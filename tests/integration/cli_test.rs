//! Integration tests for the ivp CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixture, run_ivp, temp_file};

/// Config path inside a fresh temp dir; the file itself does not exist.
fn isolated_config() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    (dir, path)
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("ivp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("checkpoints"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    Command::cargo_bin("ivp").unwrap().assert().code(2);
}

// ============================================================================
// Checkpoints
// ============================================================================

#[test]
fn checkpoints_lists_defaults() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, code) = run_ivp(&config, &["checkpoints"]);

    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    #1  00:05.00  Checkpoint 1!
    #2  00:12.00  Quiz Time!
    #3  00:20.00  Section End

    3 checkpoint(s), trigger window 0.70s
    ");
}

#[test]
fn checkpoints_reads_custom_config() {
    let (stdout, _stderr, code) = run_ivp(&fixture("custom_config.toml"), &["checkpoints"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("#1  00:02.00  Warm-up"));
    assert!(stdout.contains("#2  00:08.50  Plain text break"));
    assert!(stdout.contains("trigger window 1.00s"));
}

#[test]
fn invalid_config_fails_with_context() {
    let (_dir, path) = temp_file("config.toml", b"[playback]\ntrigger_window = -2.0\n");
    let (_stdout, stderr, code) = run_ivp(&path, &["checkpoints"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid config file"));
    assert!(stderr.contains("trigger_window"));
}

// ============================================================================
// Simulate
// ============================================================================

#[test]
fn simulate_walkthrough_prints_transcript() {
    let (_dir, config) = isolated_config();
    let script = fixture("walkthrough.jsonl");
    let (stdout, _stderr, code) = run_ivp(&config, &["simulate", script.to_str().unwrap()]);

    assert_eq!(code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    00:00.00  subtitle  en English (VTT)
    00:05.20  present   #1 at 00:05.00  Checkpoint 1!
    00:05.20  resume
    00:03.00  rearm     1 checkpoint(s)
    00:05.20  present   #1 at 00:05.00  Checkpoint 1!
    00:05.20  resume
    00:12.40  present   #2 at 00:12.00  Quiz Time!
    00:12.40  resume
    00:30.00  rearm     2 checkpoint(s)
    3 checkpoint presentation(s) over 13 step(s)
    ");
}

#[test]
fn simulate_window_override() {
    let (_dir, config) = isolated_config();
    let script = fixture("coarse_updates.jsonl");

    let (stdout, _, _) = run_ivp(&config, &["simulate", script.to_str().unwrap()]);
    assert!(stdout.contains("0 checkpoint presentation(s)"));

    let (stdout, _, code) = run_ivp(
        &config,
        &["simulate", script.to_str().unwrap(), "--window", "1.0"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("present   #2 at 00:12.00"));
}

#[test]
fn simulate_rejects_non_positive_window() {
    let (_dir, config) = isolated_config();
    let script = fixture("walkthrough.jsonl");
    let (_stdout, stderr, code) = run_ivp(
        &config,
        &["simulate", script.to_str().unwrap(), "--window", "0"],
    );

    assert_eq!(code, 1);
    assert!(stderr.contains("--window must be a positive number"));
}

#[test]
fn simulate_missing_script_fails() {
    let (_dir, config) = isolated_config();
    let (_stdout, stderr, code) = run_ivp(&config, &["simulate", "/nonexistent/script.jsonl"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to read script"));
}

// ============================================================================
// Validate
// ============================================================================

#[test]
fn validate_accepts_video() {
    let (_dir, config) = isolated_config();
    let (_vdir, video) = temp_file("Summer Trip.MOV", &[0u8; 1500]);
    let (stdout, _stderr, code) = run_ivp(&config, &["validate", video.to_str().unwrap()]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Ready to upload Summer_Trip.MOV"));
    assert!(stdout.contains("/upload_video as 'videoFile'"));
}

#[test]
fn validate_rejects_other_files() {
    let (_dir, config) = isolated_config();
    let (_vdir, file) = temp_file("notes.txt", b"hello");
    let (_stdout, stderr, code) = run_ivp(&config, &["validate", file.to_str().unwrap()]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Error: File type not allowed"));
}

#[test]
fn validate_missing_file() {
    let (_dir, config) = isolated_config();
    let (_stdout, stderr, code) = run_ivp(&config, &["validate", "/nonexistent/clip.mp4"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("File not found"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_prints_override() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, code) = run_ivp(&config, &["config", "path"]);

    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), config.display().to_string());
}

#[test]
fn config_init_writes_defaults_once() {
    let (_dir, config) = isolated_config();

    let (_stdout, _stderr, code) = run_ivp(&config, &["config", "init"]);
    assert_eq!(code, 0);
    let written = std::fs::read_to_string(&config).unwrap();
    assert!(written.contains("trigger_window = 0.7"));
    assert!(written.contains("[[checkpoints]]"));

    let (_stdout, stderr, code) = run_ivp(&config, &["config", "init"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, code) = run_ivp(&config, &["config", "init", "--force"]);
    assert_eq!(code, 0);
}

#[test]
fn config_show_outputs_toml() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, code) = run_ivp(&config, &["config", "show"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("[playback]"));
    assert!(stdout.contains("endpoint = \"/upload_video\""));
    assert!(stdout.contains("lang = \"en\""));
}

#[test]
fn completions_generate_for_bash() {
    let (_dir, config) = isolated_config();
    let (stdout, _stderr, code) = run_ivp(&config, &["completions", "bash"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("ivp"));
}
