// ABOUTME: Integration tests for the poramorshok-cli binary
// ABOUTME: Checks command structure, height argument rules and the persisted language choice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! Integration tests for the poramorshok-cli binary.
//!
//! Every invocation gets its own data directory and an unreachable model
//! endpoint, so nothing leaves the machine.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Port 9 (discard) refuses connections on test machines
const UNREACHABLE_MODEL_URL: &str = "http://127.0.0.1:9";

/// Run the CLI against `data_dir` and capture output
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_poramorshok-cli"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY")
        .env_remove("PORAMORSHOK_LANGUAGE")
        .env_remove("RUST_LOG")
        .env("PORAMORSHOK_STORAGE", "file")
        .env("PORAMORSHOK_LLM_BASE_URL", UNREACHABLE_MODEL_URL)
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn data_dir() -> TempDir {
    tempfile::tempdir().expect("temporary data directory")
}

// ============================================================================
// Help Output
// ============================================================================

#[test]
fn test_cli_help_shows_commands() {
    let dir = data_dir();
    let (exit_code, stdout, _stderr) = run_cli(dir.path(), &["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    assert!(stdout.contains("Poramorshok personal health assistant"));
    for command in ["track", "chat", "diet", "exercise", "fun-fact", "language"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_cli_track_help() {
    let dir = data_dir();
    let (exit_code, stdout, _stderr) = run_cli(dir.path(), &["track", "--help"]);

    assert_eq!(exit_code, 0, "Track help should exit with 0");
    for command in ["add", "show", "clear", "age"] {
        assert!(stdout.contains(command), "Track help should mention '{command}'");
    }
}

#[test]
fn test_cli_track_add_help() {
    let dir = data_dir();
    let (exit_code, stdout, _stderr) = run_cli(dir.path(), &["track", "add", "--help"]);

    assert_eq!(exit_code, 0, "Track add help should exit with 0");
    for option in ["--age", "--height-cm", "--feet", "--inches", "--weight"] {
        assert!(stdout.contains(option), "Should show {option} option");
    }
}

// ============================================================================
// Height Arguments
// ============================================================================

#[test]
fn test_track_add_requires_a_height() {
    let dir = data_dir();
    let (exit_code, _stdout, stderr) =
        run_cli(dir.path(), &["track", "add", "--age", "30", "--weight", "70"]);

    assert_eq!(exit_code, 2, "Missing height is a usage error");
    assert!(stderr.contains("--height-cm"), "{stderr}");
}

#[test]
fn test_track_add_rejects_both_height_units() {
    let dir = data_dir();
    let (exit_code, _stdout, stderr) = run_cli(
        dir.path(),
        &[
            "track",
            "add",
            "--age",
            "30",
            "--weight",
            "70",
            "--height-cm",
            "175",
            "--feet",
            "5",
        ],
    );

    assert_eq!(exit_code, 2, "Centimeters and feet are exclusive");
    assert!(stderr.contains("cannot be used with"), "{stderr}");
}

#[test]
fn test_track_add_accepts_partial_feet_inches() {
    let dir = data_dir();

    let (exit_code, stdout, stderr) = run_cli(
        dir.path(),
        &["track", "add", "--age", "30", "--weight", "70", "--inches", "69"],
    );
    assert_eq!(exit_code, 0, "{stderr}");
    assert!(stdout.contains("Entry saved (1 total)"), "{stdout}");
    assert!(stdout.contains("BMI 22.78"), "{stdout}");

    let (exit_code, stdout, stderr) = run_cli(
        dir.path(),
        &["track", "add", "--weight", "70", "--feet", "6"],
    );
    assert_eq!(exit_code, 0, "{stderr}");
    assert!(stdout.contains("Entry saved (2 total)"), "{stdout}");
}

#[test]
fn test_track_add_with_centimeters() {
    let dir = data_dir();
    let (exit_code, stdout, stderr) = run_cli(
        dir.path(),
        &["track", "add", "--age", "25", "--height-cm", "175", "--weight", "70"],
    );

    assert_eq!(exit_code, 0, "{stderr}");
    assert!(stdout.contains("BMI 22.86 (Normal)"), "{stdout}");
}

// ============================================================================
// Language
// ============================================================================

#[test]
fn test_language_choice_is_persisted() {
    let dir = data_dir();

    let (exit_code, stdout, _stderr) = run_cli(dir.path(), &["language", "show"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "en (English)");

    let (exit_code, stdout, _stderr) = run_cli(dir.path(), &["language", "set", "bn"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "bn (Bengali)");

    let (exit_code, stdout, _stderr) = run_cli(dir.path(), &["language", "show"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "bn (Bengali)");
}

#[test]
fn test_unknown_language_is_a_usage_error() {
    let dir = data_dir();
    let (exit_code, _stdout, _stderr) = run_cli(dir.path(), &["language", "set", "fr"]);

    assert_eq!(exit_code, 2);
}
