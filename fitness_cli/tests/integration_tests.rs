//! Integration tests for the fittrack binary.
//!
//! These tests verify end-to-end behavior including:
//! - The built-in demonstration loop and its exact output
//! - Processing packages from a JSON input file
//! - Failure on unknown workout codes and malformed packages

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a temp directory for input files
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fittrack"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fitness training statistics calculator",
        ));
}

#[test]
fn test_demo_loop_exact_output() {
    let expected = "\
Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.
Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.
Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.
";

    cli().assert().success().stdout(predicate::eq(expected));
}

#[test]
fn test_input_file_overrides_demo() {
    let temp_dir = setup_test_dir();
    let input_path = temp_dir.path().join("packages.json");

    let json = r#"[
        { "workout_type": "RUN", "data": [15000, 1, 75] }
    ]"#;
    fs::write(&input_path, json).expect("Failed to write input file");

    cli()
        .arg("--input")
        .arg(&input_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Тип тренировки: Running"))
        .stdout(predicate::str::contains("Потрачено ккал: 797.805."))
        .stdout(predicate::str::contains("Swimming").not());
}

#[test]
fn test_unknown_workout_code_fails_the_run() {
    let temp_dir = setup_test_dir();
    let input_path = temp_dir.path().join("packages.json");

    let json = r#"[
        { "workout_type": "XYZ", "data": [1, 2, 3] }
    ]"#;
    fs::write(&input_path, json).expect("Failed to write input file");

    cli()
        .arg("--input")
        .arg(&input_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("XYZ"));
}

#[test]
fn test_arity_mismatch_fails_the_run() {
    let temp_dir = setup_test_dir();
    let input_path = temp_dir.path().join("packages.json");

    // RUN expects 3 values
    let json = r#"[
        { "workout_type": "RUN", "data": [15000, 1] }
    ]"#;
    fs::write(&input_path, json).expect("Failed to write input file");

    cli()
        .arg("--input")
        .arg(&input_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("RUN"));
}

#[test]
fn test_missing_input_file_fails_the_run() {
    let temp_dir = setup_test_dir();
    let input_path = temp_dir.path().join("nonexistent.json");

    cli()
        .arg("--input")
        .arg(&input_path)
        .assert()
        .failure();
}
