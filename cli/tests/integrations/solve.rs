use super::{write_puzzle, TEAMS, THREE_BY_THREE};
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_solve_prints_grid() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(&temp_dir, "grid.json", THREE_BY_THREE);

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("solve").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("│ a "))
        .stdout(predicate::str::contains("┆ e "))
        .stdout(predicate::str::contains("assignments explored"));
}

#[test]
fn test_cli_solve_json() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(&temp_dir, "grid.json", THREE_BY_THREE);

    let output = Command::cargo_bin("gridlock")
        .unwrap()
        .arg("solve")
        .arg(&file)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["solved"], true);
    assert_eq!(value["solution"]["categories"], serde_json::json!(["I", "J", "K"]));
    assert_eq!(
        value["solution"]["rows"],
        serde_json::json!([["a", "e", "g"], ["b", "f", "i"], ["c", "d", "h"]])
    );
}

#[test]
fn test_cli_count_reports_multiple_solutions() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(&temp_dir, "teams.json", TEAMS);

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("solve").arg(&file).arg("--count");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 solutions"))
        .stdout(predicate::str::contains("First solution"))
        .stdout(predicate::str::contains("silver"));
}

#[test]
fn test_cli_no_solution_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(
        &temp_dir,
        "impossible.json",
        r#"{
            "categories": [
                { "name": "I", "items": ["a", "b"] },
                { "name": "J", "items": ["c", "d"] }
            ],
            "clues": [ { "clue": "I.a=J.c" }, { "clue": "I.a!=J.c" } ]
        }"#,
    );

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("solve").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No solution"));
}

#[test]
fn test_cli_malformed_clue_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(
        &temp_dir,
        "bad.json",
        r#"{
            "categories": [
                { "name": "I", "items": ["a", "b"] },
                { "name": "J", "items": ["c", "d"] }
            ],
            "clues": [ { "clue": "I.a # == J.c %" } ]
        }"#,
    );

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("solve").arg(&file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Malformed operation"));
}

#[test]
fn test_cli_assignment_limit() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(&temp_dir, "teams.json", TEAMS);

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("solve")
        .arg(&file)
        .arg("--count")
        .arg("--max-assignments")
        .arg("10");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("max_assignments"));
}

#[test]
fn test_cli_missing_file() {
    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("solve").arg("does-not-exist.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read puzzle definition"));
}
