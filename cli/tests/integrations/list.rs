use super::{write_puzzle, TEAMS, THREE_BY_THREE};
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_list_summarizes_definitions() {
    let temp_dir = TempDir::new().unwrap();
    write_puzzle(&temp_dir, "grid.json", THREE_BY_THREE);
    fs::create_dir(temp_dir.path().join("league")).unwrap();
    write_puzzle(&temp_dir, "league/teams.json", TEAMS);
    write_puzzle(&temp_dir, "notes.txt", "not a puzzle");

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("grid.json"))
        .stdout(predicate::str::contains("teams.json"))
        .stdout(predicate::str::contains("notes.txt").not())
        .stdout(predicate::str::contains("2 of 2 puzzle definitions loaded"));
}

#[test]
fn test_cli_list_reports_broken_files() {
    let temp_dir = TempDir::new().unwrap();
    write_puzzle(&temp_dir, "grid.json", THREE_BY_THREE);
    write_puzzle(&temp_dir, "broken.json", "{ not json");

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("broken.json"))
        .stdout(predicate::str::contains("1 of 2 puzzle definitions loaded"));
}

#[test]
fn test_cli_list_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("list").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No puzzle definitions found"));
}

#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("new"));
}
