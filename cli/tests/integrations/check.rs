use super::{write_puzzle, TEAMS};
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_check_prints_normalized_clues() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(&temp_dir, "teams.json", TEAMS);

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("check").arg(&file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "team.oddballs.score # == color.lime.score # +12",
        ))
        .stdout(predicate::str::contains("OK: 3 categories of 4 items, 5 clues"));
}

#[test]
fn test_cli_check_reports_unknown_item() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(
        &temp_dir,
        "typo.json",
        r#"{
            "categories": [
                { "name": "I", "items": ["a", "b"] },
                { "name": "J", "items": ["c", "d"] }
            ],
            "clues": [ { "clue": "I.a=J.x" } ]
        }"#,
    );

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("check").arg(&file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown item 'x' in category 'J'"));
}

#[test]
fn test_cli_check_rejects_uneven_categories() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_puzzle(
        &temp_dir,
        "uneven.json",
        r#"{ "categories": [ { "name": "I", "items": ["a", "b"] }, { "name": "J", "items": ["c"] } ] }"#,
    );

    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("check").arg(&file);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid puzzle"));
}
