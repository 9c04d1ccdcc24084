use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_new_help() {
    // Interactive entry needs a terminal, so only check the command is wired up
    let mut cmd = Command::cargo_bin("gridlock").unwrap();
    cmd.arg("new").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Enter a puzzle interactively"))
        .stdout(predicate::str::contains("--show-definition"));
}
