use assert_cmd::Command;
use predicates::prelude::*;

/// The help text documents the single positional argument.
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("lamtail").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[FUNCTION]"))
        .stdout(predicate::str::contains("Tail the CloudWatch logs"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("lamtail").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lamtail"));
}

/// A malformed ARN fails before any network call is made.
#[test]
fn test_malformed_arn_fails() {
    let mut cmd = Command::cargo_bin("lamtail").unwrap();
    cmd.arg("arn:aws:lambda")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed ARN"));
}

/// There is exactly one positional argument; a second one is rejected.
#[test]
fn test_extra_arguments_are_rejected() {
    let mut cmd = Command::cargo_bin("lamtail").unwrap();
    cmd.arg("one")
        .arg("two")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

/// Without an argument, discovery runs `terraform` in the current
/// directory; outside a Terraform project this fails at startup.
#[test]
fn test_discovery_outside_project_fails() {
    let temp_dir = std::env::temp_dir();
    let mut cmd = Command::cargo_bin("lamtail").unwrap();
    cmd.current_dir(temp_dir).assert().failure();
}
