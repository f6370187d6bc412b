//! Smoke tests to verify CLI wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_serve() {
    let mut cmd = Command::cargo_bin("sneakers").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help_lists_database_flags() {
    let mut cmd = Command::cargo_bin("sneakers").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("0.0.0.0:8080"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("sneakers").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bad_database_url_is_fatal() {
    let mut cmd = Command::cargo_bin("sneakers").unwrap();
    cmd.args(["serve", "--database-url", "not a url", "--bind", "127.0.0.1:0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"));
}

#[test]
fn test_bad_bind_is_usage_error() {
    let mut cmd = Command::cargo_bin("sneakers").unwrap();
    cmd.args(["serve", "--bind", "nowhere"]);

    cmd.assert().failure().code(2);
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let mut cmd = Command::cargo_bin("sneakers").unwrap();

    cmd.assert().failure().code(2);
}
