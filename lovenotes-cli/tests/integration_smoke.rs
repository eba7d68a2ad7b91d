//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("lovenotes").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("notes-memory"))
        .stdout(predicate::str::contains("--bind"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("lovenotes").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("predictions"));
}

#[test]
fn test_unknown_service_rejected() {
    let mut cmd = Command::cargo_bin("lovenotes").unwrap();
    cmd.arg("serve").arg("todos");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_init_db_memory_has_no_table() {
    let mut cmd = Command::cargo_bin("lovenotes").unwrap();
    cmd.arg("init-db").arg("notes-memory");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no database table"));
}
