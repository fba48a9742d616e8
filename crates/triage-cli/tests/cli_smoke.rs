use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_argument_exits_one_with_usage() {
    let mut cmd = Command::cargo_bin("triage").unwrap();
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: triage"));
}

#[test]
fn missing_log_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("triage").unwrap();
    cmd.arg("/definitely/not/here.log")
        .arg("--db")
        .arg(dir.path().join("triage.db"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("log file not found"));
}

#[test]
fn missing_log_file_leaves_no_database_behind() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("triage.db");
    let mut cmd = Command::cargo_bin("triage").unwrap();
    cmd.arg(dir.path().join("absent.log"))
        .arg("--db")
        .arg(&db)
        .assert()
        .code(1);
    assert!(!db.exists());
}
