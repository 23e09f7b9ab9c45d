//! Binary-level tests for the scan CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn missing_root_prints_usage_and_exits_one() {
    let mut cmd = Command::cargo_bin("git-scout").unwrap();

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn empty_tree_reports_no_repositories() {
    let tree = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("git-scout").unwrap();

    cmd.arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No git repositories found."));
}

#[test]
fn invalid_repository_is_reported_not_fatal() {
    let tree = tempfile::tempdir().unwrap();
    fs::create_dir_all(tree.path().join("broken/.git")).unwrap();

    let mut cmd = Command::cargo_bin("git-scout").unwrap();
    cmd.arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a valid git repository"))
        .stdout(predicate::str::contains("1 repositories with errors"));
}

#[test]
fn output_flag_writes_a_csv_file() {
    let tree = tempfile::tempdir().unwrap();
    fs::create_dir_all(tree.path().join("broken/.git")).unwrap();
    let csv_path = tree.path().join("results.csv");

    let mut cmd = Command::cargo_bin("git-scout").unwrap();
    cmd.arg("--output")
        .arg(&csv_path)
        .arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to:"));

    let content = fs::read_to_string(&csv_path).unwrap();
    assert!(content.starts_with("Repository,Branch,Status,Changes"));
}

#[test]
fn bad_config_file_is_a_critical_failure() {
    let tree = tempfile::tempdir().unwrap();
    let config = tree.path().join("scout.toml");
    fs::write(&config, "concurrency = 0\n").unwrap();

    let mut cmd = Command::cargo_bin("git-scout").unwrap();
    cmd.arg("--config").arg(&config).arg(tree.path()).assert().code(2);
}

#[test]
fn fix_ownership_reports_zero_on_healthy_tree() {
    let tree = tempfile::tempdir().unwrap();
    fs::create_dir_all(tree.path().join("repo/.git")).unwrap();

    let mut cmd = Command::cargo_bin("git-scout-fix-ownership").unwrap();
    cmd.arg(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed ownership for 0 repositories."));
}
