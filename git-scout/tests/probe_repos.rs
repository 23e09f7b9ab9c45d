//! End-to-end probing against real git repositories.
//!
//! These tests require a `git` binary on PATH, like the tool itself.

use git_scout::{probe_repository, Runner, RunnerConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Stdio;

fn git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed in {}", dir.display());
}

fn init_repo(root: &Path, name: &str) -> PathBuf {
    let repo = root.join(name);
    fs::create_dir_all(&repo).unwrap();
    git(&repo, &["init", "-b", "main"]);
    repo
}

fn commit_file(repo: &Path, name: &str) {
    fs::write(repo.join(name), "content\n").unwrap();
    git(repo, &["add", name]);
    git(
        repo,
        &[
            "-c",
            "user.email=scout@example.com",
            "-c",
            "user.name=Scout",
            "commit",
            "-q",
            "-m",
            "init",
        ],
    );
}

/// Repository with a commit fully pushed to an upstream.
fn init_pushed_repo(root: &Path, name: &str) -> PathBuf {
    let repo = init_repo(root, name);
    commit_file(&repo, "tracked.txt");

    let remote = root.join(format!("{name}-remote.git"));
    fs::create_dir_all(&remote).unwrap();
    git(&remote, &["init", "--bare"]);
    git(&repo, &["remote", "add", "origin", remote.to_str().unwrap()]);
    git(&repo, &["push", "-q", "-u", "origin", "main"]);
    repo
}

#[tokio::test]
async fn clean_repository_reports_clean() {
    let tree = tempfile::tempdir().unwrap();
    let repo = init_pushed_repo(tree.path(), "clean");

    let status = probe_repository(&repo).await;

    assert_eq!(status.branch, "main");
    assert!(status.error.is_none());
    assert!(status.is_clean);
    assert!(status.change_labels().is_empty());
}

#[tokio::test]
async fn untracked_file_marks_dirty() {
    let tree = tempfile::tempdir().unwrap();
    let repo = init_repo(tree.path(), "untracked");
    fs::write(repo.join("notes.txt"), "todo\n").unwrap();

    let status = probe_repository(&repo).await;

    assert!(status.has_untracked);
    assert!(!status.is_clean);
    assert!(status.error.is_none());
}

#[tokio::test]
async fn staged_and_unstaged_changes_are_distinguished() {
    let tree = tempfile::tempdir().unwrap();
    let repo = init_pushed_repo(tree.path(), "edited");

    fs::write(repo.join("tracked.txt"), "changed\n").unwrap();
    let status = probe_repository(&repo).await;
    assert!(status.has_unstaged);
    assert!(!status.has_staged);

    git(&repo, &["add", "tracked.txt"]);
    let status = probe_repository(&repo).await;
    assert!(status.has_staged);
    assert!(!status.has_unstaged);
}

#[tokio::test]
async fn commits_without_upstream_count_as_unpushed() {
    let tree = tempfile::tempdir().unwrap();
    let repo = init_repo(tree.path(), "local-only");
    commit_file(&repo, "tracked.txt");

    let status = probe_repository(&repo).await;

    assert!(status.has_unpushed);
    assert!(!status.is_clean);
    assert!(status.error.is_none());
}

#[tokio::test]
async fn detached_head_label_names_the_commit() {
    let tree = tempfile::tempdir().unwrap();
    let repo = init_pushed_repo(tree.path(), "detached");
    git(&repo, &["checkout", "-q", "--detach"]);

    let status = probe_repository(&repo).await;

    assert!(
        status.branch.starts_with("detached HEAD ("),
        "unexpected branch label: {}",
        status.branch
    );
    assert!(status.branch.ends_with(')'));
    // A detached checkout is not a branch-resolution failure.
    assert!(status.error.is_none());
}

#[tokio::test]
async fn invalid_metadata_directory_reports_error() {
    let tree = tempfile::tempdir().unwrap();
    let fake = tree.path().join("broken");
    fs::create_dir_all(fake.join(".git")).unwrap();

    let status = probe_repository(&fake).await;

    assert_eq!(status.error.as_deref(), Some("Not a valid git repository"));
    assert!(!status.is_clean);
    assert!(status.change_labels().is_empty());
}

#[tokio::test]
async fn run_returns_one_status_per_repository() {
    let tree = tempfile::tempdir().unwrap();
    init_pushed_repo(tree.path(), "a-clean");
    let dirty = init_repo(tree.path(), "b-dirty");
    fs::write(dirty.join("new.txt"), "x\n").unwrap();
    fs::create_dir_all(tree.path().join("c-broken/.git")).unwrap();

    let runner = Runner::new(RunnerConfig::new(tree.path().to_path_buf()));
    let outcome = runner.run().await;

    assert_eq!(outcome.statuses.len(), 3);
    assert_eq!(outcome.summary.found, 3);
    assert_eq!(outcome.summary.clean, 1);
    assert_eq!(outcome.summary.dirty, 1);
    assert_eq!(outcome.summary.errored, 1);
}

#[tokio::test]
async fn dirty_only_run_drops_clean_entries() {
    let tree = tempfile::tempdir().unwrap();
    init_pushed_repo(tree.path(), "a-clean");
    init_pushed_repo(tree.path(), "b-clean");
    for name in ["c-dirty", "d-dirty", "e-dirty"] {
        let repo = init_repo(tree.path(), name);
        fs::write(repo.join("new.txt"), "x\n").unwrap();
    }

    let config = RunnerConfig::new(tree.path().to_path_buf()).with_dirty_only(true);
    let outcome = Runner::new(config).run().await;

    assert_eq!(outcome.statuses.len(), 3);
    assert_eq!(outcome.summary.dirty, 3);
    assert_eq!(outcome.summary.clean, 0);
    assert!(!outcome.summary.render().contains("clean"));
}
