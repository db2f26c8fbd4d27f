// tests/integration_test.rs
//
// End-to-end runs of the relcheck binary against throwaway repositories.

use std::path::Path;
use std::process::Command;

fn relcheck_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relcheck"));
    // Keep output on stdout regardless of the surrounding CI environment
    cmd.env_remove("GITHUB_OUTPUT");
    cmd
}

fn commit_file(repo: &git2::Repository, file: &str, content: &str, message: &str) -> git2::Oid {
    let workdir = repo.workdir().expect("workdir");
    std::fs::write(workdir.join(file), content).expect("write file");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new(file)).expect("add path");
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");

    let sig = git2::Signature::now("tester", "tester@example.com").expect("signature");
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("commit")
}

#[test]
fn test_relcheck_help() {
    let output = relcheck_cmd().arg("--help").output().expect("run relcheck");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("relcheck"));
    assert!(stdout.contains("VERSION file"));
}

#[test]
fn test_relcheck_version_flag() {
    let output = relcheck_cmd()
        .args(["--version", "HEAD", "HEAD"])
        .output()
        .expect("run relcheck");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("relcheck"));
}

#[test]
fn test_minor_bump_emits_branch_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = git2::Repository::init(dir.path()).expect("init repo");
    let before = commit_file(&repo, "VERSION", "2.0.5\n", "initial version");
    let after = commit_file(&repo, "VERSION", "2.1.0\n", "bump to 2.1.0");

    let output = relcheck_cmd()
        .args([
            before.to_string().as_str(),
            after.to_string().as_str(),
            "--repo",
        ])
        .arg(dir.path())
        .output()
        .expect("run relcheck");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("changed=true"));
    assert!(stdout.contains("version=2.1.0"));
    assert!(stdout.contains("release_branch=true"));
    assert!(stdout.contains("version_branch=2.0"));
}

#[test]
fn test_unchanged_file_emits_changed_false() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = git2::Repository::init(dir.path()).expect("init repo");
    let before = commit_file(&repo, "VERSION", "2.1.0\n", "initial version");
    let after = commit_file(&repo, "README.md", "docs\n", "unrelated change");

    let output = relcheck_cmd()
        .args([
            before.to_string().as_str(),
            after.to_string().as_str(),
            "--repo",
        ])
        .arg(dir.path())
        .output()
        .expect("run relcheck");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("changed=false"));
    assert!(!stdout.contains("version="));
}

#[test]
fn test_malformed_version_emits_no_outputs_and_warns() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = git2::Repository::init(dir.path()).expect("init repo");
    let before = commit_file(&repo, "VERSION", "2.1.0\n", "initial version");
    let after = commit_file(&repo, "VERSION", "not-a-version\n", "break the file");

    let output = relcheck_cmd()
        .args([
            before.to_string().as_str(),
            after.to_string().as_str(),
            "--repo",
        ])
        .arg(dir.path())
        .output()
        .expect("run relcheck");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("changed="));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not-a-version"));
}

#[test]
fn test_create_branch_cuts_previous_series_branch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = git2::Repository::init(dir.path()).expect("init repo");
    let before = commit_file(&repo, "VERSION", "2.0.5\n", "initial version");
    let after = commit_file(&repo, "VERSION", "2.1.0\n", "bump to 2.1.0");

    let output = relcheck_cmd()
        .args([
            before.to_string().as_str(),
            after.to_string().as_str(),
            "--create-branch",
            "--force",
            "--repo",
        ])
        .arg(dir.path())
        .output()
        .expect("run relcheck");

    // Branch creation succeeds; pushing fails (no remote) but that is
    // best-effort and must not fail the run.
    assert!(output.status.success());
    assert!(repo
        .find_branch("rel-2.0", git2::BranchType::Local)
        .is_ok());
}

#[test]
fn test_dry_run_creates_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = git2::Repository::init(dir.path()).expect("init repo");
    let before = commit_file(&repo, "VERSION", "2.0.5\n", "initial version");
    let after = commit_file(&repo, "VERSION", "2.1.0\n", "bump to 2.1.0");

    let output = relcheck_cmd()
        .args([
            before.to_string().as_str(),
            after.to_string().as_str(),
            "--create-branch",
            "--dry-run",
            "--force",
            "--repo",
        ])
        .arg(dir.path())
        .output()
        .expect("run relcheck");

    assert!(output.status.success());
    assert!(repo
        .find_branch("rel-2.0", git2::BranchType::Local)
        .is_err());
}

#[test]
fn test_bad_revision_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = git2::Repository::init(dir.path()).expect("init repo");
    commit_file(&repo, "VERSION", "2.1.0\n", "initial version");

    let output = relcheck_cmd()
        .args(["no-such-rev", "HEAD", "--repo"])
        .arg(dir.path())
        .output()
        .expect("run relcheck");

    assert!(!output.status.success());
}
