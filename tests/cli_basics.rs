use assert_cmd::cargo; // handy crate for testing CLIs
use predicates::prelude::*;
use std::fs;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("configure"))
        .stdout(predicate::str::contains("commit"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn configure_writes_key_under_home() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.env("HOME", home.path())
        .args(["configure", "--api-key", "SECRET"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved successfully!"));

    let path = home
        .path()
        .join(".config")
        .join("commit-msg-gen")
        .join("config.json");
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(value["api_key"], "SECRET");
}

#[test]
fn configure_reads_piped_key() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.env("HOME", home.path())
        .arg("configure")
        .write_stdin("PIPED\n")
        .assert()
        .success();

    let raw = fs::read_to_string(
        home.path()
            .join(".config")
            .join("commit-msg-gen")
            .join("config.json"),
    )
    .unwrap();
    assert!(raw.contains("PIPED"));
}

#[test]
fn configure_rejects_empty_key() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.env("HOME", home.path())
        .arg("configure")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn commit_without_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.env("HOME", home.path())
        .env_remove("ANTHROPIC_API_KEY")
        .current_dir(home.path())
        .args(["commit", "--preview"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key found"));
}

#[test]
fn configure_with_empty_flag_prompts_instead() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.env("HOME", home.path())
        .args(["configure", "--api-key", ""])
        .write_stdin("FROM-PROMPT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter your Anthropic API key"));

    let raw = fs::read_to_string(
        home.path()
            .join(".config")
            .join("commit-msg-gen")
            .join("config.json"),
    )
    .unwrap();
    assert!(raw.contains("FROM-PROMPT"));
}

#[test]
fn commit_outside_repository_reports_git_error() {
    let home = tempfile::tempdir().unwrap();
    let work = tempfile::tempdir().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!();

    // Stop git from discovering a repository above the temp dir.
    let ceiling = work.path().parent().unwrap();

    cmd.env("HOME", home.path())
        .env("ANTHROPIC_API_KEY", "ENVKEY")
        .env("ANTHROPIC_BASE_URL", "http://127.0.0.1:9")
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .current_dir(work.path())
        .args(["commit", "--preview"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error getting git diff"))
        .stderr(predicate::str::contains("not a git repository"));
}
