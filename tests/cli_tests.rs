//! CLI surface tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("splitter").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("split").and(predicate::str::contains("inspect")));
}

#[test]
fn split_with_missing_input_fails() {
    let mut cmd = Command::cargo_bin("splitter").unwrap();
    cmd.args(["split", "--input", "no_such_video.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn inspect_with_missing_input_fails() {
    let mut cmd = Command::cargo_bin("splitter").unwrap();
    cmd.args(["inspect", "--input", "no_such_video.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn duration_below_range_is_rejected() {
    let mut cmd = Command::cargo_bin("splitter").unwrap();
    cmd.args(["split", "--input", "video.mp4", "--duration", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn duration_above_range_is_rejected() {
    let mut cmd = Command::cargo_bin("splitter").unwrap();
    cmd.args(["split", "--input", "video.mp4", "--duration", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unknown_overwrite_policy_is_rejected() {
    let mut cmd = Command::cargo_bin("splitter").unwrap();
    cmd.args([
        "split",
        "--input",
        "no_such_video.mp4",
        "--overwrite",
        "maybe",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("overwrite policy"));
}
