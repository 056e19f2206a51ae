//! Binary-level tests: scripted stdin against the real executable

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fsh(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fsh").unwrap();
    cmd.arg("--start-dir").arg(dir.path());
    cmd
}

#[test]
fn test_session_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    fsh(&temp_dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Current directory: "))
        .stdout(predicate::str::contains(
            "Enter command (createFile, createDir, copyFile, copyDir, move, rename, delete, list, cd, back, exit): ",
        ));
}

#[test]
fn test_start_dir_is_listed_canonical() {
    let temp_dir = TempDir::new().unwrap();
    let inner = temp_dir.path().join("inner");
    fs::create_dir(&inner).unwrap();
    let root = fs::canonicalize(temp_dir.path()).unwrap();

    Command::cargo_bin("fsh")
        .unwrap()
        .arg("--start-dir")
        .arg(inner.join(".."))
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "Current directory: {}\n",
            root.display()
        )));
}

#[test]
fn test_end_of_input_exits_with_success() {
    let temp_dir = TempDir::new().unwrap();
    fsh(&temp_dir).write_stdin("list\n").assert().success();
}

#[test]
fn test_commands_change_the_filesystem() {
    let temp_dir = TempDir::new().unwrap();

    fsh(&temp_dir)
        .write_stdin("createDir\nsub\ncreateFile\nsub/a.txt\ncopyDir\nsub\ncopy\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory 'sub' created."))
        .stdout(predicate::str::contains("File 'sub/a.txt' created."));

    assert!(temp_dir.path().join("copy/a.txt").is_file());
}

#[test]
fn test_invalid_command_is_reported_on_stdout() {
    let temp_dir = TempDir::new().unwrap();

    fsh(&temp_dir)
        .write_stdin("dir\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("x.txt"), "x").unwrap();

    fsh(&temp_dir)
        .arg("-vv")
        .write_stdin("delete\nx.txt\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File 'x.txt' deleted."))
        .stdout(predicate::str::contains("DEBUG").not());
}

#[test]
fn test_rejects_missing_start_dir() {
    Command::cargo_bin("fsh")
        .unwrap()
        .args(["--start-dir", "/definitely/not/here"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Start directory does not exist"));
}

#[test]
fn test_rejects_quiet_with_verbose() {
    let temp_dir = TempDir::new().unwrap();
    fsh(&temp_dir)
        .args(["-q", "-v"])
        .write_stdin("exit\n")
        .assert()
        .failure();
}
