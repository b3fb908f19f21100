//! Integration tests for colony-cli commands.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The game binary with animations off, no intro, and its log in `dir`.
fn colony(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("colony").unwrap();
    cmd.arg("--fast")
        .arg("--no-intro")
        .arg("--log-file")
        .arg(dir.path().join("game.log"));
    cmd
}

#[test]
fn help_lists_flags() {
    Command::cargo_bin("colony")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--fast"));
}

#[test]
fn quit_prints_farewell() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Quarters"))
        .stdout(predicate::str::contains("Exiting game. Thank you for playing!"));
}

#[test]
fn end_of_input_prints_farewell() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting game. Thank you for playing!"));
}

#[test]
fn opening_the_cupboard_shows_its_items() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .write_stdin("open cupboard\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The cupboard's contents have made themselves known."))
        .stdout(predicate::str::contains("take ID card"));
}

#[test]
fn unknown_command_is_reported() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .write_stdin("dance wildly\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't understand"));
}

#[test]
fn map_marks_current_location() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .write_stdin("map\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("YOU ARE HERE"))
        .stdout(predicate::str::contains("Residential District"));
}

#[test]
fn partial_config_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "initial_minshin": 1234 }"#).unwrap();

    colony(&dir)
        .arg("--config")
        .arg(&config)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Minshin: 1234"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "day_length": -3 }"#).unwrap();

    colony(&dir)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: invalid config"));
}

#[test]
fn missing_config_fails() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .arg("--config")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn session_is_logged() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .env_remove("RUST_LOG")
        .write_stdin("look\nquit\n")
        .assert()
        .success();

    let log = std::fs::read_to_string(dir.path().join("game.log")).unwrap();
    assert!(log.contains("session started"));
    assert!(log.contains("player input"));
}

#[test]
fn rust_log_can_quiet_the_log() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .env("RUST_LOG", "warn")
        .write_stdin("quit\n")
        .assert()
        .success();

    let log = std::fs::read_to_string(dir.path().join("game.log")).unwrap();
    assert!(!log.contains("session started"));
}

#[test]
fn seed_flag_is_accepted() {
    let dir = TempDir::new().unwrap();
    colony(&dir)
        .args(["--seed", "7"])
        .write_stdin("quit\n")
        .assert()
        .success();
}
