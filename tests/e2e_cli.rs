//! CLI end-to-end tests
//!
//! Tests for the streamnation command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the streamnation binary
#[allow(deprecated)]
fn streamnation_cmd() -> Command {
    Command::cargo_bin("streamnation").unwrap()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = streamnation_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_lists_services() {
    let mut cmd = streamnation_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("stream"))
        .stdout(predicate::str::contains("start"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = streamnation_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("streamnation"));
}

#[test]
fn test_cli_validate_valid_config() {
    let dir = tempdir().unwrap();
    let videos = dir.path().join("videos");
    fs::create_dir(&videos).unwrap();
    let path = dir.path().join("config.json");
    let config = serde_json::json!({"streaming": {"video_dir": videos, "port": 9000}});
    fs::write(&path, config.to_string()).unwrap();

    let mut cmd = streamnation_cmd();
    cmd.arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_cli_validate_warns_on_missing_video_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = serde_json::json!({"streaming": {"video_dir": dir.path().join("gone")}});
    fs::write(&path, config.to_string()).unwrap();

    let mut cmd = streamnation_cmd();
    cmd.arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("video_dir"))
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_validate_reports_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"streaming": {"catalog_url": "catalog:8081"}}"#).unwrap();

    let mut cmd = streamnation_cmd();
    cmd.arg("--config")
        .arg(&path)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog_url"));
}

#[test]
fn test_cli_validate_invalid_json_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    let mut cmd = streamnation_cmd();
    cmd.arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_cli_validate_missing_file_fails() {
    let mut cmd = streamnation_cmd();
    cmd.arg("validate")
        .arg("/nonexistent/streamnation.json")
        .assert()
        .failure();
}
