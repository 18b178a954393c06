//! # VisaBot CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behaviour of the `visabot` binary: standard flags, subcommand
//! help and how the conversation document is located.
//!
mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_version_flag() {
    visabot_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_subcommands() {
    visabot_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("chat")
            .and(predicate::str::contains("ask"))
            .and(predicate::str::contains("countries")),
    );
}

#[test]
fn test_missing_subcommand_fails() {
    visabot_cmd().assert().failure();
}

#[test]
fn test_missing_config_is_fatal() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    visabot_isolated_in(dir.path())
        .args(["ask", "Ghana"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: No conversation document found"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = tempdir().unwrap();
    visabot_isolated_in(dir.path())
        .args(["--config", "nope.toml", "countries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_config_from_environment_variable() {
    let dir = tempdir().unwrap();
    visabot_isolated_in(dir.path())
        .env("VISABOT_CONFIG", fixture_config())
        .args(["ask", "Ghana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("For Ghana, Excellent"));
}

#[test]
fn test_config_discovered_in_ancestor_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::copy(fixture_config(), dir.path().join("conversation.toml")).unwrap();
    let nested = dir.path().join("a/b");
    fs::create_dir_all(&nested).unwrap();

    visabot_isolated_in(dir.path())
        .current_dir(&nested)
        .args(["ask", "Iran"])
        .assert()
        .success()
        .stdout(predicate::str::contains("For Iran, Great!"));
}

#[test]
fn test_json_document_without_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Conversation");
    fs::write(
        &path,
        r#"{
            "prompts": {
                "welcome": "Hi",
                "ask_country": "Where from?",
                "goodbye": "Bye now"
            },
            "country_check": { "countries": [ { "name": "togo", "visa_required": false } ] },
            "visa_types": {}
        }"#,
    )
    .unwrap();

    visabot_isolated_in(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["ask", "I am from Togo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("For Togo, Excellent"));
}

#[test]
fn test_invalid_document_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("conversation.toml");
    fs::write(&path, "[prompts]\nwelcome = \"Hi\"\n").unwrap();

    visabot_isolated_in(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["countries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse conversation document"));
}
