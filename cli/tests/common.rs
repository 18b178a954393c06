//! # VisaBot CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `visabot` binary through
//! `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Command for the compiled `visabot` binary with no config taken from the environment.
pub fn visabot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("visabot").expect("Failed to find visabot binary for testing");
    cmd.env_remove("VISABOT_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// The conversation document in `cli/tests/fixtures`.
pub fn fixture_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("conversation.toml")
}

/// The sample conversation document shipped at the repository root.
pub fn sample_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("conversation.toml")
}

/// `visabot` pointed at the fixture document via `--config`.
pub fn visabot_with_fixture() -> Command {
    let mut cmd = visabot_cmd();
    cmd.arg("--config").arg(fixture_config());
    cmd
}

/// `visabot` run from `dir` with home and XDG config pointing into `dir`, so only
/// documents placed under `dir` can be discovered.
pub fn visabot_isolated_in(dir: &Path) -> Command {
    let mut cmd = visabot_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}
