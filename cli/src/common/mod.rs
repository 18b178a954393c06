//! # VisaBot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared utilities with no knowledge of dialogue rules. Command handlers and
//! the `core` modules import directly from the submodule they need.
//!
//! - **`fs`**: reading the conversation document and writing exports.
//! - **`text`**: normalization, display labels, conversational cue patterns
//!   and the matching strategies used for countries and visa types.
//! - **`ui`**: terminal rendering of replies, tables and transcripts.
//!

/// Filesystem I/O helpers.
pub mod fs;
/// Text normalization and matching.
pub mod text;
/// Terminal presentation helpers.
pub mod ui;
