//! # VisaBot UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal presentation for the command front ends. Nothing here touches
//! dialogue state; every function turns data into text and leaves printing
//! to the caller.
//!
//! - **`reply`**: renders the light Markdown of bot replies for a terminal.
//! - **`tables`**: aligned country tables and the session statistics block.
//! - **`transcript`**: timestamped record of a chat, exportable as Markdown.
//!

/// Terminal rendering of reply text (`to_terminal`).
pub mod reply;
/// Column layouts for country listings and analytics (`render_table`, `render_stats`).
pub mod tables;
/// Chat transcripts (`Transcript`, `Speaker`).
pub mod transcript;
