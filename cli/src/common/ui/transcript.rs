//! # Chat Transcript
//!
//! File: cli/src/common/ui/transcript.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `chat` REPL records every line it reads and every reply it prints,
//! each stamped with local time. `to_markdown` produces the file written by
//! `visabot chat --transcript <PATH>`:
//!
//! ```text
//! # VisaBot transcript
//!
//! Started 2024-05-01 14:02:11
//!
//! **VisaBot** (14:02:11): Which country are you from?
//!
//! **You** (14:02:15): Ghana
//! ```
//!
use chrono::{DateTime, Local};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => f.write_str("You"),
            Speaker::Bot => f.write_str("VisaBot"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub at: DateTime<Local>,
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `text` with the current local time.
    pub fn record(&mut self, speaker: Speaker, text: &str) {
        self.record_at(Local::now(), speaker, text);
    }

    pub fn record_at(&mut self, at: DateTime<Local>, speaker: Speaker, text: &str) {
        self.entries.push(TranscriptEntry {
            at,
            speaker,
            text: text.to_string(),
        });
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# VisaBot transcript\n");
        if let Some(first) = self.entries.first() {
            out.push_str(&format!("\nStarted {}\n", first.at.format("%Y-%m-%d %H:%M:%S")));
        }
        for entry in &self.entries {
            out.push_str(&format!(
                "\n**{}** ({}): {}\n",
                entry.speaker,
                entry.at.format("%H:%M:%S"),
                entry.text
            ));
        }
        out
    }
}
