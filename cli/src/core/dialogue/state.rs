//! # Dialogue States
//!
//! File: cli/src/core/dialogue/state.rs
//! Author: Christi Mahu
//!
use serde::Serialize;
use std::fmt;

/// Where the conversation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DialogueState {
    /// Waiting for the traveller's country. Initial state.
    #[default]
    AskCountry,
    /// A visa-required country was named; waiting for a visa type.
    AskVisaType,
    /// An answer was given or the user said goodbye. Re-entered with "yes".
    End,
}

impl DialogueState {
    pub fn as_str(self) -> &'static str {
        match self {
            DialogueState::AskCountry => "ASK_COUNTRY",
            DialogueState::AskVisaType => "ASK_VISA_TYPE",
            DialogueState::End => "END",
        }
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
