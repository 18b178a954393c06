//! # Dialogue Session
//!
//! File: cli/src/core/dialogue/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `Session` owns the mutable side of a conversation: the current state, the
//! country under discussion, per-session analytics and the last requirements
//! document shown. Front ends call `respond` once per user utterance.
//!
//! The session never outlives the process; nothing here is persisted.
//!
use super::analytics::Analytics;
use super::state::DialogueState;
use super::transition::{transition, Branch, Transition};
use crate::core::catalog::Catalog;
use tracing::debug;

/// Data carried between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    /// Display name of the most recently matched country.
    pub current_country: Option<String>,
}

#[derive(Debug, Default)]
pub struct Session {
    state: DialogueState,
    data: SessionData,
    analytics: Analytics,
    last_answer: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one utterance and returns the reply.
    pub fn respond(&mut self, catalog: &Catalog, input: &str) -> String {
        let Transition {
            state,
            data,
            reply,
            branch,
        } = transition(self.state, &self.data, catalog, input);

        debug!(
            "Transition {} -> {} via {} (country: {})",
            self.state,
            state,
            branch.name(),
            data.current_country.as_deref().unwrap_or("-")
        );

        match &branch {
            Branch::VisaFree { country } => self.analytics.record_country(country, false),
            Branch::VisaRequired { country } => self.analytics.record_country(country, true),
            Branch::Requirements {
                visa_type,
                document,
            } => {
                debug!("Keeping requirements answer for visa type '{}'", visa_type);
                self.last_answer = Some(document.clone());
            }
            _ => {}
        }

        self.state = state;
        self.data = data;
        reply
    }

    /// Starts a new chat: `ASK_COUNTRY`, no country, empty analytics.
    pub fn reset(&mut self) {
        debug!("Resetting session from state {}", self.state);
        *self = Self::default();
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn current_country(&self) -> Option<&str> {
        self.data.current_country.as_deref()
    }

    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    /// Most recent requirements document, without the follow-up question.
    pub fn last_answer(&self) -> Option<&str> {
        self.last_answer.as_deref()
    }
}
