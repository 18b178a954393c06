//! # VisaBot Dialogue
//!
//! File: cli/src/core/dialogue/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The three-state conversation that decides whether a traveller needs a
//! Nigerian entry visa and, if so, which visa-type information to show.
//!
//! ```text
//! ASK_COUNTRY   --greeting / unknown country-->        ASK_COUNTRY
//! ASK_COUNTRY   --visa-free country-->                 END
//! ASK_COUNTRY   --visa-required country-->             ASK_VISA_TYPE
//! ASK_VISA_TYPE --same country / unknown / options-->  ASK_VISA_TYPE
//! ASK_VISA_TYPE --other country-->                     END or ASK_VISA_TYPE
//! ASK_VISA_TYPE --known visa type-->                   END
//! END           --yes / sure / of course-->            ASK_COUNTRY
//! END           --anything else-->                     END (goodbye)
//! any           --thanks / bye-->                      END
//! ```
//!
//! ## Architecture
//!
//! - `state`: the `DialogueState` enum
//! - `transition`: the pure function `(state, data, input) -> (state, data, reply)`
//! - `replies`: composition of the replies that are more than a single prompt
//! - `analytics`: per-session counters of countries asked and outcomes
//! - `session`: `Session`, the driver a front end calls once per utterance
//!
pub mod analytics;
pub mod replies;
pub mod session;
pub mod state;
pub mod transition;

#[cfg(test)]
mod proptests;

pub use session::Session;
pub use state::DialogueState;
