//! # Pure Transition Function
//!
//! File: cli/src/core/dialogue/transition.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `transition` maps `(state, session data, utterance)` to
//! `(new state, new session data, reply)` with no side effects. Given the same
//! catalog and inputs it always produces the same outputs, which keeps the
//! whole dialogue testable without a front end.
//!
//! ## Order of checks
//!
//! 1. Thanks (any state) → thank-you reply, `END`.
//! 2. Farewell (any state) → goodbye, `END`.
//! 3. State-specific handling:
//!    - `ASK_COUNTRY`: greeting → ask for the country again; known country →
//!      visa-free answer (`END`) or visa-type question (`ASK_VISA_TYPE`);
//!      otherwise the country fallback.
//!    - `ASK_VISA_TYPE`: a country is checked first (same country → nudge,
//!      another country → the country branches above); then a visa type →
//!      requirements (`END`); then "options" → the options list; otherwise
//!      the visa-type fallback.
//!    - `END`: yes/sure → ask for the country (`ASK_COUNTRY`); anything else → goodbye.
//!
//! Every input produces a reply. There is no error path.
//!
use super::replies;
use super::session::SessionData;
use super::state::DialogueState;
use crate::common::text::{self, patterns};
use crate::core::catalog::{Catalog, CountryRecord};

/// Which rule produced a transition. Front ends use it for analytics and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    Thanks,
    Farewell,
    Greeting,
    /// A visa-free country was named.
    VisaFree { country: String },
    /// A visa-required country was named.
    VisaRequired { country: String },
    /// The country already under discussion was named again.
    SameCountry,
    /// Requirements were shown. `document` is the reply without the follow-up question.
    Requirements { visa_type: String, document: String },
    OptionsList,
    UnknownCountry,
    UnknownVisaType,
    /// "Yes" after an answer: start over.
    Restart,
    /// Anything else after an answer.
    Goodbye,
}

impl Branch {
    pub fn name(&self) -> &'static str {
        match self {
            Branch::Thanks => "thanks",
            Branch::Farewell => "farewell",
            Branch::Greeting => "greeting",
            Branch::VisaFree { .. } => "visa_free",
            Branch::VisaRequired { .. } => "visa_required",
            Branch::SameCountry => "same_country",
            Branch::Requirements { .. } => "requirements",
            Branch::OptionsList => "options_list",
            Branch::UnknownCountry => "unknown_country",
            Branch::UnknownVisaType => "unknown_visa_type",
            Branch::Restart => "restart",
            Branch::Goodbye => "goodbye",
        }
    }
}

/// Result of a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DialogueState,
    pub data: SessionData,
    pub reply: String,
    pub branch: Branch,
}

impl Transition {
    fn new(state: DialogueState, data: SessionData, reply: String, branch: Branch) -> Self {
        Self {
            state,
            data,
            reply,
            branch,
        }
    }
}

/// Pure transition function.
pub fn transition(
    state: DialogueState,
    data: &SessionData,
    catalog: &Catalog,
    input: &str,
) -> Transition {
    let text = input.trim();
    let prompts = catalog.prompts();
    let current = data.current_country.as_deref();

    if patterns::is_thanks(text) {
        let reply = replies::render(catalog, &prompts.thanks, current);
        return Transition::new(DialogueState::End, data.clone(), reply, Branch::Thanks);
    }
    if patterns::is_farewell(text) {
        let reply = replies::render(catalog, &prompts.goodbye, current);
        return Transition::new(DialogueState::End, data.clone(), reply, Branch::Farewell);
    }

    match state {
        DialogueState::AskCountry => {
            if patterns::is_greeting(text) {
                let reply = replies::render(catalog, &prompts.ask_country, current);
                Transition::new(DialogueState::AskCountry, data.clone(), reply, Branch::Greeting)
            } else if let Some(country) = catalog.match_country(text) {
                country_answer(catalog, country)
            } else {
                let reply = replies::render(catalog, &prompts.fallback_country, current);
                Transition::new(
                    DialogueState::AskCountry,
                    data.clone(),
                    reply,
                    Branch::UnknownCountry,
                )
            }
        }

        DialogueState::AskVisaType => {
            if let Some(country) = catalog.match_country(text) {
                if is_current_country(data, country) {
                    let reply = replies::already_discussing(catalog, &country.display);
                    Transition::new(DialogueState::AskVisaType, data.clone(), reply, Branch::SameCountry)
                } else {
                    country_answer(catalog, country)
                }
            } else if let Some(visa_type) = catalog.resolve_visa_type(text) {
                let document = replies::requirements(catalog, visa_type, current);
                let reply = replies::with_follow_up(catalog, document.clone(), current);
                Transition::new(
                    DialogueState::End,
                    data.clone(),
                    reply,
                    Branch::Requirements {
                        visa_type: visa_type.key.clone(),
                        document,
                    },
                )
            } else if patterns::mentions_options(text) {
                let reply = replies::options_list(catalog);
                Transition::new(DialogueState::AskVisaType, data.clone(), reply, Branch::OptionsList)
            } else {
                let reply = replies::render(catalog, &prompts.fallback_visa_type, current);
                Transition::new(
                    DialogueState::AskVisaType,
                    data.clone(),
                    reply,
                    Branch::UnknownVisaType,
                )
            }
        }

        DialogueState::End => {
            if patterns::is_affirmative(text) {
                let reply = replies::render(catalog, &prompts.ask_country, current);
                Transition::new(DialogueState::AskCountry, data.clone(), reply, Branch::Restart)
            } else {
                let reply = replies::render(catalog, &prompts.goodbye, current);
                Transition::new(DialogueState::End, data.clone(), reply, Branch::Goodbye)
            }
        }
    }
}

/// Answer for a newly matched country. It becomes the current country.
fn country_answer(catalog: &Catalog, country: &CountryRecord) -> Transition {
    let data = SessionData {
        current_country: Some(country.display.clone()),
    };
    if country.visa_required {
        Transition::new(
            DialogueState::AskVisaType,
            data,
            replies::ask_visa_type(catalog, country),
            Branch::VisaRequired {
                country: country.display.clone(),
            },
        )
    } else {
        Transition::new(
            DialogueState::End,
            data,
            replies::visa_free(catalog, country),
            Branch::VisaFree {
                country: country.display.clone(),
            },
        )
    }
}

fn is_current_country(data: &SessionData, country: &CountryRecord) -> bool {
    data.current_country
        .as_deref()
        .map_or(false, |current| text::normalize_for_match(current) == country.key)
}
