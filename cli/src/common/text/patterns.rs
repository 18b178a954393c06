//! # Conversational Cues
//!
//! File: cli/src/common/text/patterns.rs
//! Author: Christi Mahu
//!
//! Case-insensitive, whole-word regexes for the small set of cues the dialogue
//! reacts to regardless of what it is currently asking.
//!
use once_cell::sync::Lazy;
use regex::Regex;

static THANKS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(thanks?|thank\s*you)\b").expect("valid thanks pattern"));

static FAREWELL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(bye|goodbye|see\s+you|exit|quit)\b").expect("valid farewell pattern")
});

static GREETING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(hi|hello|hey|good\s+day|how\s+are\s+you)\b")
        .expect("valid greeting pattern")
});

static AFFIRMATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(yes|yep|yeah|sure|of\s+course)\b").expect("valid affirmative pattern")
});

static OPTIONS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)option").expect("valid options pattern"));

pub fn is_thanks(text: &str) -> bool {
    THANKS_PATTERN.is_match(text)
}

pub fn is_farewell(text: &str) -> bool {
    FAREWELL_PATTERN.is_match(text)
}

pub fn is_greeting(text: &str) -> bool {
    GREETING_PATTERN.is_match(text)
}

pub fn is_affirmative(text: &str) -> bool {
    AFFIRMATIVE_PATTERN.is_match(text)
}

/// True when the user asks which visa types exist ("options?", "what are the options").
pub fn mentions_options(text: &str) -> bool {
    OPTIONS_PATTERN.is_match(text)
}
