//! # VisaBot Text Utilities (`common::text`)
//!
//! File: cli/src/common/text/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Normalization helpers shared by the lookup tables and the dialogue:
//!
//! - **`canonicalize`**: comparison keys for visa-type labels (`"Visa-On Arrival"` → `"visaonarrival"`).
//! - **`normalize_for_match`**: country keys and utterances prepared for whole-word search
//!   (`"Iran?"` → `"iran"`, `"Côte d'Ivoire"` → `"côte d ivoire"`).
//! - **`pretty_label`** / **`title_case`**: human-readable labels for replies.
//!
//! Submodules:
//! - **`patterns`**: conversational cues (thanks, farewell, greeting, affirmative).
//! - **`matching`**: the ordered matching strategies used for countries and visa types.
//!

/// Regex cues recognised in any dialogue state.
pub mod patterns;
/// Ordered matching strategies and whole-word patterns.
pub mod matching;

/// Lower-cases and removes whitespace, underscores and hyphens.
pub fn canonicalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect()
}

/// Lower-cases, turns punctuation into spaces and collapses whitespace runs.
///
/// Word characters (letters, digits, `_`) and whitespace are kept.
pub fn normalize_for_match(s: &str) -> String {
    let spaced: String = s
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Human-friendly label for a visa type or option.
///
/// Separators become spaces; labels written without any capital letter are title-cased.
pub fn pretty_label(label: &str) -> String {
    if canonicalize(label) == "visaonarrival" {
        return "Visa on Arrival".to_string();
    }
    let cleaned = label.replace(['_', '-'], " ");
    let cleaned = cleaned.trim();
    if cleaned.chars().any(char::is_uppercase) {
        cleaned.to_string()
    } else {
        title_case(cleaned)
    }
}
