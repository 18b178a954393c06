//! # Matching Strategies
//!
//! File: cli/src/common/text/matching.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Country and visa-type lookup from free text. Both lookups are deliberately
//! loose and deterministic: every key set is scanned in configuration order and
//! the first hit wins. There is no longest-match or scoring policy.
//!
//! ## Country lookup
//!
//! The utterance is normalized (`normalize_for_match`). A key equal to the whole
//! utterance wins outright; otherwise the first key found as a whole word inside
//! the utterance wins. `"I'm from Iran, thanks"` finds `iran`.
//!
//! ## Visa-type lookup
//!
//! The utterance is canonicalized and compared against the canonical visa-type
//! keys in two passes. The first pass looks for an `Exact` key. The second walks
//! the keys once in configuration order and takes the first key the input starts
//! with (`Prefix`) or contains (`Substring`); a prefix hit gets no priority over
//! a substring hit on an earlier key. If nothing hits, the same passes run over
//! the canonical display labels; a label hit only counts when that label is
//! itself a known visa-type key.
//!
use super::{canonicalize, normalize_for_match};
use regex::Regex;

/// One way of comparing a canonical input against a canonical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Input equals the key.
    Exact,
    /// Input starts with the key (`"touristvisa"` hits `tourist`).
    Prefix,
    /// Key appears anywhere in the input (`"atouristvisa"` hits `tourist`).
    Substring,
}

impl MatchStrategy {
    pub fn matches(self, input: &str, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        match self {
            MatchStrategy::Exact => input == key,
            MatchStrategy::Prefix => input.starts_with(key),
            MatchStrategy::Substring => input.contains(key),
        }
    }
}

/// Returns the first hit with the strategy that found it.
///
/// An exact key anywhere in `keys` wins. Otherwise the first key, in order,
/// that the input starts with or contains.
pub fn first_match<'a, I>(input: &str, keys: I) -> Option<(&'a str, MatchStrategy)>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let keys = keys.into_iter();
    if let Some(key) = keys.clone().find(|key| MatchStrategy::Exact.matches(input, key)) {
        return Some((key, MatchStrategy::Exact));
    }
    keys.into_iter().find_map(|key| {
        [MatchStrategy::Prefix, MatchStrategy::Substring]
            .into_iter()
            .find(|strategy| strategy.matches(input, key))
            .map(|strategy| (key, strategy))
    })
}

/// Resolves free text to a canonical visa-type key.
///
/// `visa_keys` must already be canonical. `display_options` are human labels and
/// are canonicalized here.
pub fn resolve_visa_type(text: &str, visa_keys: &[String], display_options: &[String]) -> Option<String> {
    let input = canonicalize(text);
    if input.is_empty() {
        return None;
    }
    if let Some((key, _)) = first_match(&input, visa_keys.iter().map(String::as_str)) {
        return Some(key.to_string());
    }

    let label_keys: Vec<String> = display_options.iter().map(|label| canonicalize(label)).collect();
    first_match(&input, label_keys.iter().map(String::as_str))
        .map(|(key, _)| key.to_string())
        .filter(|key| visa_keys.contains(key))
}

/// A country key compiled for whole-word search.
#[derive(Debug, Clone)]
pub struct WordPattern {
    key: String,
    regex: Regex,
}

impl WordPattern {
    /// `key` must already be normalized with `normalize_for_match`.
    pub fn new(key: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\b{}\b", regex::escape(key)))?;
        Ok(Self {
            key: key.to_string(),
            regex,
        })
    }

    /// `normalized` must already be normalized with `normalize_for_match`.
    pub fn is_found_in(&self, normalized: &str) -> bool {
        self.regex.is_match(normalized)
    }
}

/// Returns the index of the first pattern matching `text` (exact utterance first, then whole word).
pub fn match_country(text: &str, patterns: &[WordPattern]) -> Option<usize> {
    let normalized = normalize_for_match(text);
    if normalized.is_empty() {
        return None;
    }
    patterns
        .iter()
        .position(|pattern| pattern.key == normalized)
        .or_else(|| patterns.iter().position(|pattern| pattern.is_found_in(&normalized)))
}
