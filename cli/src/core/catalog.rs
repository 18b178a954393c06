//! # VisaBot Lookup Catalog
//!
//! File: cli/src/core/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The catalog is the read-only, pre-normalized view of the conversation
//! document that the dialogue works against. It is built once from `Config`
//! and shared by reference with every session.
//!
//! ## Architecture
//!
//! - **Countries** keep document order. Each name is normalized into a match key
//!   and compiled into a whole-word pattern. If two entries normalize to the same
//!   key, the first entry's position is kept and the last entry's data wins.
//! - **Visa types** are keyed by their canonical label, again in document order
//!   with last-write-wins on collisions. The `general` entry is split out: it is
//!   never a selectable visa type, only the shared requirements text.
//! - **Display options** come from `prompts.visa_type_options` followed by the
//!   visa-type labels, prettified, de-duplicated by canonical key, without `general`.
//!
use crate::common::text::{self, matching, matching::WordPattern};
use crate::core::config::{Config, Prompts};
use crate::core::error::{Result, VisaBotError};
use anyhow::anyhow;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Canonical key of the shared requirements entry.
pub const GENERAL_KEY: &str = "general";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Normalized match key, e.g. `"cote d ivoire"`.
    pub key: String,
    /// Name shown in replies, e.g. `"Cote d'Ivoire"`.
    pub display: String,
    pub visa_required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisaTypeRecord {
    /// Canonical key, e.g. `"visaonarrival"`.
    pub key: String,
    /// Pretty label, e.g. `"Visa on Arrival"`.
    pub label: String,
    pub response: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    prompts: Prompts,
    countries: Vec<CountryRecord>,
    country_patterns: Vec<WordPattern>,
    visa_types: Vec<VisaTypeRecord>,
    visa_keys: Vec<String>,
    general: Option<String>,
    display_options: Vec<String>,
    options_text: String,
}

impl Catalog {
    pub fn from_config(config: &Config) -> Result<Self> {
        let countries = build_countries(config);
        let country_patterns = countries
            .iter()
            .map(|country| {
                WordPattern::new(&country.key).map_err(|e| {
                    anyhow!(VisaBotError::Config(format!(
                        "Could not build a pattern for country '{}': {}",
                        country.display, e
                    )))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let (visa_types, general) = build_visa_types(config);
        let visa_keys: Vec<String> = visa_types.iter().map(|vt| vt.key.clone()).collect();
        let display_options = build_display_options(&config.prompts.visa_type_options, &visa_types);
        let options_text = display_options.join(", ");

        debug!(
            "Catalog built: {} countries, {} visa types, options [{}], general requirements {}",
            countries.len(),
            visa_types.len(),
            options_text,
            if general.is_some() { "present" } else { "absent" }
        );

        Ok(Self {
            prompts: config.prompts.clone(),
            countries,
            country_patterns,
            visa_types,
            visa_keys,
            general,
            display_options,
            options_text,
        })
    }

    pub fn prompts(&self) -> &Prompts {
        &self.prompts
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Countries with the given requirement, sorted by display name (case-insensitive).
    pub fn countries_by_requirement(&self, visa_required: bool) -> Vec<&CountryRecord> {
        let mut selected: Vec<&CountryRecord> = self
            .countries
            .iter()
            .filter(|country| country.visa_required == visa_required)
            .collect();
        selected.sort_by_key(|country| country.display.to_lowercase());
        selected
    }

    pub fn visa_types(&self) -> &[VisaTypeRecord] {
        &self.visa_types
    }

    /// Display options joined with `", "`.
    pub fn options_text(&self) -> &str {
        &self.options_text
    }

    /// Text of the `general` entry, if it has a non-blank response.
    pub fn general_requirements(&self) -> Option<&str> {
        self.general.as_deref()
    }

    /// First country (in document order) named in `text`.
    pub fn match_country(&self, text: &str) -> Option<&CountryRecord> {
        matching::match_country(text, &self.country_patterns).map(|index| &self.countries[index])
    }

    /// Visa type named in `text`, `general` excluded.
    pub fn resolve_visa_type(&self, text: &str) -> Option<&VisaTypeRecord> {
        let key = matching::resolve_visa_type(text, &self.visa_keys, &self.display_options)?;
        self.visa_types.iter().find(|vt| vt.key == key)
    }
}

/// Display form of a configured country name: trimmed, title-cased if written all lower-case.
pub fn country_display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.chars().any(char::is_uppercase) {
        trimmed.to_string()
    } else {
        text::title_case(trimmed)
    }
}

fn build_countries(config: &Config) -> Vec<CountryRecord> {
    let mut countries: Vec<CountryRecord> = Vec::with_capacity(config.country_check.countries.len());
    for entry in &config.country_check.countries {
        let record = CountryRecord {
            key: text::normalize_for_match(&entry.name),
            display: country_display_name(&entry.name),
            visa_required: entry.visa_required,
        };
        if record.key.is_empty() {
            warn!("Country '{}' has no matchable characters; skipping it.", entry.name);
            continue;
        }
        match countries.iter_mut().find(|existing| existing.key == record.key) {
            Some(existing) => {
                warn!(
                    "Country '{}' is listed more than once; the last entry wins.",
                    record.display
                );
                *existing = record;
            }
            None => countries.push(record),
        }
    }
    countries
}

fn build_visa_types(config: &Config) -> (Vec<VisaTypeRecord>, Option<String>) {
    let mut visa_types: Vec<VisaTypeRecord> = Vec::with_capacity(config.visa_types.len());
    let mut general = None;
    for (label, entry) in &config.visa_types {
        let key = text::canonicalize(label);
        let response = entry
            .response
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        if key.is_empty() {
            warn!("Visa type label '{}' is empty after normalization; skipping it.", label);
            continue;
        }
        if key == GENERAL_KEY {
            general = response;
            continue;
        }
        let record = VisaTypeRecord {
            label: text::pretty_label(label),
            key,
            response,
        };
        match visa_types.iter_mut().find(|existing| existing.key == record.key) {
            Some(existing) => {
                warn!("Visa type '{}' is listed more than once; the last entry wins.", label);
                *existing = record;
            }
            None => visa_types.push(record),
        }
    }
    (visa_types, general)
}

fn build_display_options(configured: &[String], visa_types: &[VisaTypeRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    configured
        .iter()
        .map(|label| text::pretty_label(label))
        .chain(visa_types.iter().map(|vt| vt.label.clone()))
        .filter(|label| {
            let key = text::canonicalize(label);
            !key.is_empty() && key != GENERAL_KEY && seen.insert(key)
        })
        .collect()
}
