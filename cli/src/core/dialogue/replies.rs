//! # Reply Composition
//!
//! File: cli/src/core/dialogue/replies.rs
//! Author: Christi Mahu
//!
//! Builders for the replies that combine several prompts or catalog entries.
//! Single-prompt replies are rendered directly in `transition`.
//!
use crate::core::catalog::{Catalog, CountryRecord, VisaTypeRecord};
use crate::core::templating::{self, PromptContext};
use once_cell::sync::Lazy;
use regex::Regex;

/// Country name used when no country has been matched yet.
pub const NO_COUNTRY: &str = "your country";

/// Prompt templates that already list the options sometimes end up with two lists.
static TRAILING_DUPLICATE_OPTIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\)\s*\([^()]*\)\s*$").expect("valid duplicate options pattern"));

pub fn prompt_context<'a>(catalog: &'a Catalog, country: Option<&'a str>) -> PromptContext<'a> {
    PromptContext {
        country: country.unwrap_or(NO_COUNTRY),
        visa_type_options: catalog.options_text(),
    }
}

/// Renders a named prompt for the given country.
pub fn render(catalog: &Catalog, template: &str, country: Option<&str>) -> String {
    templating::render_or_raw(template, &prompt_context(catalog, country))
}

/// Appends the `ask_more` follow-up, if one is configured.
pub fn with_follow_up(catalog: &Catalog, reply: String, country: Option<&str>) -> String {
    let follow_up = render(catalog, &catalog.prompts().ask_more, country);
    if follow_up.trim().is_empty() {
        reply
    } else {
        format!("{}\n\n{}", reply, follow_up.trim())
    }
}

/// "For Ghana, excellent, you do not need a visa..." plus the follow-up.
pub fn visa_free(catalog: &Catalog, country: &CountryRecord) -> String {
    let message = render(catalog, &catalog.prompts().visa_free_msg, Some(country.display.as_str()));
    let reply = format!("For {}, {}", country.display, message.trim());
    with_follow_up(catalog, reply, Some(country.display.as_str()))
}

/// The ask-visa-type prompt with the options list, prefixed with the country.
pub fn ask_visa_type(catalog: &Catalog, country: &CountryRecord) -> String {
    let template = &catalog.prompts().ask_visa_type;
    let rendered = render(catalog, template, Some(country.display.as_str()));
    let with_options = if templating::references_options(template) || catalog.options_text().is_empty() {
        rendered.trim().to_string()
    } else {
        format!("{} ({})", rendered.trim(), catalog.options_text())
    };
    let deduplicated = TRAILING_DUPLICATE_OPTIONS.replace(&with_options, ")");
    format!("For {}, {}", country.display, deduplicated)
}

/// Nudge shown when the user repeats the country already under discussion.
pub fn already_discussing(catalog: &Catalog, country: &str) -> String {
    format!(
        "We're already discussing {}. Please choose a visa type ({}) or ask about another country.",
        country,
        catalog.options_text()
    )
}

/// Reply to "what are the options?" while a visa type is expected.
pub fn options_list(catalog: &Catalog) -> String {
    format!("Available visa types: {}", catalog.options_text())
}

/// Requirements document: general requirements and the chosen visa type's text.
///
/// Sections without text are omitted. When neither has text, a short
/// "no details available" line is returned instead.
pub fn requirements(catalog: &Catalog, visa_type: &VisaTypeRecord, country: Option<&str>) -> String {
    let country = country.unwrap_or(NO_COUNTRY);
    let mut sections = Vec::new();
    if let Some(general) = catalog.general_requirements() {
        sections.push(format!("### General requirements\n{}", general));
    }
    if let Some(response) = &visa_type.response {
        sections.push(format!("### {} visa\n{}", visa_type.label, response));
    }
    if sections.is_empty() {
        return format!("For {}, no details available.", country);
    }
    format!(
        "**For {}, here are the requirements:**\n\n{}",
        country,
        sections.join("\n\n")
    )
}
