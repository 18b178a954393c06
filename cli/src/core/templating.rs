//! # VisaBot Prompt Templating
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Prompt texts from the conversation document are Tera templates rendered with
//! two variables:
//! - `country`: the display name of the country under discussion ("your country" if none)
//! - `visa_type_options`: the comma-separated visa-type display options
//!
//! Older documents use single-brace placeholders (`{visa_type_options}`); these
//! are rewritten to Tera syntax before rendering, so both spellings work.
//!
//! ## Architecture
//!
//! - `validate_template` is called while loading the document; a template that
//!   does not render is a fatal configuration error.
//! - `render_or_raw` is what the dialogue calls. It cannot fail: if rendering
//!   breaks anyway, the raw text is returned and a warning is logged.
//!
//! ## Examples
//!
//! ```rust
//! let ctx = PromptContext { country: "Iran", visa_type_options: "Tourist, Business" };
//! let text = templating::render_or_raw("Which visa type? ({visa_type_options})", &ctx);
//! assert_eq!(text, "Which visa type? (Tourist, Business)");
//! ```
//!
use crate::core::error::{Result, VisaBotError};
use anyhow::anyhow;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tera::Tera;
use tracing::warn;

static LEGACY_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{?\s*(country|visa_type_options)\s*\}\}?").expect("valid placeholder pattern")
});

static OPTIONS_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{[^}]*\bvisa_type_options\b[^}]*\}\}").expect("valid options reference pattern")
});

/// Variables available to every prompt template.
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub country: &'a str,
    pub visa_type_options: &'a str,
}

impl<'a> PromptContext<'a> {
    fn to_tera(self) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("country", self.country);
        context.insert("visa_type_options", self.visa_type_options);
        context
    }
}

/// Rewrites `{country}` / `{visa_type_options}` (and spacing variants) into `{{ name }}`.
pub fn to_tera_syntax(template: &str) -> Cow<'_, str> {
    LEGACY_PLACEHOLDER.replace_all(template, "{{ ${1} }}")
}

/// True if the template interpolates the visa-type options itself.
pub fn references_options(template: &str) -> bool {
    OPTIONS_REFERENCE.is_match(&to_tera_syntax(template))
}

pub fn render_prompt(template: &str, ctx: &PromptContext<'_>) -> Result<String> {
    if !template.contains('{') {
        return Ok(template.to_string());
    }
    let source = to_tera_syntax(template);
    Tera::one_off(&source, &ctx.to_tera(), false).map_err(|e| {
        anyhow!(VisaBotError::Template { source: e }).context("Tera rendering failed for prompt")
    })
}

/// Renders a prompt, falling back to the unrendered text on failure.
pub fn render_or_raw(template: &str, ctx: &PromptContext<'_>) -> String {
    match render_prompt(template, ctx) {
        Ok(text) => text,
        Err(e) => {
            warn!("Prompt template failed to render, using raw text: {:#}", e);
            template.to_string()
        }
    }
}

/// Checks that a template renders with placeholder values.
pub fn validate_template(template: &str) -> Result<()> {
    let sample = PromptContext {
        country: "Testland",
        visa_type_options: "Tourist, Business",
    };
    render_prompt(template, &sample).map(|_| ())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const CTX: PromptContext<'static> = PromptContext {
        country: "Iran",
        visa_type_options: "Tourist, Business, Visa on Arrival",
    };

    #[test]
    fn test_plain_text_is_untouched() -> Result<()> {
        assert_eq!(render_prompt("Which country are you from?", &CTX)?, "Which country are you from?");
        Ok(())
    }

    #[test]
    fn test_render_tera_syntax() -> Result<()> {
        let rendered = render_prompt("For {{ country }}: pick one of {{ visa_type_options }}.", &CTX)?;
        assert_eq!(rendered, "For Iran: pick one of Tourist, Business, Visa on Arrival.");
        Ok(())
    }

    #[test]
    fn test_render_legacy_placeholders() -> Result<()> {
        let rendered = render_prompt("Options: ({visa_type_options}) for {country}", &CTX)?;
        assert_eq!(rendered, "Options: (Tourist, Business, Visa on Arrival) for Iran");
        Ok(())
    }

    #[test]
    fn test_render_does_not_escape_html() -> Result<()> {
        let ctx = PromptContext {
            country: "Trinidad & Tobago",
            visa_type_options: "",
        };
        assert_eq!(render_prompt("{{ country }}", &ctx)?, "Trinidad & Tobago");
        Ok(())
    }

    #[test]
    fn test_references_options() {
        assert!(references_options("Pick: {visa_type_options}"));
        assert!(references_options("Pick: {{ visa_type_options }}"));
        assert!(!references_options("Which visa type are you interested in?"));
        assert!(!references_options("For {{ country }}, which visa?"));
    }

    #[test]
    fn test_invalid_template() {
        let result = validate_template("Hello {{ country");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Tera rendering failed"));
    }

    #[test]
    fn test_render_or_raw_falls_back() {
        assert_eq!(render_or_raw("Hello {{ country", &CTX), "Hello {{ country");
        assert_eq!(render_or_raw("Hello {{ country }}", &CTX), "Hello Iran");
    }
}
