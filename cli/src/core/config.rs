//! # VisaBot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads the conversation document: the prompt texts, the list of
//! countries with their visa requirement, and the visa-type responses. The
//! document is read once at startup and treated as immutable afterwards.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - The document path is resolved from several sources in order of precedence
//! - `~` in user-supplied paths is expanded
//! - TOML and JSON documents are both accepted, chosen by file extension
//! - The parsed document is validated before use; any failure is fatal
//!
//! Configuration sources (in order of precedence):
//! 1. `--config <PATH>` (or the `VISABOT_CONFIG` environment variable)
//! 2. `conversation.toml` / `conversation.json` in the current directory or ancestors
//! 3. `conversation.toml` / `conversation.json` in the user config directory
//!
//! ## Examples
//!
//! ```toml
//! [prompts]
//! welcome = "Hello! I can tell you whether you need a visa to visit Nigeria."
//! ask_country = "Which country are you from?"
//! goodbye = "Thank you, hope I helped. Goodbye!"
//! ask_visa_type = "Which visa type are you interested in? ({{ visa_type_options }})"
//!
//! [[country_check.countries]]
//! name = "Ghana"
//! visa_required = false
//!
//! [visa_types.tourist]
//! response = "Passport valid for six months, return ticket, hotel booking."
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{Result, VisaBotError};
use crate::core::templating;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File names searched for in the working directory, its ancestors and the user config dir.
const CONFIG_FILENAMES: [&str; 3] = ["conversation.toml", "conversation.json", "Conversation"];

/// Represents the whole conversation document.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub prompts: Prompts,
    pub country_check: CountryCheck,
    /// Visa-type label to response record, in document order.
    #[serde(default, deserialize_with = "ordered_entries")]
    pub visa_types: Vec<(String, VisaTypeEntry)>,
}

/// Prompt texts. Each one may use `{{ country }}` and `{{ visa_type_options }}`.
#[derive(Deserialize, Debug, Clone)]
pub struct Prompts {
    pub welcome: String,
    pub ask_country: String,
    pub goodbye: String,
    #[serde(default = "default_ask_visa_type")]
    pub ask_visa_type: String,
    #[serde(default = "default_fallback_country")]
    pub fallback_country: String,
    #[serde(default = "default_fallback_visa_type")]
    pub fallback_visa_type: String,
    #[serde(default = "default_visa_free_msg")]
    pub visa_free_msg: String,
    /// Follow-up question appended to final answers. Empty means nothing is appended.
    #[serde(default)]
    pub ask_more: String,
    #[serde(default = "default_thanks")]
    pub thanks: String,
    /// Display labels offered when asking for a visa type.
    #[serde(default)]
    pub visa_type_options: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CountryCheck {
    #[serde(default)]
    pub countries: Vec<CountryEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: String,
    pub visa_required: bool,
}

/// A visa-type record. A missing `response` is tolerated and omitted from replies.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VisaTypeEntry {
    #[serde(default)]
    pub response: Option<String>,
}

impl Prompts {
    /// Iterates over every prompt that is rendered as a template.
    pub fn templates(&self) -> [(&'static str, &str); 9] {
        [
            ("welcome", self.welcome.as_str()),
            ("ask_country", self.ask_country.as_str()),
            ("goodbye", self.goodbye.as_str()),
            ("ask_visa_type", self.ask_visa_type.as_str()),
            ("fallback_country", self.fallback_country.as_str()),
            ("fallback_visa_type", self.fallback_visa_type.as_str()),
            ("visa_free_msg", self.visa_free_msg.as_str()),
            ("ask_more", self.ask_more.as_str()),
            ("thanks", self.thanks.as_str()),
        ]
    }
}

fn default_ask_visa_type() -> String {
    "Great! You need a visa to visit Nigeria. Which visa type are you interested in?".to_string()
}
fn default_fallback_country() -> String {
    "Sorry, I didn't recognize that country. Please tell me which country you're from.".to_string()
}
fn default_fallback_visa_type() -> String {
    "Sorry, I don't have details for that visa type. Options: {{ visa_type_options }}.".to_string()
}
fn default_visa_free_msg() -> String {
    "Excellent, you do not need a visa to visit Nigeria.".to_string()
}
fn default_thanks() -> String {
    "You're welcome! Have an amazing time in Nigeria!".to_string()
}

/// Deserializes a map into a `Vec` of entries, keeping the order of the document.
fn ordered_entries<'de, D, V>(deserializer: D) -> std::result::Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a table of visa types")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

/// Syntax of a conversation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// `.toml` files are TOML; anything else (including no extension) is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Resolves, reads, parses and validates the conversation document.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let path = resolve_config_path(explicit_path)?;
    info!("Loading conversation document from: {}", path.display());
    let config = load_config_from_path(&path)?;
    validate_config(&config).context("Conversation document validation failed")?;
    debug!(
        "Loaded {} countries and {} visa types",
        config.country_check.countries.len(),
        config.visa_types.len()
    );
    Ok(config)
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        let expanded = io::expand_path(path);
        if !expanded.is_file() {
            return Err(anyhow!(VisaBotError::ConfigNotFound {
                searched: expanded.display().to_string(),
            }));
        }
        return Ok(expanded);
    }

    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(path) = find_project_config_from(&current_dir) {
        return Ok(path);
    }
    if let Some(path) = find_user_config() {
        return Ok(path);
    }
    Err(anyhow!(VisaBotError::ConfigNotFound {
        searched: format!(
            "--config / VISABOT_CONFIG, {} in '{}' and its ancestors, user config directory",
            CONFIG_FILENAMES.join(" / "),
            current_dir.display()
        ),
    }))
}

/// Walks from `start` towards the filesystem root, stopping at a `.git` directory.
fn find_project_config_from(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        if let Some(found) = config_in_dir(path) {
            return Some(found);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping conversation document search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn find_user_config() -> Option<PathBuf> {
    match ProjectDirs::from("com", "VisaBot", "visabot") {
        Some(proj_dirs) => config_in_dir(proj_dirs.config_dir()),
        None => {
            warn!("Could not determine user config directory.");
            None
        }
    }
}

fn config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILENAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    parse_config(&content, DocumentFormat::from_path(path)).map_err(|message| {
        anyhow!(VisaBotError::ConfigParse {
            path: path.display().to_string(),
            message,
        })
    })
}

/// Parses document text. The error is the parser's message.
pub fn parse_config(content: &str, format: DocumentFormat) -> std::result::Result<Config, String> {
    match format {
        DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}

pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating conversation document...");
    for (name, text) in [
        ("welcome", &config.prompts.welcome),
        ("ask_country", &config.prompts.ask_country),
        ("goodbye", &config.prompts.goodbye),
    ] {
        if text.trim().is_empty() {
            return Err(anyhow!(VisaBotError::Config(format!(
                "Required prompt 'prompts.{}' is empty.",
                name
            ))));
        }
    }

    for (name, template) in config.prompts.templates() {
        templating::validate_template(template)
            .with_context(|| format!("Prompt 'prompts.{}' is not a valid template", name))?;
    }

    if config.country_check.countries.is_empty() {
        warn!("The conversation document lists no countries; every country will be unrecognized.");
    }
    for (index, country) in config.country_check.countries.iter().enumerate() {
        if country.name.trim().is_empty() {
            return Err(anyhow!(VisaBotError::Config(format!(
                "Country entry #{} has an empty name.",
                index + 1
            ))));
        }
    }

    for (label, entry) in &config.visa_types {
        if entry.response.as_deref().map_or(true, |r| r.trim().is_empty()) {
            warn!("Visa type '{}' has no response text; it will be omitted from replies.", label);
        }
    }
    info!("Conversation document validation successful.");
    Ok(())
}
