//! # VisaBot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The subcommands of the `visabot` binary. Each one loads the conversation
//! document, builds the `Catalog` and drives `Session` (or reads the catalog
//! directly) through a different front end:
//!
//! - `chat`: interactive REPL on stdin/stdout with slash commands
//! - `ask`: one-shot, scriptable; replies to the utterances given as arguments
//! - `countries`: lists configured countries by visa requirement
//!
//! Each module defines its `clap` arguments struct and a `handle_*` function.
//!
use crate::core::catalog::Catalog;
use crate::core::config;
use crate::core::error::Result;
use std::path::Path;
use tracing::debug;

/// The `visabot ask` command.
pub mod ask;
/// The `visabot chat` REPL.
pub mod chat;
/// The `visabot countries` listing.
pub mod countries;

/// Loads the conversation document and builds the catalog every command works against.
pub fn load_catalog(config_path: Option<&Path>) -> Result<Catalog> {
    let config = config::load_config(config_path)?;
    let catalog = Catalog::from_config(&config)?;
    debug!(
        "Catalog ready: {} countries, {} visa types, options [{}]",
        catalog.countries().len(),
        catalog.visa_types().len(),
        catalog.options_text()
    );
    Ok(catalog)
}
