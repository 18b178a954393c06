//! # VisaBot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core components of VisaBot: the conversation
//! document, the normalized lookup tables built from it, prompt templating,
//! and the dialogue state machine that turns one utterance into one reply.
//!
//! ## Architecture
//!
//! - `config`: Loading, parsing and validating the conversation document
//! - `error`: Error types and the crate-wide `Result` alias
//! - `templating`: Rendering prompt templates with the active country and options
//! - `catalog`: Ordered, pre-normalized country and visa-type key sets
//! - `dialogue`: States, session data, the pure transition function and analytics
//!
//! The configuration is loaded once at startup, turned into a `Catalog`, and
//! then passed by reference into every dialogue step. Nothing here is global.
//!
//! ```rust
//! use crate::core::{catalog::Catalog, config, dialogue::Session};
//!
//! let cfg = config::load_config(None)?;
//! let catalog = Catalog::from_config(&cfg)?;
//! let mut session = Session::new();
//! let reply = session.respond(&catalog, "Ghana");
//! ```
//!
pub mod catalog;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod templating;
