//! # VisaBot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `visabot ask`, a non-interactive front end. A fresh session
//! receives each utterance in order and one reply is printed per utterance.
//! Useful for scripts and for checking a conversation document.
//!
//! ```bash
//! visabot ask "Iran" "tourist"
//! visabot ask --show-state "Ghana" "yes"
//! visabot ask --json "hello" "Iran"
//! ```
//!
//! Plain output separates replies with a blank line. `--show-state` prefixes
//! each reply with the state reached, e.g. `[ASK_VISA_TYPE]`. `--json` prints
//! one object per line with `input`, `reply` (Markdown as composed) and `state`.
//!
use super::load_catalog;
use crate::common::ui::reply;
use crate::core::catalog::Catalog;
use crate::core::dialogue::{DialogueState, Session};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Utterances submitted to the session in order.
    #[arg(required = true)]
    pub utterances: Vec<String>,
    /// Print JSON lines instead of plain text.
    #[arg(long)]
    pub json: bool,
    /// Prefix each reply with the resulting state.
    #[arg(long)]
    pub show_state: bool,
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct AskRecord<'a> {
    input: &'a str,
    reply: &'a str,
    state: DialogueState,
}

pub fn handle_ask(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling ask command with {} utterance(s)...", args.utterances.len());
    let catalog = load_catalog(config_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_ask(&catalog, &args, &mut out)?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Plays `args.utterances` against a new session, writing replies to `out`.
pub fn run_ask<W: Write>(catalog: &Catalog, args: &AskArgs, out: &mut W) -> Result<()> {
    let mut session = Session::new();
    for (index, utterance) in args.utterances.iter().enumerate() {
        let answer = session.respond(catalog, utterance);
        if args.json {
            let record = AskRecord {
                input: utterance,
                reply: &answer,
                state: session.state(),
            };
            let line = serde_json::to_string(&record).context("Failed to serialize reply")?;
            writeln!(out, "{}", line)?;
            continue;
        }
        if index > 0 {
            writeln!(out)?;
        }
        if args.show_state {
            writeln!(out, "[{}] {}", session.state(), reply::to_terminal(&answer))?;
        } else {
            writeln!(out, "{}", reply::to_terminal(&answer))?;
        }
    }
    Ok(())
}
