//! # VisaBot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point of the `visabot` CLI, a scripted dialogue that tells a
//! traveller whether their country needs a Nigerian entry visa and, if so,
//! which requirements apply to the chosen visa type. This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `core`: configuration, errors, templating, the lookup catalog and the dialogue state machine
//! - `common`: text matching, filesystem helpers and terminal presentation
//! - `commands`: the `chat`, `ask` and `countries` front ends
//!
//! All errors are propagated to this level for consistent handling.
//!
//! ## Examples
//!
//! ```bash
//! # Interactive chat using ./conversation.toml (or an ancestor's)
//! visabot chat
//!
//! # One-shot questions with an explicit document and debug logging
//! visabot -vv --config data/conversation.json ask "Iran" "tourist"
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // chat, ask, countries
mod common; // Shared utilities (fs, text, ui)
mod core; // Core infrastructure (errors, config, templating, catalog, dialogue)

#[derive(Parser, Debug)]
#[command(
    name = "visabot",
    about = "🇳🇬 VisaBot: Do you need a visa to visit Nigeria?",
    long_about = "A scripted dialogue that checks whether travellers from a given country need a\n\
                  Nigerian entry visa and shows the requirements for each visa type.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Conversation document (TOML or JSON). Searched for when omitted.
    #[arg(long, global = true, env = "VISABOT_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Chat interactively on the terminal.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Reply to the given utterances and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List configured countries by visa requirement.
    Countries(commands::countries::CountriesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config_path = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args, config_path),
        Commands::Ask(args) => commands::ask::handle_ask(args, config_path),
        Commands::Countries(args) => commands::countries::handle_countries(args, config_path),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
