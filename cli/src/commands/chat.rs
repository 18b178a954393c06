//! # VisaBot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `visabot chat`, the interactive front end. It prints the welcome
//! message and the country question, then answers one line at a time until the
//! user types `exit` or `quit`, or stdin reaches end of file.
//!
//! Lines starting with `/` are handled by the REPL itself and never reach the
//! dialogue:
//!
//! | Command        | Effect                                              |
//! |----------------|-----------------------------------------------------|
//! | `/reset`       | start a new chat (state, country and stats cleared) |
//! | `/stats`       | countries asked and answer counts                   |
//! | `/countries`   | table of configured countries                       |
//! | `/save <PATH>` | write the last requirements answer as Markdown      |
//! | `/state`       | current state and country                           |
//! | `/help`        | list these commands                                 |
//!
//! With `--transcript <PATH>` the whole conversation is written as Markdown
//! when the REPL ends.
//!
use super::countries::{render_countries, CountryFilter};
use super::load_catalog;
use crate::common::fs::io;
use crate::common::ui::{reply, tables, transcript::Speaker, transcript::Transcript};
use crate::core::catalog::Catalog;
use crate::core::dialogue::{replies, Session};
use crate::core::error::{Result, VisaBotError};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const HELP: &str = "\
Commands:
  /reset         start a new chat
  /stats         show countries asked and answer counts
  /countries     list configured countries
  /save <PATH>   save the last requirements answer as Markdown
  /state         show the current state and country
  /help          show this list
Type 'exit' or 'quit' to leave.";

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Write a Markdown transcript of the conversation to this path on exit.
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}

pub fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chat command...");
    let catalog = load_catalog(config_path)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let transcript = run_repl(&catalog, stdin.lock(), &mut stdout.lock())?;
    info!("Chat ended with {} transcript entries.", transcript.entries().len());

    if let Some(path) = args.transcript {
        let path = io::expand_path(&path);
        io::write_string_to_file(&path, &transcript.to_markdown())
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
        println!("Transcript saved to {}", path.display());
    }
    Ok(())
}

/// Runs the REPL until `exit`/`quit` or end of input and returns the transcript.
pub fn run_repl<R: BufRead, W: Write>(catalog: &Catalog, input: R, out: &mut W) -> Result<Transcript> {
    let mut session = Session::new();
    let mut transcript = Transcript::new();

    greet(catalog, out, &mut transcript)?;

    for line in input.lines() {
        let line = line.map_err(|e| anyhow!(VisaBotError::Io(e.to_string())))?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            transcript.record(Speaker::User, text);
            let goodbye = replies::render(catalog, &catalog.prompts().goodbye, session.current_country());
            bot_says(out, &mut transcript, &goodbye)?;
            break;
        }

        if let Some(command) = text.strip_prefix('/') {
            run_slash_command(catalog, &mut session, &mut transcript, command, out)?;
            continue;
        }

        transcript.record(Speaker::User, text);
        let answer = session.respond(catalog, text);
        bot_says(out, &mut transcript, &answer)?;
    }

    out.flush()?;
    Ok(transcript)
}

fn greet<W: Write>(catalog: &Catalog, out: &mut W, transcript: &mut Transcript) -> Result<()> {
    let prompts = catalog.prompts();
    bot_says(out, transcript, &replies::render(catalog, &prompts.welcome, None))?;
    bot_says(out, transcript, &replies::render(catalog, &prompts.ask_country, None))
}

fn bot_says<W: Write>(out: &mut W, transcript: &mut Transcript, text: &str) -> Result<()> {
    transcript.record(Speaker::Bot, text);
    writeln!(out, "{}\n", reply::to_terminal(text))?;
    Ok(())
}

fn run_slash_command<W: Write>(
    catalog: &Catalog,
    session: &mut Session,
    transcript: &mut Transcript,
    command: &str,
    out: &mut W,
) -> Result<()> {
    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "reset" => {
            session.reset();
            writeln!(out, "New chat started.\n")?;
            greet(catalog, out, transcript)?;
        }
        "stats" => writeln!(out, "{}", tables::render_stats(session.analytics()))?,
        "countries" => writeln!(out, "{}", render_countries(catalog, CountryFilter::All))?,
        "save" => save_last_answer(session, argument, out)?,
        "state" => writeln!(
            out,
            "State: {} (country: {})\n",
            session.state(),
            session.current_country().unwrap_or("none")
        )?,
        "help" => writeln!(out, "{}\n", HELP)?,
        other => writeln!(out, "Unknown command '/{}'. Type /help for the list.\n", other)?,
    }
    Ok(())
}

/// `/save <PATH>`. Failures are reported in the chat and do not end it.
fn save_last_answer<W: Write>(session: &Session, argument: &str, out: &mut W) -> Result<()> {
    if argument.is_empty() {
        writeln!(out, "Usage: /save <PATH>\n")?;
        return Ok(());
    }
    let Some(answer) = session.last_answer() else {
        writeln!(out, "No requirements answer to save yet.\n")?;
        return Ok(());
    };

    let path = io::expand_path(Path::new(argument));
    match io::write_string_to_file(&path, &format!("{}\n", answer)) {
        Ok(()) => writeln!(out, "Saved the last answer to {}\n", path.display())?,
        Err(e) => {
            warn!("Saving the last answer failed: {:?}", e);
            writeln!(out, "Could not save to {}: {}\n", path.display(), e)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{parse_config, DocumentFormat};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn catalog() -> Catalog {
        let config = parse_config(
            r#"
            [prompts]
            welcome = "Welcome to the Nigeria visa helper."
            ask_country = "Which country are you from?"
            goodbye = "Goodbye!"

            [country_check]
            countries = [
                { name = "Ghana", visa_required = false },
                { name = "Iran", visa_required = true },
            ]

            [visa_types.general]
            response = "Valid passport."
            [visa_types.tourist]
            response = "Hotel booking."
            "#,
            DocumentFormat::Toml,
        )
        .expect("fixture parses");
        Catalog::from_config(&config).expect("catalog builds")
    }

    fn chat(lines: &str) -> (String, Transcript) {
        let mut out = Vec::new();
        let transcript = run_repl(&catalog(), Cursor::new(lines.to_string()), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), transcript)
    }

    #[test]
    fn test_chat_args_parsing() {
        let args = ChatArgs::try_parse_from(["chat", "--transcript", "out.md"]).unwrap();
        assert_eq!(args.transcript, Some(PathBuf::from("out.md")));
        assert!(ChatArgs::try_parse_from(["chat"]).unwrap().transcript.is_none());
    }

    #[test]
    fn test_greets_and_answers_until_exit() {
        let (out, transcript) = chat("Iran\ntourist\nexit\nGhana\n");
        assert!(out.starts_with("Welcome to the Nigeria visa helper.\n\nWhich country are you from?"));
        assert!(out.contains("For Iran, here are the requirements:"));
        assert!(out.trim_end().ends_with("Goodbye!"));
        assert!(!out.contains("For Ghana"));
        // welcome, ask_country, then three exchanges
        assert_eq!(transcript.entries().len(), 8);
    }

    #[test]
    fn test_end_of_input_ends_chat() {
        let (out, _) = chat("hello\n");
        assert_eq!(out.matches("Which country are you from?").count(), 2);
    }

    #[test]
    fn test_slash_commands_stay_out_of_dialogue() {
        let (out, transcript) = chat("Ghana\n/stats\n/state\n/bogus\n");
        assert!(out.contains("Countries asked: 1"));
        assert!(out.contains("State: END (country: Ghana)"));
        assert!(out.contains("Unknown command '/bogus'"));
        assert_eq!(transcript.entries().len(), 4);
    }

    #[test]
    fn test_reset_starts_over() {
        let (out, _) = chat("Iran\n/reset\n/state\n");
        assert!(out.contains("New chat started."));
        assert!(out.contains("State: ASK_COUNTRY (country: none)"));
    }

    #[test]
    fn test_save_last_answer() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("answers/iran.md");

        let (out, _) = chat(&format!("/save {}\nIran\ntourist\n/save {}\n", target.display(), target.display()));
        assert!(out.contains("No requirements answer to save yet."));
        assert!(out.contains("Saved the last answer to"));

        let saved = std::fs::read_to_string(&target).unwrap();
        assert!(saved.starts_with("**For Iran, here are the requirements:**"));
        assert!(saved.contains("### Tourist visa\nHotel booking."));
    }

    #[test]
    fn test_countries_listing() {
        let (out, _) = chat("/countries\n");
        assert!(out.contains("Ghana"));
        assert!(out.contains("1 visa-free, 1 visa-required."));
    }
}
