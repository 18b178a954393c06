//! # VisaBot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used by the VisaBot application. Errors
//! only arise at the edges of the program: loading the conversation document,
//! rendering templates while validating it, and writing transcripts or saved
//! answers to disk. The per-utterance dialogue step never fails; unknown input
//! is answered with a fallback prompt instead.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `VisaBotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if prompts.welcome.trim().is_empty() {
//!     anyhow::bail!(VisaBotError::Config("prompts.welcome must not be empty".into()));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read conversation document: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the VisaBot application.
#[derive(Error, Debug)]
pub enum VisaBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No conversation document found. Searched: {searched}")]
    ConfigNotFound { searched: String },

    #[error("Failed to parse conversation document '{path}': {message}")]
    ConfigParse { path: String, message: String },

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Terminal I/O error: {0}")]
    Io(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = VisaBotError::Config("prompts.welcome must not be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: prompts.welcome must not be empty"
        );

        let not_found = VisaBotError::ConfigNotFound {
            searched: "./conversation.toml".into(),
        };
        assert_eq!(
            not_found.to_string(),
            "No conversation document found. Searched: ./conversation.toml"
        );

        let parse_err = VisaBotError::ConfigParse {
            path: "conversation.json".into(),
            message: "missing field `prompts`".into(),
        };
        assert!(parse_err.to_string().contains("conversation.json"));
        assert!(parse_err.to_string().contains("missing field `prompts`"));
    }
}
