//! # VisaBot Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers shared by the configuration loader and the chat
//! exports (last answer and transcript). Everything lives in `io`; callers
//! import it as `crate::common::fs::io`.
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let path = io::expand_path(Path::new("~/visabot/answer.md"));
//! io::write_string_to_file(&path, "**For Iran, here are the requirements:**")?;
//! # Ok(())
//! # }
//! ```
//!

/// Reading, writing and path expansion (`read_file_to_string`, `write_string_to_file`, `expand_path`).
pub mod io;
