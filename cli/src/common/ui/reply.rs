//! # Reply Rendering
//!
//! File: cli/src/common/ui/reply.rs
//! Author: Christi Mahu
//!
//! Replies carry a small amount of Markdown (`**bold**` headers and `### `
//! section titles) so they read well when exported. On a terminal the markers
//! are dropped and section titles become `Title:` lines.
//!

/// Converts a reply to plain terminal text.
pub fn to_terminal(reply: &str) -> String {
    reply
        .lines()
        .map(|line| match line.strip_prefix("### ") {
            Some(title) => format!("{}:", title.trim_end()),
            None => line.replace("**", ""),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
