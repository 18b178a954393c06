//! # Table Rendering
//!
//! File: cli/src/common/ui/tables.rs
//! Author: Christi Mahu
//!
//! Two-column tables in the same plain layout the rest of the CLI uses:
//!
//! ```text
//! Country    | Visa
//! -----------+-----------
//! Ghana      | not required
//! Iran       | required
//! ```
//!
use crate::core::dialogue::analytics::Analytics;

/// Number of countries listed by `render_stats`.
pub const TOP_COUNTRIES: usize = 10;

/// Renders rows under a two-column header. The first column is padded to
/// the longest entry, between 10 and 30 characters.
pub fn render_table(headers: (&str, &str), rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(first, _)| first.chars().count())
        .chain(std::iter::once(headers.0.chars().count()))
        .max()
        .unwrap_or(10)
        .clamp(10, 30);
    let second_width = rows
        .iter()
        .map(|(_, second)| second.chars().count())
        .chain(std::iter::once(headers.1.chars().count()))
        .max()
        .unwrap_or(10)
        .max(10);

    let mut out = format!("{:<width$} | {}\n", headers.0, headers.1, width = width);
    out.push_str(&format!("{:-<width$}-+-{:-<second$}\n", "", "", width = width, second = second_width));
    for (first, second) in rows {
        out.push_str(&format!("{:<width$} | {}\n", first, second, width = width));
    }
    out
}

/// Session statistics: totals and the most asked countries.
pub fn render_stats(analytics: &Analytics) -> String {
    let mut out = format!(
        "Countries asked: {}\nVisa-free answers: {}\nVisa-required answers: {}\n",
        analytics.total_asked(),
        analytics.visa_free,
        analytics.visa_required
    );

    let top = analytics.top_countries(TOP_COUNTRIES);
    if top.is_empty() {
        out.push_str("No countries asked yet.\n");
        return out;
    }
    let rows: Vec<(String, String)> = top
        .into_iter()
        .map(|entry| (entry.country, entry.count.to_string()))
        .collect();
    out.push('\n');
    out.push_str(&render_table(("Country", "Times asked"), &rows));
    out
}
