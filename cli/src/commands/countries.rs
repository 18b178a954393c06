//! # VisaBot Countries Command
//!
//! File: cli/src/commands/countries.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `visabot countries`, which lists the countries of the
//! conversation document with their visa requirement. Visa-free countries
//! come first, each group sorted alphabetically by display name.
//!
//! ```bash
//! visabot countries
//! visabot countries --visa-required
//! ```
//!
//! Example output:
//!
//! ```text
//! Country    | Visa
//! -----------+-------------
//! Benin      | not required
//! Ghana      | not required
//! Iran       | required
//!
//! 2 visa-free, 1 visa-required.
//! ```
//!
//! The same table is printed by `/countries` inside `visabot chat`.
//!
use super::load_catalog;
use crate::common::ui::tables;
use crate::core::catalog::Catalog;
use crate::core::error::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

/// # Countries Arguments (`CountriesArgs`)
///
/// Without a flag both groups are listed.
#[derive(Parser, Debug)]
pub struct CountriesArgs {
    /// Only list countries whose citizens need no visa.
    #[arg(long, conflicts_with = "visa_required")]
    pub visa_free: bool,
    /// Only list countries whose citizens need a visa.
    #[arg(long)]
    pub visa_required: bool,
}

/// Which countries to include in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryFilter {
    All,
    VisaFree,
    VisaRequired,
}

impl From<&CountriesArgs> for CountryFilter {
    fn from(args: &CountriesArgs) -> Self {
        match (args.visa_free, args.visa_required) {
            (true, _) => CountryFilter::VisaFree,
            (_, true) => CountryFilter::VisaRequired,
            _ => CountryFilter::All,
        }
    }
}

pub fn handle_countries(args: CountriesArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling countries command...");
    let catalog = load_catalog(config_path)?;
    print!("{}", render_countries(&catalog, CountryFilter::from(&args)));
    Ok(())
}

/// Renders the country table with a one-line summary.
pub fn render_countries(catalog: &Catalog, filter: CountryFilter) -> String {
    let free = match filter {
        CountryFilter::VisaRequired => Vec::new(),
        _ => catalog.countries_by_requirement(false),
    };
    let required = match filter {
        CountryFilter::VisaFree => Vec::new(),
        _ => catalog.countries_by_requirement(true),
    };

    if free.is_empty() && required.is_empty() {
        return "No countries configured for this listing.\n".to_string();
    }

    let rows: Vec<(String, String)> = free
        .iter()
        .map(|country| (country.display.clone(), "not required".to_string()))
        .chain(
            required
                .iter()
                .map(|country| (country.display.clone(), "required".to_string())),
        )
        .collect();

    let mut out = tables::render_table(("Country", "Visa"), &rows);
    out.push_str(&format!(
        "\n{} visa-free, {} visa-required.\n",
        free.len(),
        required.len()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{parse_config, DocumentFormat};

    fn catalog() -> Catalog {
        let config = parse_config(
            r#"
            [prompts]
            welcome = "Hello!"
            ask_country = "Which country?"
            goodbye = "Goodbye!"

            [country_check]
            countries = [
                { name = "Iran", visa_required = true },
                { name = "Ghana", visa_required = false },
                { name = "Benin", visa_required = false },
            ]
            "#,
            DocumentFormat::Toml,
        )
        .expect("fixture parses");
        Catalog::from_config(&config).expect("catalog builds")
    }

    #[test]
    fn test_countries_args_parsing() {
        let args = CountriesArgs::try_parse_from(["countries", "--visa-free"]).unwrap();
        assert_eq!(CountryFilter::from(&args), CountryFilter::VisaFree);

        let args = CountriesArgs::try_parse_from(["countries"]).unwrap();
        assert_eq!(CountryFilter::from(&args), CountryFilter::All);
    }

    #[test]
    fn test_countries_flags_conflict() {
        let result = CountriesArgs::try_parse_from(["countries", "--visa-free", "--visa-required"]);
        assert!(result.is_err(), "Both filters at once should be rejected");
    }

    #[test]
    fn test_render_all_groups_sorted() {
        let out = render_countries(&catalog(), CountryFilter::All);
        let benin = out.find("Benin").unwrap();
        let ghana = out.find("Ghana").unwrap();
        let iran = out.find("Iran").unwrap();
        assert!(benin < ghana && ghana < iran);
        assert!(out.contains("2 visa-free, 1 visa-required."));
    }

    #[test]
    fn test_render_visa_required_only() {
        let out = render_countries(&catalog(), CountryFilter::VisaRequired);
        assert!(out.contains("Iran"));
        assert!(!out.contains("Ghana"));
        assert!(out.contains("0 visa-free, 1 visa-required."));
    }
}
