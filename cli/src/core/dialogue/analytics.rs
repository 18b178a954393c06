//! # Session Analytics
//!
//! File: cli/src/core/dialogue/analytics.rs
//! Author: Christi Mahu
//!
//! Counters kept per session: how often each country was asked about, and how
//! many answers were visa-free or visa-required. Purely observational; the
//! dialogue never reads them back.
//!

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCount {
    pub country: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analytics {
    /// Countries in the order they were first asked about.
    asked: Vec<CountryCount>,
    pub visa_free: u32,
    pub visa_required: u32,
}

impl Analytics {
    pub fn record_country(&mut self, country: &str, visa_required: bool) {
        match self.asked.iter_mut().find(|entry| entry.country == country) {
            Some(entry) => entry.count += 1,
            None => self.asked.push(CountryCount {
                country: country.to_string(),
                count: 1,
            }),
        }
        if visa_required {
            self.visa_required += 1;
        } else {
            self.visa_free += 1;
        }
    }

    pub fn total_asked(&self) -> u32 {
        self.asked.iter().map(|entry| entry.count).sum()
    }

    /// The `n` most asked countries; ties keep first-asked order.
    pub fn top_countries(&self, n: usize) -> Vec<CountryCount> {
        let mut ranked = self.asked.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
