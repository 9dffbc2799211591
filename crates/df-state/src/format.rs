use std::fmt::Write;

use chrono::{DateTime, Utc};
use df_core::config::DisplayConfig;

/// Currency and date formatting for cards and detail panels.
#[derive(Debug, Clone)]
pub struct Formatter {
    currency_symbol: String,
    thousands_separator: String,
    decimal_separator: String,
    date_format: String,
}

impl Formatter {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            thousands_separator: config.thousands_separator.clone(),
            decimal_separator: config.decimal_separator.clone(),
            date_format: config.date_format.clone(),
        }
    }

    /// `1234.5` -> `R$ 1.234,50` with the default display config.
    pub fn format_currency(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round() as u64;
        let units = cents / 100;
        let fraction = cents % 100;
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!(
            "{sign}{} {}{}{fraction:02}",
            self.currency_symbol,
            self.group_thousands(units),
            self.decimal_separator
        )
    }

    /// Falls back to ISO `%Y-%m-%d` if the configured pattern cannot render.
    pub fn format_date(&self, date: DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }

    pub fn format_optional_currency(&self, amount: Option<f64>) -> String {
        amount.map_or_else(|| "-".to_string(), |a| self.format_currency(a))
    }

    fn group_thousands(&self, units: u64) -> String {
        let digits = units.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}
