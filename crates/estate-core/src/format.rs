//! Price and date formatting.
//!
//! Prices are stored as plain numbers and only become currency strings at
//! render time. All formatters round to whole currency units.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Format a price in Colombian pesos: `$ 150.000.000`.
pub fn format_price(price: f64) -> String {
    format_currency(price, "$ ", '.')
}

/// Format a price in US dollars: `$150,000,000`.
pub fn format_price_usd(price: f64) -> String {
    format_currency(price, "$", ',')
}

/// Format a price for a spinner input: `$ 1,000,000`.
pub fn format_price_input(price: f64) -> String {
    format_currency(price, "$ ", ',')
}

/// Format an ISO date or datetime as `Jan 15, 2024`.
///
/// Text that is not a recognizable date is returned unchanged.
pub fn format_date(value: &str) -> String {
    const OUTPUT: &str = "%b %-d, %Y";
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format(OUTPUT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return dt.format(OUTPUT).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format(OUTPUT).to_string();
    }
    value.to_string()
}

/// Errors from parsing price text typed into a spinner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PriceInputError {
    /// The text contains something other than digits, `$`, separators, and a decimal point.
    #[error("'{0}' is not a valid price")]
    Invalid(String),

    /// The number is infinite or not a number.
    #[error("price must be a finite number")]
    NotFinite,

    /// The number is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// Parse spinner text into a price.
///
/// Strips a leading `$`, whitespace, and `,` thousands separators. Empty text
/// means "no bound" and yields `Ok(None)`.
pub fn parse_price_input(text: &str) -> Result<Option<f64>, PriceInputError> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Ok(None);
    }
    if !cleaned
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-')
    {
        return Err(PriceInputError::Invalid(text.to_string()));
    }

    let value: f64 = cleaned
        .parse()
        .map_err(|_| PriceInputError::Invalid(text.to_string()))?;
    if !value.is_finite() {
        return Err(PriceInputError::NotFinite);
    }
    if value < 0.0 {
        return Err(PriceInputError::Negative);
    }
    Ok(Some(value))
}

fn format_currency(price: f64, symbol: &str, separator: char) -> String {
    if !price.is_finite() {
        return format!("{symbol}0");
    }
    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let units = rounded.abs() as u64;
    format!("{sign}{symbol}{}", group_digits(units, separator))
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
