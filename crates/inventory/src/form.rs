//! Coercion of raw form input into typed draft values.
//!
//! Form fields arrive as text. Numeric fields never fail: missing or invalid
//! input becomes 0.

use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use stockroom_core::{DomainError, DomainResult};

/// Date format used by date inputs (`2024-01-20`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a quantity. Fractions truncate toward zero; anything unparseable is 0.
pub fn coerce_quantity(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i64)
        .unwrap_or(0)
}

/// Parse a money amount. Anything unparseable is 0.
pub fn coerce_amount(raw: &str) -> Decimal {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .unwrap_or(Decimal::ZERO)
}

/// `quantity × unit_price`. Products that do not fit a `Decimal` are rejected.
pub fn extended_value(quantity: i64, unit_price: Decimal) -> DomainResult<Decimal> {
    Decimal::from(quantity)
        .checked_mul(unit_price)
        .ok_or_else(|| DomainError::validation("value is out of range"))
}

/// Empty text means "not provided".
pub fn optional_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Parse a date input, falling back when it is empty or malformed.
pub fn date_or(raw: &str, fallback: NaiveDate) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).unwrap_or(fallback)
}

/// Split a free-text list of serial numbers (commas, whitespace or newlines).
pub fn split_serials(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
