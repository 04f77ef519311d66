//! Field parsers for console answers.
//!
//! Each parser takes the raw answer and either yields a typed value or the
//! [`ValidationError`] the operation aborts with. Handlers run every parser
//! for a record before issuing any statement.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ValidationError, ValidationResult};

/// A non-empty, trimmed value.
pub fn required_text(raw: &str, field: &'static str) -> ValidationResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(value.to_string())
}

/// Blank answers become `None` (stored as NULL).
pub fn optional_text(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// A non-negative price, rounded half away from zero to cents.
pub fn price(raw: &str) -> ValidationResult<Decimal> {
    let price =
        Decimal::from_str(raw.trim()).map_err(|_| ValidationError::Malformed("price format"))?;
    if price < Decimal::ZERO {
        return Err(ValidationError::Negative("Price"));
    }
    Ok(price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// A non-negative whole stock quantity.
pub fn stock_quantity(raw: &str) -> ValidationResult<i32> {
    let quantity = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::Malformed("stock quantity"))?;
    if quantity < 0 {
        return Err(ValidationError::Negative("Stock quantity"));
    }
    Ok(quantity)
}

/// A record identity typed by the user. Existence is checked by the caller.
pub fn record_id(raw: &str, field: &'static str) -> ValidationResult<i32> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::Malformed(field))
}

pub fn email(raw: &str) -> ValidationResult<String> {
    let value = raw.trim();
    if value.is_empty() || !value.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(value.to_string())
}

/// Selection from a numbered list where `0` asks for a typed value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChoice {
    Custom,
    Listed(usize),
}

pub fn list_choice(raw: &str, len: usize) -> ValidationResult<ListChoice> {
    let choice = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ValidationError::Malformed("input"))?;
    match choice {
        0 => Ok(ListChoice::Custom),
        n if n <= len => Ok(ListChoice::Listed(n - 1)),
        _ => Err(ValidationError::OutOfRange),
    }
}
