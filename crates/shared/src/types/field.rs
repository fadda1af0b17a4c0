//! Lenient parsing for user-entered form fields.
//!
//! Invoice entry forms feed every keystroke through these parsers, so they
//! never fail: malformed input collapses to a safe default instead of
//! surfacing an error mid-typing. Each default policy is defined exactly
//! once here.

use rust_decimal::Decimal;

/// Parses a monetary or percentage field, defaulting to zero.
///
/// Empty or malformed input yields `0`.
#[must_use]
pub fn parse_amount(input: &str) -> Decimal {
    input.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Parses a quantity field, defaulting to one.
///
/// Empty, malformed, or zero input yields `1`; zero is treated the same as
/// missing input, matching the entry form's fallback chain.
#[must_use]
pub fn parse_quantity(input: &str) -> Decimal {
    match input.trim().parse::<Decimal>() {
        Ok(qty) if !qty.is_zero() => qty,
        _ => Decimal::ONE,
    }
}

/// Parses an integer count field (payment terms in days), defaulting to zero.
#[must_use]
pub fn parse_count(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}

/// Parses an entity identifier field, defaulting to zero.
///
/// Zero is the "unselected" sentinel the upstream API expects when no
/// catalog entity was chosen.
#[must_use]
pub fn parse_identifier(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}
