//! # Money Module
//!
//! Parsing and cent rounding for receipt amounts.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A receipt with items "0.10" and "0.20" and total "0.30" would be      │
//! │  rejected by an == comparison on f64.                                   │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    "0.10" + "0.20" = 0.30 exactly, then rounded to the cent            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::{parse_amount, round_to_cent};
//!
//! let a = parse_amount("0.1").unwrap();
//! let b = parse_amount("0.2").unwrap();
//! assert_eq!(round_to_cent(a + b), parse_amount("0.30").unwrap());
//! ```

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ParseError;

/// Plain decimal literal: optional sign, digits, at most one point.
static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").expect("invalid decimal literal pattern")
});

/// Parses a decimal literal such as `"12.25"`.
///
/// The text is not trimmed. Currency symbols, digit separators (`1_000`,
/// `1,000`) and exponents are rejected, as are values outside the range
/// of [`Decimal`].
pub fn parse_amount(text: &str) -> Result<Decimal, ParseError> {
    if text.is_empty() {
        return Err(ParseError::new(text, "amount cannot be empty"));
    }

    if !DECIMAL_LITERAL.is_match(text) {
        return Err(ParseError::new(text, "not a decimal literal"));
    }

    Decimal::from_str(text).map_err(|e| ParseError::new(text, e.to_string()))
}

/// Rounds an amount to the nearest cent, ties away from zero.
///
/// ## Example
/// ```rust
/// use receipt_core::money::{parse_amount, round_to_cent};
///
/// assert_eq!(round_to_cent(parse_amount("2.345").unwrap()).to_string(), "2.35");
/// assert_eq!(round_to_cent(parse_amount("-2.345").unwrap()).to_string(), "-2.35");
/// ```
pub fn round_to_cent(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums amounts after rounding each one to the cent.
///
/// The sum itself is rounded again so the result is always a cent value.
/// Returns `None` when the sum does not fit in a [`Decimal`].
pub fn sum_to_cent<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let total = amounts
        .into_iter()
        .map(round_to_cent)
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))?;
    Some(round_to_cent(total))
}

// =============================================================================
// Unit Tests
// =============================================================================
