//! # Date Normalization
//!
//! Turns a purchase date written in any accepted shape into `YYYY-MM-DD`.
//!
//! ## Accepted Shapes (tried in order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Shape            Example          Canonical                         │
//! │  ─  ───────────────  ───────────────  ──────────                        │
//! │  1  YYYY-MM-DD       2024-02-07       2024-02-07                        │
//! │  2  MM/DD/YYYY       02/07/2024       2024-02-07                        │
//! │  3  DD/MM/YYYY       13/02/2024       2024-02-13                        │
//! │  4  YYYY/MM/DD       2024/02/07       2024-02-07                        │
//! │  5  Mon D, YYYY      Feb 7, 2024      2024-02-07                        │
//! │  6  D Mon YYYY       7 Feb 2024       2024-02-07                        │
//! │                                                                         │
//! │  The FIRST shape that structurally matches commits. If the date it      │
//! │  yields is not a real calendar date, normalization fails instead of     │
//! │  trying the remaining shapes. A US date is never silently re-read as    │
//! │  a UK date.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::date::normalize_date;
//!
//! assert_eq!(normalize_date("Feb 7, 2024").unwrap(), "2024-02-07");
//! assert!(normalize_date("2023-02-29").is_err());
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::ParseError;
use crate::{MAX_PURCHASE_YEAR, MIN_PURCHASE_YEAR};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// =============================================================================
// Layouts
// =============================================================================

/// Where year, month and day sit in the capture groups.
#[derive(Debug, Clone, Copy)]
enum FieldOrder {
    YearMonthDay,
    MonthDayYear,
    DayMonthYear,
    MonthNameDayYear,
    DayMonthNameYear,
}

struct DateLayout {
    description: &'static str,
    pattern: Regex,
    order: FieldOrder,
}

impl DateLayout {
    fn new(description: &'static str, pattern: &str, order: FieldOrder) -> Self {
        DateLayout {
            description,
            // Patterns are literals below; a bad one is a programming error.
            pattern: Regex::new(pattern).expect("invalid date layout pattern"),
            order,
        }
    }

    /// Pulls `(year, month, day)` out of a structural match.
    fn components(&self, input: &str, caps: &Captures<'_>) -> Result<(i32, u32, u32), ParseError> {
        let number = |idx: usize| -> Result<u32, ParseError> {
            caps[idx]
                .parse::<u32>()
                .map_err(|_| ParseError::new(input, format!("'{}' is not a number", &caps[idx])))
        };
        let month_name = |idx: usize| -> Result<u32, ParseError> {
            month_from_name(&caps[idx])
                .ok_or_else(|| ParseError::new(input, format!("unknown month '{}'", &caps[idx])))
        };

        let (year, month, day) = match self.order {
            FieldOrder::YearMonthDay => (number(1)?, number(2)?, number(3)?),
            FieldOrder::MonthDayYear => (number(3)?, number(1)?, number(2)?),
            FieldOrder::DayMonthYear => (number(3)?, number(2)?, number(1)?),
            FieldOrder::MonthNameDayYear => (number(3)?, month_name(1)?, number(2)?),
            FieldOrder::DayMonthNameYear => (number(3)?, month_name(2)?, number(1)?),
        };

        let year = i32::try_from(year)
            .map_err(|_| ParseError::new(input, format!("year {} out of range", year)))?;
        Ok((year, month, day))
    }
}

static DATE_LAYOUTS: Lazy<Vec<DateLayout>> = Lazy::new(|| {
    let months = MONTH_NAMES.join("|");
    vec![
        DateLayout::new(
            "YYYY-MM-DD",
            r"^(\d{4})-(\d{2})-(\d{2})$",
            FieldOrder::YearMonthDay,
        ),
        DateLayout::new(
            "MM/DD/YYYY",
            r"^(0[1-9]|1[0-2])/(0[1-9]|[12]\d|3[01])/(\d{4})$",
            FieldOrder::MonthDayYear,
        ),
        DateLayout::new(
            "DD/MM/YYYY",
            r"^(0[1-9]|[12]\d|3[01])/(0[1-9]|1[0-2])/(\d{4})$",
            FieldOrder::DayMonthYear,
        ),
        DateLayout::new(
            "YYYY/MM/DD",
            r"^(\d{4})/(0[1-9]|1[0-2])/(0[1-9]|[12]\d|3[01])$",
            FieldOrder::YearMonthDay,
        ),
        DateLayout::new(
            "Mon D, YYYY",
            &format!(r"^({})\s+(\d{{1,2}}),\s+(\d{{4}})$", months),
            FieldOrder::MonthNameDayYear,
        ),
        DateLayout::new(
            "D Mon YYYY",
            &format!(r"^(\d{{1,2}})\s+({})\s+(\d{{4}})$", months),
            FieldOrder::DayMonthNameYear,
        ),
    ]
});

fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|idx| idx as u32 + 1)
}

// =============================================================================
// Calendar Rules
// =============================================================================

/// Gregorian leap year: divisible by 4, and centuries only when divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn check_calendar(input: &str, year: i32, month: u32, day: u32) -> Result<(), ParseError> {
    if !(MIN_PURCHASE_YEAR..=MAX_PURCHASE_YEAR).contains(&year) {
        return Err(ParseError::new(
            input,
            format!(
                "year {} must be between {} and {}",
                year, MIN_PURCHASE_YEAR, MAX_PURCHASE_YEAR
            ),
        ));
    }

    if !(1..=12).contains(&month) {
        return Err(ParseError::new(
            input,
            format!("month {} must be between 1 and 12", month),
        ));
    }

    let max_day = days_in_month(year, month);
    if day < 1 || day > max_day {
        return Err(ParseError::new(
            input,
            format!("day {} must be between 1 and {} for {:04}-{:02}", day, max_day, year, month),
        ));
    }

    Ok(())
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalizes a purchase date to canonical `YYYY-MM-DD`.
///
/// ## Errors
/// - empty (or whitespace-only) input
/// - no accepted shape matches
/// - the committed shape yields a date outside the calendar or the
///   accepted year range
pub fn normalize_date(input: &str) -> Result<String, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new(input, "date cannot be empty"));
    }

    let (layout, caps) = DATE_LAYOUTS
        .iter()
        .find_map(|layout| layout.pattern.captures(trimmed).map(|caps| (layout, caps)))
        .ok_or_else(|| ParseError::new(input, "does not match any accepted date format"))?;

    let (year, month, day) = layout.components(input, &caps)?;
    check_calendar(input, year, month, day).map_err(|e| ParseError {
        reason: format!("{} (read as {})", e.reason, layout.description),
        ..e
    })?;

    Ok(format!("{:04}-{:02}-{:02}", year, month, day))
}

// =============================================================================
// Unit Tests
// =============================================================================
