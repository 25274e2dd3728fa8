//! # Points Calculation
//!
//! Six independent rules, summed.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                 Points                                            │
//! │  ───────────────────  ──────────────────────────────────────────────    │
//! │  retailer             1 per letter or digit in the retailer name        │
//! │  round total          25 if total is a multiple of 0.25                 │
//! │                       +50 more if total is a whole dollar amount        │
//! │  item pairs           5 per pair of items                               │
//! │  description length   ceil(price × 0.2) per item whose trimmed          │
//! │                       description length is a multiple of 3            │
//! │  odd day              6 if the purchase day is odd                      │
//! │  afternoon            10 if 14:00 < time < 16:00                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The input must be a canonical, validated submission. A rule that cannot
//! parse its input scores zero instead of failing the whole calculation.
//!
//! ## Example
//! ```rust
//! use receipt_core::points::calculate;
//! use receipt_core::{Item, ReceiptSubmission};
//!
//! let receipt = ReceiptSubmission {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![Item::new("Gatorade", "2.25"); 4],
//!     total: "9.00".to_string(),
//! };
//! assert_eq!(calculate(&receipt), 109);
//! ```

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::money::parse_amount;
use crate::time::is_time_in_range;
use crate::types::{Item, ReceiptSubmission};
use crate::{AFTERNOON_WINDOW_END, AFTERNOON_WINDOW_START};

const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const DESCRIPTION_PRICE_FACTOR: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

const ROUND_QUARTER_POINTS: u64 = 25;
const ROUND_DOLLAR_POINTS: u64 = 50;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Points awarded by each rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rules, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.round_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(self.retailer, u64::saturating_add)
    }
}

/// Scores a canonical receipt.
pub fn calculate(receipt: &ReceiptSubmission) -> u64 {
    breakdown(receipt).total()
}

/// Scores a canonical receipt rule by rule.
pub fn breakdown(receipt: &ReceiptSubmission) -> PointsBreakdown {
    let points = PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: round_total_points(&receipt.total),
        item_pairs: item_pair_points(&receipt.items),
        descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    };

    debug!(
        retailer = %receipt.retailer,
        ?points,
        total = points.total(),
        "Scored receipt"
    );
    points
}

// =============================================================================
// Rules
// =============================================================================

/// 1 point per alphanumeric character; punctuation and whitespace score nothing.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// 25 for a multiple of 0.25, plus 50 when there are no cents at all.
pub fn round_total_points(total: &str) -> u64 {
    let total = match parse_amount(total) {
        Ok(total) => total,
        Err(e) => {
            warn!(error = %e, "Total not scorable");
            return 0;
        }
    };

    if !(total % QUARTER).is_zero() {
        return 0;
    }

    if total.fract().is_zero() {
        ROUND_QUARTER_POINTS + ROUND_DOLLAR_POINTS
    } else {
        ROUND_QUARTER_POINTS
    }
}

pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * ITEM_PAIR_POINTS
}

/// `ceil(price × 0.2)` when the trimmed description length is a multiple of 3.
///
/// Length is counted in characters.
pub fn description_points(item: &Item) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length % 3 != 0 {
        return 0;
    }

    let price = match parse_amount(&item.price) {
        Ok(price) => price,
        Err(e) => {
            warn!(error = %e, "Item price not scorable");
            return 0;
        }
    };

    price
        .checked_mul(DESCRIPTION_PRICE_FACTOR)
        .and_then(|points| points.ceil().to_u64())
        .unwrap_or(0)
}

/// 6 points when the day of month is odd. Expects `YYYY-MM-DD`.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Ok(_) => 0,
        Err(e) => {
            warn!(purchase_date, error = %e, "Purchase date not scorable");
            0
        }
    }
}

/// 10 points strictly between 14:00 and 16:00. Expects `HH:MM`.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    match is_time_in_range(purchase_time, AFTERNOON_WINDOW_START, AFTERNOON_WINDOW_END) {
        Ok(true) => AFTERNOON_POINTS,
        Ok(false) => 0,
        Err(e) => {
            warn!(error = %e, "Purchase time not scorable");
            0
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
