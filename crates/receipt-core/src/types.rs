//! # Domain Types
//!
//! The receipt shapes that flow through the engine.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt Lifecycle                               │
//! │                                                                         │
//! │  ReceiptSubmission (untrusted, as sent by the client)                  │
//! │       │                                                                 │
//! │       ▼  validate_receipt()         ── reject: nothing is stored        │
//! │       │                                                                 │
//! │       ▼  into_canonical()           ── new value: clean descriptions,   │
//! │       │                                canonical date and time          │
//! │       ▼  Receipt::issue(id)         ── id + points assigned once        │
//! │       │                                                                 │
//! │       ▼  ReceiptStore::insert()     ── immutable from here on           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Shape
//! Field names are camelCase (`purchaseDate`, `shortDescription`, ...).
//! Unknown fields are rejected, so a client cannot smuggle in its own
//! `id` or `points`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::date::normalize_date;
use crate::error::ParseError;
use crate::points;
use crate::time::normalize_time;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

// =============================================================================
// Item
// =============================================================================

/// One purchased line on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Item {
    pub short_description: String,

    /// Decimal literal, e.g. `"6.49"`. Kept as text so it is echoed back
    /// exactly as submitted.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }

    /// Returns a copy with the description trimmed and every whitespace
    /// run collapsed to a single space.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::Item;
    ///
    /// let item = Item::new("   Klarbrunn  12-PK\t12 FL OZ  ", "12.00");
    /// assert_eq!(item.cleaned().short_description, "Klarbrunn 12-PK 12 FL OZ");
    /// ```
    pub fn cleaned(&self) -> Item {
        Item {
            short_description: clean_description(&self.short_description),
            price: self.price.clone(),
        }
    }
}

/// Trims and collapses whitespace runs into single spaces.
pub fn clean_description(description: &str) -> String {
    WHITESPACE_RUN
        .replace_all(description.trim(), " ")
        .into_owned()
}

// =============================================================================
// Receipt Submission
// =============================================================================

/// A receipt as submitted by a client, before validation.
///
/// Missing fields deserialize to empty values so they are reported by
/// validation ("retailer cannot be empty") rather than by the JSON layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

impl ReceiptSubmission {
    /// Produces the canonical form of this submission.
    ///
    /// - item descriptions cleaned
    /// - `purchase_date` as `YYYY-MM-DD`
    /// - `purchase_time` as `HH:MM`
    ///
    /// Call after [`crate::validation::validate_receipt`]; on a validated
    /// submission this cannot fail.
    pub fn into_canonical(self) -> Result<ReceiptSubmission, ParseError> {
        let purchase_date = normalize_date(&self.purchase_date)?;
        let purchase_time = normalize_time(&self.purchase_time)?;
        let items = self.items.iter().map(Item::cleaned).collect();

        Ok(ReceiptSubmission {
            retailer: self.retailer,
            purchase_date,
            purchase_time,
            items,
            total: self.total,
        })
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A processed receipt as held by the store.
///
/// `id` and `points` are assigned once by [`Receipt::issue`]; there is no
/// API to change them afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
    pub id: String,
    pub points: u64,
}

impl Receipt {
    /// Scores a canonical submission and stamps it with `id`.
    pub fn issue(canonical: ReceiptSubmission, id: impl Into<String>) -> Self {
        let points = points::calculate(&canonical);

        Receipt {
            retailer: canonical.retailer,
            purchase_date: canonical.purchase_date,
            purchase_time: canonical.purchase_time,
            items: canonical.items,
            total: canonical.total,
            id: id.into(),
            points,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
