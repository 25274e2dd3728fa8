//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of the receipt points engine. It validates
//! submitted receipts, normalizes their dates and times, scores them and
//! keeps them in memory. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  receipt-api (axum)                             │   │
//! │  │   POST /receipts/process   GET /receipts/{id}[/points]          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ReceiptSubmission / Receipt            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ receipt-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │   date   │ │   time   │ │  money   │ │    validation    │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐                       │   │
//! │  │   │  points  │ │  store   │ │ service  │                       │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘                       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HTTP • NO GLOBAL STATE                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`date`] - Date normalization to `YYYY-MM-DD`
//! - [`time`] - Time normalization to 24-hour `HH:MM`, range checks
//! - [`money`] - Exact decimal parsing and cent rounding
//! - [`types`] - Item, ReceiptSubmission, Receipt
//! - [`validation`] - Receipt validation rules
//! - [`points`] - The six points rules
//! - [`store`] - Concurrent in-memory receipt store
//! - [`service`] - process / get / points / list operations
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{Item, ReceiptService, ReceiptSubmission};
//!
//! let service = ReceiptService::new();
//! let submission = ReceiptSubmission {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
//!     total: "6.49".to_string(),
//! };
//!
//! let id = service.process_receipt(submission).unwrap();
//! assert_eq!(service.get_points(&id).unwrap(), 6 + 6);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod date;
pub mod error;
pub mod money;
pub mod points;
pub mod service;
pub mod store;
pub mod time;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ParseError, ValidationError};
pub use points::PointsBreakdown;
pub use service::ReceiptService;
pub use store::ReceiptStore;
pub use types::{Item, Receipt, ReceiptSubmission};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Earliest purchase year accepted by the date normalizer.
pub const MIN_PURCHASE_YEAR: i32 = 1900;

/// Latest purchase year accepted by the date normalizer.
pub const MAX_PURCHASE_YEAR: i32 = 2100;

/// Start of the afternoon bonus window (exclusive).
pub const AFTERNOON_WINDOW_START: &str = "14:00";

/// End of the afternoon bonus window (exclusive).
pub const AFTERNOON_WINDOW_END: &str = "16:00";
