//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── ParseError       - Malformed date / time / amount text            │
//! │  ├── ValidationError  - Receipt shape violations (first failure only)  │
//! │  └── CoreError        - What service operations return                 │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - HTTP status + JSON body                        │
//! │                                                                         │
//! │  Flow: ParseError → ValidationError → CoreError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Echo the offending input in the message
//! 3. Errors are enum variants, never String
//! 4. Nothing here is fatal to the process; every error is per-request

use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// A date, time or amount string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse '{input}': {reason}")]
pub struct ParseError {
    /// The raw text that was rejected.
    pub input: String,
    /// Why it was rejected.
    pub reason: String,
}

impl ParseError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Receipt validation failures.
///
/// Validation short-circuits, so a rejected receipt carries exactly one of
/// these. Item indexes are zero-based positions in `items`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("retailer cannot be empty")]
    RetailerRequired,

    #[error("invalid purchaseDate: {0}")]
    InvalidDate(ParseError),

    #[error("invalid purchaseTime: {0}")]
    InvalidTime(ParseError),

    #[error("items cannot be empty")]
    ItemsRequired,

    #[error("item {index}: description cannot be empty")]
    DescriptionRequired { index: usize },

    #[error("item {index}: price cannot be empty")]
    PriceRequired { index: usize },

    #[error("item {index}: price '{price}' is not a number")]
    PriceNotNumeric { index: usize, price: String },

    /// Zero and negative prices both land here.
    #[error("item {index}: price '{price}' must be greater than zero")]
    PriceNotPositive { index: usize, price: String },

    #[error("item prices add up to more than can be represented")]
    AmountOutOfRange,

    #[error("total '{total}' is not a number")]
    TotalNotNumeric { total: String },

    /// Both amounts are already rounded to the cent.
    #[error("item total {computed} does not match receipt total {declared}")]
    TotalMismatch { declared: String, computed: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by [`crate::service::ReceiptService`] operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Receipt failed validation and was not stored.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A value could not be normalized after validation passed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// No receipt is stored under this id.
    ///
    /// ## When This Occurs
    /// - The id was never issued
    /// - The id was issued by a different store instance
    /// - The store was cleared
    #[error("Receipt not found: {0}")]
    ReceiptNotFound(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
