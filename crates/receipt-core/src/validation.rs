//! # Validation Module
//!
//! Receipt validation rules.
//!
//! ## Check Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      validate_receipt()                                 │
//! │                                                                         │
//! │  1. retailer non-empty ───────────────► RetailerRequired               │
//! │  2. purchaseDate normalizes ──────────► InvalidDate                    │
//! │  3. purchaseTime normalizes ──────────► InvalidTime                    │
//! │  4. items non-empty ──────────────────► ItemsRequired                  │
//! │  5. for each item, in order:                                           │
//! │       description non-empty ──────────► DescriptionRequired            │
//! │       price non-empty ────────────────► PriceRequired                  │
//! │       price is a number ──────────────► PriceNotNumeric                │
//! │       price > 0 ──────────────────────► PriceNotPositive               │
//! │     Σ prices fits in a Decimal ───────► AmountOutOfRange               │
//! │  6. total is a number ────────────────► TotalNotNumeric                │
//! │     round(Σ round(price)) == round(total) ► TotalMismatch              │
//! │                                                                         │
//! │  First failure wins. Order is fixed so messages are deterministic.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation is a pure check. It never rewrites the submission; the
//! caller builds the canonical form separately.
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::validate_receipt;
//! use receipt_core::{Item, ReceiptSubmission, ValidationError};
//!
//! let receipt = ReceiptSubmission {
//!     retailer: "".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(validate_receipt(&receipt), Err(ValidationError::RetailerRequired));
//! ```

use rust_decimal::Decimal;

use crate::date::normalize_date;
use crate::error::ValidationError;
use crate::money::{parse_amount, round_to_cent, sum_to_cent};
use crate::time::normalize_time;
use crate::types::{Item, ReceiptSubmission};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a submitted receipt. See the module docs for the check order.
pub fn validate_receipt(receipt: &ReceiptSubmission) -> ValidationResult<()> {
    if receipt.retailer.trim().is_empty() {
        return Err(ValidationError::RetailerRequired);
    }

    normalize_date(&receipt.purchase_date).map_err(ValidationError::InvalidDate)?;
    normalize_time(&receipt.purchase_time).map_err(ValidationError::InvalidTime)?;

    if receipt.items.is_empty() {
        return Err(ValidationError::ItemsRequired);
    }

    let prices = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect::<ValidationResult<Vec<Decimal>>>()?;

    let items_sum = sum_to_cent(prices).ok_or(ValidationError::AmountOutOfRange)?;
    validate_total(&receipt.total, items_sum)
}

/// Validates one item and returns its parsed price.
pub fn validate_item(index: usize, item: &Item) -> ValidationResult<Decimal> {
    if item.short_description.trim().is_empty() {
        return Err(ValidationError::DescriptionRequired { index });
    }

    if item.price.is_empty() {
        return Err(ValidationError::PriceRequired { index });
    }

    let price = parse_amount(&item.price).map_err(|_| ValidationError::PriceNotNumeric {
        index,
        price: item.price.clone(),
    })?;

    if price <= Decimal::ZERO {
        return Err(ValidationError::PriceNotPositive {
            index,
            price: item.price.clone(),
        });
    }

    Ok(price)
}

/// Compares the declared total against the cent-rounded item sum.
///
/// Equality is exact after rounding; there is no tolerance window.
pub fn validate_total(total: &str, items_sum: Decimal) -> ValidationResult<()> {
    let declared = parse_amount(total).map_err(|_| ValidationError::TotalNotNumeric {
        total: total.to_string(),
    })?;

    let declared = round_to_cent(declared);
    let computed = round_to_cent(items_sum);

    if declared != computed {
        return Err(ValidationError::TotalMismatch {
            declared: declared.to_string(),
            computed: computed.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ReceiptSubmission {
        ReceiptSubmission {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
            ],
            total: "18.74".to_string(),
        }
    }

    #[test]
    fn test_valid_receipt() {
        assert_eq!(validate_receipt(&valid()), Ok(()));
    }

    #[test]
    fn test_rejects_empty_retailer() {
        let mut receipt = valid();
        receipt.retailer = String::new();
        assert_eq!(validate_receipt(&receipt), Err(ValidationError::RetailerRequired));

        receipt.retailer = "   ".to_string();
        assert_eq!(validate_receipt(&receipt), Err(ValidationError::RetailerRequired));
    }

    #[test]
    fn test_rejects_bad_date_and_time() {
        let mut receipt = valid();
        receipt.purchase_date = "2024-13-01".to_string();
        assert!(matches!(
            validate_receipt(&receipt),
            Err(ValidationError::InvalidDate(_))
        ));

        let mut receipt = valid();
        receipt.purchase_time = "25:00".to_string();
        assert!(matches!(
            validate_receipt(&receipt),
            Err(ValidationError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_rejects_empty_items() {
        let mut receipt = valid();
        receipt.items.clear();
        assert_eq!(validate_receipt(&receipt), Err(ValidationError::ItemsRequired));
    }

    #[test]
    fn test_rejects_bad_items() {
        let cases = [
            (Item::new("", "1.00"), ValidationError::DescriptionRequired { index: 1 }),
            (Item::new("Gum", ""), ValidationError::PriceRequired { index: 1 }),
            (
                Item::new("Gum", "abc"),
                ValidationError::PriceNotNumeric { index: 1, price: "abc".to_string() },
            ),
            (
                Item::new("Gum", "0"),
                ValidationError::PriceNotPositive { index: 1, price: "0".to_string() },
            ),
            (
                Item::new("Gum", "0.00"),
                ValidationError::PriceNotPositive { index: 1, price: "0.00".to_string() },
            ),
            (
                Item::new("Gum", "-1.00"),
                ValidationError::PriceNotPositive { index: 1, price: "-1.00".to_string() },
            ),
            (
                Item::new("Gum", "1_0.00"),
                ValidationError::PriceNotNumeric { index: 1, price: "1_0.00".to_string() },
            ),
            (Item::new(" \t ", "1.00"), ValidationError::DescriptionRequired { index: 1 }),
        ];

        for (bad_item, expected) in cases {
            let mut receipt = valid();
            receipt.items[1] = bad_item;
            assert_eq!(validate_receipt(&receipt), Err(expected));
        }
    }

    #[test]
    fn test_rejects_total_off_by_one_cent() {
        let mut receipt = valid();
        receipt.total = "18.75".to_string();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::TotalMismatch {
                declared: "18.75".to_string(),
                computed: "18.74".to_string(),
            })
        );

        receipt.total = "18.73".to_string();
        assert!(validate_receipt(&receipt).is_err());
    }

    #[test]
    fn test_rejects_overflowing_item_sum() {
        let mut receipt = valid();
        receipt.items = vec![
            Item::new("A", "79228162514264337593543950335"),
            Item::new("B", "79228162514264337593543950335"),
        ];
        receipt.total = "1.00".to_string();
        assert_eq!(validate_receipt(&receipt), Err(ValidationError::AmountOutOfRange));
    }

    #[test]
    fn test_rejects_non_numeric_total() {
        let mut receipt = valid();
        receipt.total = "eighteen".to_string();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::TotalNotNumeric { total: "eighteen".to_string() })
        );

        receipt.total = "1_8.74".to_string();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::TotalNotNumeric { total: "1_8.74".to_string() })
        );

        receipt.total = String::new();
        assert!(matches!(
            validate_receipt(&receipt),
            Err(ValidationError::TotalNotNumeric { .. })
        ));
    }

    #[test]
    fn test_total_compared_after_rounding() {
        let mut receipt = valid();
        receipt.items = vec![Item::new("A", "0.1"), Item::new("B", "0.2")];
        receipt.total = "0.30".to_string();
        assert_eq!(validate_receipt(&receipt), Ok(()));

        receipt.total = "0.3".to_string();
        assert_eq!(validate_receipt(&receipt), Ok(()));
    }

    /// Retailer is checked before anything else, so an otherwise broken
    /// receipt still reports the retailer.
    #[test]
    fn test_first_failure_wins() {
        let receipt = ReceiptSubmission {
            retailer: String::new(),
            purchase_date: "nope".to_string(),
            purchase_time: "nope".to_string(),
            items: vec![],
            total: "x".to_string(),
        };
        assert_eq!(validate_receipt(&receipt), Err(ValidationError::RetailerRequired));
    }

    #[test]
    fn test_non_canonical_inputs_are_valid() {
        let mut receipt = valid();
        receipt.purchase_date = "01/01/2022".to_string();
        receipt.purchase_time = "1:01 PM".to_string();
        assert_eq!(validate_receipt(&receipt), Ok(()));
    }
}
