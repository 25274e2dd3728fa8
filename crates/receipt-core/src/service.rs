//! # Receipt Service
//!
//! The operations the HTTP layer calls. Transport-agnostic: no request or
//! response types cross this boundary.
//!
//! ## process_receipt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ReceiptSubmission                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_receipt() ───── Err ──► CoreError::Validation (nothing stored)│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  into_canonical()   ───── clean descriptions, canonical date/time       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Uuid::new_v4()     ───── fresh id, never reused                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Receipt::issue()   ───── points computed exactly once                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.insert()     ───── LAST step; a receipt is never scored twice    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::store::ReceiptStore;
use crate::types::{Receipt, ReceiptSubmission};
use crate::validation::validate_receipt;

/// Owns a [`ReceiptStore`] and exposes the receipt operations.
///
/// Construct one per server (or per test). There is no process-wide state.
#[derive(Debug, Default)]
pub struct ReceiptService {
    store: ReceiptStore,
}

impl ReceiptService {
    /// Creates a service with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service around an existing store.
    pub fn with_store(store: ReceiptStore) -> Self {
        ReceiptService { store }
    }

    /// The backing store.
    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }

    /// Validates, normalizes, scores and stores a receipt. Returns its id.
    pub fn process_receipt(&self, submission: ReceiptSubmission) -> CoreResult<String> {
        validate_receipt(&submission)?;

        let canonical = submission.into_canonical()?;
        let id = Uuid::new_v4().to_string();
        let receipt = Receipt::issue(canonical, id.clone());

        info!(
            receipt_id = %receipt.id,
            retailer = %receipt.retailer,
            points = receipt.points,
            "Receipt processed"
        );

        self.store.insert(receipt);
        Ok(id)
    }

    /// Returns a copy of the stored receipt.
    pub fn get_receipt(&self, id: &str) -> CoreResult<Receipt> {
        self.store
            .get(id)
            .ok_or_else(|| CoreError::ReceiptNotFound(id.to_string()))
    }

    /// Returns the points awarded to a stored receipt.
    ///
    /// An unknown id is an error, never a zero-points success.
    pub fn get_points(&self, id: &str) -> CoreResult<u64> {
        self.get_receipt(id).map(|receipt| receipt.points)
    }

    /// Returns every stored receipt, in no particular order.
    pub fn list_receipts(&self) -> Vec<Receipt> {
        self.store.list()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::Item;
    use std::sync::Arc;
    use std::thread;

    fn target_submission() -> ReceiptSubmission {
        ReceiptSubmission {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        }
    }

    #[test]
    fn test_process_and_fetch() {
        let service = ReceiptService::new();
        let id = service.process_receipt(target_submission()).unwrap();

        assert!(Uuid::parse_str(&id).is_ok());
        assert_eq!(service.get_points(&id).unwrap(), 28);

        let receipt = service.get_receipt(&id).unwrap();
        assert_eq!(receipt.id, id);
        assert_eq!(receipt.items[4].short_description, "Klarbrunn 12-PK 12 FL OZ");
    }

    #[test]
    fn test_process_stores_canonical_form() {
        let service = ReceiptService::new();
        let mut submission = target_submission();
        submission.purchase_date = "Jan 1, 2022".to_string();
        submission.purchase_time = "1:01 PM".to_string();

        let id = service.process_receipt(submission).unwrap();
        let receipt = service.get_receipt(&id).unwrap();
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.points, 28);
    }

    #[test]
    fn test_invalid_receipt_is_not_stored() {
        let service = ReceiptService::new();
        let mut submission = target_submission();
        submission.total = "35.36".to_string();

        let err = service.process_receipt(submission).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::TotalMismatch { .. })
        ));
        assert!(service.list_receipts().is_empty());
    }

    #[test]
    fn test_out_of_range_prices_are_rejected_not_panicking() {
        let service = ReceiptService::new();
        let mut submission = target_submission();
        submission.items = vec![
            Item::new("abc", "79228162514264337593543950335"),
            Item::new("def", "79228162514264337593543950335"),
        ];

        let err = service.process_receipt(submission).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::AmountOutOfRange)
        ));
        assert!(service.list_receipts().is_empty());
    }

    #[test]
    fn test_digit_separators_are_not_prices() {
        let service = ReceiptService::new();
        let mut submission = target_submission();
        submission.items = vec![Item::new("abc", "1_0.00")];
        submission.total = "10.00".to_string();

        assert!(matches!(
            service.process_receipt(submission),
            Err(CoreError::Validation(ValidationError::PriceNotNumeric { .. }))
        ));
        assert!(service.list_receipts().is_empty());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let service = ReceiptService::new();
        assert!(matches!(
            service.get_points("nope"),
            Err(CoreError::ReceiptNotFound(id)) if id == "nope"
        ));
        assert!(matches!(
            service.get_receipt("nope"),
            Err(CoreError::ReceiptNotFound(_))
        ));
    }

    #[test]
    fn test_ids_are_unique() {
        let service = ReceiptService::new();
        let first = service.process_receipt(target_submission()).unwrap();
        let second = service.process_receipt(target_submission()).unwrap();
        assert_ne!(first, second);
        assert_eq!(service.list_receipts().len(), 2);
    }

    #[test]
    fn test_separate_services_are_isolated() {
        let a = ReceiptService::new();
        let b = ReceiptService::new();
        let id = a.process_receipt(target_submission()).unwrap();
        assert!(b.get_receipt(&id).is_err());
    }

    #[test]
    fn test_concurrent_processing() {
        let service = Arc::new(ReceiptService::new());

        let mut other = target_submission();
        other.retailer = "Walgreens".to_string();

        let handles: Vec<_> = [target_submission(), other]
            .into_iter()
            .map(|submission| {
                let service = Arc::clone(&service);
                thread::spawn(move || service.process_receipt(submission).unwrap())
            })
            .collect();

        let ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_ne!(ids[0], ids[1]);

        let listed: Vec<String> = service.list_receipts().into_iter().map(|r| r.id).collect();
        assert_eq!(listed.len(), 2);
        for id in &ids {
            assert!(listed.contains(id));
        }
    }
}
