//! # Receipt Store
//!
//! Keeps processed receipts in memory, keyed by id.
//!
//! ## Thread Safety
//! The map is wrapped in a single `Mutex` because:
//! 1. Multiple requests may insert and read at the same time
//! 2. Every operation is one O(1) map access (or one clone for `list`)
//! 3. Nothing inside the lock parses, scores or waits on I/O
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  insert(receipt) ──► moved into the map (store owns it)                 │
//! │  get(id) ──────────► clone out (caller cannot touch stored state)       │
//! │  list() ───────────► clones out, unspecified order                      │
//! │  clear() ──────────► test / reset only                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::Receipt;

/// Concurrent-safe in-memory receipt collection.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: Mutex<HashMap<String, Receipt>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section is a single map operation, so a panic in
    // another holder cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Receipt>> {
        self.receipts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a receipt under its id, replacing any entry with the same id.
    pub fn insert(&self, receipt: Receipt) {
        self.lock().insert(receipt.id.clone(), receipt);
    }

    /// Returns a copy of the receipt with this id.
    pub fn get(&self, id: &str) -> Option<Receipt> {
        self.lock().get(id).cloned()
    }

    /// Returns copies of every stored receipt.
    pub fn list(&self) -> Vec<Receipt> {
        self.lock().values().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes every receipt.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
