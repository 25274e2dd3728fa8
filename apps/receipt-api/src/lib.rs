//! # Receipt API
//!
//! HTTP server for submitting receipts and reading back their points.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path                     Success            Failure            │
//! │  ──────  ───────────────────────  ─────────────────  ────────────────   │
//! │  POST    /receipts/process        200 {"id": ...}    400 invalid        │
//! │  GET     /receipts/{id}           200 receipt        404 unknown id     │
//! │  GET     /receipts/{id}/points    200 {"points": n}  404 unknown id     │
//! │  GET     /receipts/               200 [receipt, ...]                    │
//! │  GET     /health                  200 status                            │
//! │  *       known path, wrong method                    405 JSON           │
//! │  *       anything else                               404 JSON           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_HOST` - Interface to bind (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RECEIPT_API_MAX_BODY_BYTES` - Request body limit (default: 1048576)
//! - `RECEIPT_API_ENABLE_CORS` - Permissive CORS (default: false)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod routes;

use receipt_core::ReceiptService;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;

/// Shared application state.
pub struct AppState {
    pub service: ReceiptService,
    pub config: ApiConfig,
}

impl AppState {
    /// State with an empty receipt store.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            service: ReceiptService::new(),
            config,
        }
    }
}
