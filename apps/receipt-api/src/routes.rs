//! Route definitions and handlers.
//!
//! Handlers only translate between HTTP and [`receipt_core::ReceiptService`].
//! Validation and scoring run synchronously inside the request; they are
//! pure CPU work over small inputs.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    http::{Method, Uri},
    routing::{get, post},
    Json, Router,
};
use receipt_core::{Receipt, ReceiptSubmission};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

// =============================================================================
// Response Bodies
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

// =============================================================================
// Router
// =============================================================================

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let enable_cors = state.config.enable_cors;

    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts", get(list_receipts))
        .route("/receipts/", get(list_receipts))
        .route("/receipts/{id}", get(get_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state);

    if enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

// =============================================================================
// Handlers
// =============================================================================

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.service.store().len(),
    })
}

/// Submit a receipt.
///
/// JSON errors (syntax, wrong types, unknown fields, oversized body) are
/// all reported as 400 rather than axum's default 422/415.
async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(submission) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let id = state.service.process_receipt(submission)?;
    Ok(Json(ProcessResponse { id }))
}

async fn get_receipt(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Receipt>> {
    Ok(Json(state.service.get_receipt(&id)?))
}

async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.service.get_points(&id)?;
    Ok(Json(PointsResponse { points }))
}

async fn list_receipts(State(state): State<Arc<AppState>>) -> Json<Vec<Receipt>> {
    Json(state.service.list_receipts())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

/// Known path, wrong method (e.g. `GET /receipts/process`).
async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
