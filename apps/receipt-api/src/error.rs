//! Error types for the Receipt API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_core::CoreError;
use serde::{Deserialize, Serialize};

/// Receipt API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed JSON, unknown fields, or a receipt that failed validation.
    #[error("{0}")]
    BadRequest(String),

    #[error("Receipt not found: {0}")]
    ReceiptNotFound(String),

    #[error("The requested URL {0} was not found on this server.")]
    RouteNotFound(String),

    #[error("Method {method} is not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },
}

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ReceiptNotFound(_) | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Invalid receipt",
            ApiError::ReceiptNotFound(_) => "Receipt not found",
            ApiError::RouteNotFound(_) => "Endpoint not found",
            ApiError::MethodNotAllowed { .. } => "Method not allowed",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(e) => ApiError::BadRequest(format!("error processing receipt: {}", e)),
            CoreError::Parse(e) => ApiError::BadRequest(format!("error processing receipt: {}", e)),
            CoreError::ReceiptNotFound(id) => ApiError::ReceiptNotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");

        let body = ErrorResponse {
            error: self.label().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// API result type.
pub type ApiResult<T> = Result<T, ApiError>;
