//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! The client always receives a well-formed JSON object.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use minilist_core::telegram::InitDataError;

use crate::db::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug, Error)]
pub enum ApiError {
    /// Service started without DATABASE_URL (500, both endpoints)
    #[error("backend is not configured")]
    Config,

    /// Missing/unparsable identity (400; only save surfaces this)
    #[error("identity error: {0}")]
    Auth(#[from] InitDataError),

    /// Database error (500, logged)
    #[error("database error: {0}")]
    Database(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Config => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "backend is not configured".to_string(),
            ),
            ApiError::Auth(err) => (
                StatusCode::BAD_REQUEST,
                format!("user data not found in initData: {}", err),
            ),
            ApiError::Database(err) => {
                // Log the actual error, return a generic message
                tracing::error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
