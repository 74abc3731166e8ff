//! # Error Handling Middleware
//!
//! This module maps booking errors to HTTP status codes and JSON error bodies
//! of the form `{ "error": "<message>" }`, so every endpoint reports failures
//! the same way.
//!
//! Client errors carry their fixed, human-readable message. Server errors are
//! logged in full and answered with a generic message only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use slotbook_core::errors::{BookingError, InputError};

/// Body of every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::errors::InputError;
///
/// async fn handler(phone: String) -> Result<Json<String>, AppError> {
///     if phone.len() != 10 {
///         return Err(InputError::InvalidPhone.into());
///     }
///     Ok(Json(phone))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = if self.0.is_client_error() {
            tracing::warn!("Request rejected: {}", self.0);
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            tracing::error!("Request failed: {:?}", self.0);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            )
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError(BookingError::Rejected(err))
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}
