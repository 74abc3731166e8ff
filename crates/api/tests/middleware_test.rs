use axum::{
    body::to_bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use slotbook_api::middleware::error_handling::{AppError, INTERNAL_ERROR_MESSAGE};
use slotbook_core::errors::{BookingError, InputError, StoreError};

async fn body_of(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_error_handling_rejection() {
    let response = AppError(BookingError::Rejected(InputError::InvalidTime)).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_of(response).await,
        json!({ "error": "Invalid time. Use HH:MM in 24-hour format." })
    );
}

#[tokio::test]
async fn test_error_handling_database_hides_detail() {
    let report = eyre::eyre!("relation \"appointments\" does not exist");
    let response = AppError(BookingError::Database(report)).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_of(response).await, json!({ "error": INTERNAL_ERROR_MESSAGE }));
}

#[tokio::test]
async fn test_store_backend_failure_is_internal_error() {
    let error = BookingError::from(StoreError::Backend(eyre::eyre!("connection reset")));

    let response = AppError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_of(response).await, json!({ "error": "Internal server error." }));
}

#[tokio::test]
async fn test_conversions_into_app_error() {
    let from_input: AppError = InputError::SlotAlreadyBooked.into();
    assert_eq!(from_input.into_response().status(), StatusCode::BAD_REQUEST);

    let from_report: AppError = eyre::eyre!("pool timed out").into();
    assert_eq!(
        from_report.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
