use axum::{Json, extract::State, http::StatusCode};
use slotbook_core::{booking, models::appointment::BookingConfirmation};
use std::sync::Arc;

use crate::{ApiState, middleware::body::BookingBody, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    BookingBody(payload): BookingBody,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let appointment = booking::book(state.store.as_ref(), &payload).await?;

    tracing::info!(
        "Appointment booked: id={}, date={}, time={}",
        appointment.id,
        appointment.date,
        appointment.time
    );

    Ok((StatusCode::CREATED, Json(BookingConfirmation::booked())))
}
