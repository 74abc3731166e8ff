//! # Available Slot Handlers
//!
//! Lists the 30-minute slots still open on a given day. The daily catalog runs
//! from 10:00 AM to 5:00 PM with the 1:00 PM - 2:00 PM break left out; every
//! slot already holding an appointment is dropped.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use slotbook_core::{
    errors::InputError,
    models::{appointment::AvailableSlotsResponse, slot::Slot},
    slots,
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Raw query pairs in request order.
type QueryPairs = Vec<(String, String)>;

/// Value of the last `date` pair, so `?date=a&date=b` reads as `b`.
fn date_param(pairs: QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "date")
        .map(|(_, value)| value)
}

/// Lists open slots for one day
///
/// # Endpoint
///
/// ```text
/// GET /available-slots/?date=2025-03-14
/// ```
///
/// # Errors
///
/// * `400` - `date` is missing, malformed, or not a real calendar date
/// * `500` - the store could not be queried
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!("Undecodable slots query: {}", rejection);
        InputError::InvalidDateParameter
    })?;
    let raw_date = date_param(pairs);

    let date = slots::parse_date_param(raw_date.as_deref())?;

    let available = slots::available_slots(state.store.as_ref(), date).await?;

    tracing::debug!("{} open slots on {}", available.len(), date);

    let response = AvailableSlotsResponse {
        date: raw_date.unwrap_or_default(),
        available_slots: available.iter().map(Slot::label).collect(),
    };

    Ok(Json(response))
}
