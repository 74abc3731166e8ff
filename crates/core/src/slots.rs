//! # Slot Calculator
//!
//! Builds the fixed daily catalog of 30-minute slots (10:00 to 17:00 with the
//! 13:00 break left out) and filters it against the appointments already in
//! the store for a given date.

use chrono::NaiveDate;

use crate::datetime::{parse_date, time_at_minute};
use crate::errors::{BookingResult, InputError};
use crate::hours::{BREAK_WINDOW, BUSINESS_HOURS, SLOT_MINUTES};
use crate::models::slot::Slot;
use crate::store::AppointmentStore;

/// Every slot offered on any day, ascending by start time.
pub fn daily_catalog() -> Vec<Slot> {
    BUSINESS_HOURS
        .step_by(SLOT_MINUTES as usize)
        .filter(|minute| !BREAK_WINDOW.contains(minute))
        .filter_map(|minute| {
            Some(Slot {
                start: time_at_minute(minute)?,
                end: time_at_minute(minute + SLOT_MINUTES)?,
            })
        })
        .collect()
}

/// Validates the raw `date` query value.
pub fn parse_date_param(date: Option<&str>) -> Result<NaiveDate, InputError> {
    let date = date
        .filter(|value| !value.is_empty())
        .ok_or(InputError::MissingDateParameter)?;
    parse_date(date).ok_or(InputError::InvalidDateParameter)
}

/// Slots on `date` that no appointment occupies yet.
///
/// One existence query is issued per catalog slot.
pub async fn available_slots(
    store: &dyn AppointmentStore,
    date: NaiveDate,
) -> BookingResult<Vec<Slot>> {
    let mut available = Vec::new();
    for slot in daily_catalog() {
        if !store.exists(date, slot.start).await? {
            available.push(slot);
        }
    }
    Ok(available)
}
