//! # Booking Validator
//!
//! Turns a raw [`BookingRequest`] into a stored [`Appointment`]. Checks run in
//! a fixed order and stop at the first failure, so a request with several
//! problems always reports the same one:
//!
//! 1. every field present and non-empty
//! 2. phone is exactly 10 ASCII digits
//! 3. date is a real `YYYY-MM-DD` calendar date
//! 4. time is a 24-hour `HH:MM`
//! 5. time falls inside business hours and outside the break
//! 6. name fits the 100 character column
//! 7. nothing is booked at that date and time yet
//!
//! The store's uniqueness constraint remains the final guard: a duplicate that
//! slips past step 7 under concurrency is rejected at insert with the same
//! error.

use crate::datetime::{parse_date, parse_time};
use crate::errors::{BookingResult, InputError};
use crate::hours::is_bookable;
use crate::models::appointment::{Appointment, BookingRequest, NewAppointment};
use crate::store::AppointmentStore;

pub const PHONE_DIGITS: usize = 10;
pub const MAX_NAME_CHARS: usize = 100;

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn parse_phone(phone: &str) -> Result<u64, InputError> {
    if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidPhone);
    }
    phone.parse().map_err(|_| InputError::InvalidPhone)
}

/// Runs every check that does not need the store.
pub fn validate(request: &BookingRequest) -> Result<NewAppointment, InputError> {
    let (Some(name), Some(phone), Some(date), Some(time)) = (
        present(&request.name),
        present(&request.phone),
        present(&request.date),
        present(&request.time),
    ) else {
        return Err(InputError::MissingFields);
    };

    let phone = parse_phone(phone)?;
    let date = parse_date(date).ok_or(InputError::InvalidDate)?;
    let time = parse_time(time).ok_or(InputError::InvalidTime)?;

    if !is_bookable(time) {
        return Err(InputError::OutsideBusinessHours);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(InputError::NameTooLong);
    }

    Ok(NewAppointment {
        name: name.to_string(),
        phone,
        date,
        time,
    })
}

/// Validates `request` and inserts it.
pub async fn book(
    store: &dyn AppointmentStore,
    request: &BookingRequest,
) -> BookingResult<Appointment> {
    let appointment = validate(request)?;

    if store.exists(appointment.date, appointment.time).await? {
        return Err(InputError::SlotAlreadyBooked.into());
    }

    Ok(store.insert(&appointment).await?)
}
