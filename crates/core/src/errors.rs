use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Client-side input problems. The `Display` text of each variant is the exact
/// message returned to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Date parameter is required.")]
    MissingDateParameter,

    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDateParameter,

    #[error("All fields are required.")]
    MissingFields,

    #[error("Phone number must be exactly 10 digits.")]
    InvalidPhone,

    #[error("Invalid date. Please provide a valid date in YYYY-MM-DD format.")]
    InvalidDate,

    #[error("Invalid time. Use HH:MM in 24-hour format.")]
    InvalidTime,

    #[error(
        "Appointments can only be booked between 10:00 AM and 5:00 PM, excluding 1:00 PM - 2:00 PM."
    )]
    OutsideBusinessHours,

    #[error("Name must be at most 100 characters.")]
    NameTooLong,

    #[error("This time slot is already booked.")]
    SlotAlreadyBooked,

    #[error("Invalid request body.")]
    MalformedBody,
}

/// Failure modes of an [`AppointmentStore`](crate::store::AppointmentStore) insert.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("slot {date} {time} is already taken")]
    SlotTaken { date: NaiveDate, time: NaiveTime },

    #[error(transparent)]
    Backend(#[from] eyre::Report),
}

#[derive(Error, Debug)]
pub enum BookingError {
    #[error(transparent)]
    Rejected(#[from] InputError),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

impl BookingError {
    /// True for errors caused by the caller's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, BookingError::Rejected(_))
    }
}

// A constraint violation at insert time is the same outcome as losing the
// pre-insert existence check.
impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SlotTaken { .. } => BookingError::Rejected(InputError::SlotAlreadyBooked),
            StoreError::Backend(report) => BookingError::Database(report),
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
