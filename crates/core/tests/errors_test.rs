use chrono::{NaiveDate, NaiveTime};
use slotbook_core::errors::{BookingError, BookingResult, InputError, StoreError};

#[test]
fn test_input_error_messages() {
    let cases = [
        (InputError::MissingDateParameter, "Date parameter is required."),
        (InputError::InvalidDateParameter, "Invalid date format. Use YYYY-MM-DD."),
        (InputError::MissingFields, "All fields are required."),
        (InputError::InvalidPhone, "Phone number must be exactly 10 digits."),
        (
            InputError::InvalidDate,
            "Invalid date. Please provide a valid date in YYYY-MM-DD format.",
        ),
        (InputError::InvalidTime, "Invalid time. Use HH:MM in 24-hour format."),
        (
            InputError::OutsideBusinessHours,
            "Appointments can only be booked between 10:00 AM and 5:00 PM, excluding 1:00 PM - 2:00 PM.",
        ),
        (InputError::NameTooLong, "Name must be at most 100 characters."),
        (InputError::SlotAlreadyBooked, "This time slot is already booked."),
        (InputError::MalformedBody, "Invalid request body."),
    ];

    for (error, message) in cases {
        assert_eq!(error.to_string(), message);
    }
}

#[test]
fn test_rejected_is_transparent() {
    let error = BookingError::from(InputError::InvalidPhone);
    assert_eq!(error.to_string(), "Phone number must be exactly 10 digits.");
    assert!(error.is_client_error());
}

#[test]
fn test_slot_taken_becomes_already_booked() {
    let error = BookingError::from(StoreError::SlotTaken {
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
    });

    match error {
        BookingError::Rejected(InputError::SlotAlreadyBooked) => {}
        e => panic!("Expected SlotAlreadyBooked, got: {:?}", e),
    }
}

#[test]
fn test_store_backend_becomes_database_error() {
    let error = BookingError::from(StoreError::Backend(eyre::eyre!("connection refused")));

    assert!(!error.is_client_error());
    assert!(error.to_string().contains("Database error:"));
    assert!(error.to_string().contains("connection refused"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(InputError::MissingFields.into());
    assert!(result.is_err());
}
