use chrono::{NaiveDate, NaiveTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::{from_value, json, to_value};
use slotbook_core::models::{
    appointment::{Appointment, AvailableSlotsResponse, BookingConfirmation, BookingRequest},
    slot::Slot,
};
use uuid::Uuid;

#[test]
fn test_booking_request_missing_fields_default_to_none() {
    let request: BookingRequest = from_value(json!({ "name": "Jane" })).unwrap();

    assert_eq!(request.name.as_deref(), Some("Jane"));
    assert_eq!(request.phone, None);
    assert_eq!(request.date, None);
    assert_eq!(request.time, None);
}

#[test]
fn test_booking_request_rejects_numeric_phone() {
    let result = from_value::<BookingRequest>(json!({
        "name": "Jane",
        "phone": 1234567890,
        "date": "2025-03-14",
        "time": "11:00",
    }));

    assert!(result.is_err());
}

#[test]
fn test_booking_request_accepts_null_fields() {
    let request: BookingRequest =
        from_value(json!({ "name": null, "phone": "1234567890" })).unwrap();

    assert_eq!(request.name, None);
    assert_eq!(request.phone.as_deref(), Some("1234567890"));
}

#[test]
fn test_available_slots_response_shape() {
    let response = AvailableSlotsResponse {
        date: "2025-03-14".to_string(),
        available_slots: vec!["10:00 AM - 10:30 AM".to_string()],
    };

    assert_eq!(
        to_value(&response).unwrap(),
        json!({ "date": "2025-03-14", "available_slots": ["10:00 AM - 10:30 AM"] })
    );
}

#[test]
fn test_booking_confirmation_message() {
    assert_eq!(
        to_value(BookingConfirmation::booked()).unwrap(),
        json!({ "message": "Appointment booked successfully." })
    );
}

#[test]
fn test_appointment_serialization() {
    let appointment = Appointment {
        id: Uuid::new_v4(),
        name: "Jane Doe".to_string(),
        phone: 9_876_543_210,
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        created_at: Utc::now(),
    };

    let value = to_value(&appointment).unwrap();
    assert_eq!(value["date"], json!("2025-03-14"));
    assert_eq!(value["time"], json!("10:30:00"));
    assert_eq!(value["phone"], json!(9_876_543_210_u64));

    let deserialized: Appointment = from_value(value).unwrap();
    assert_eq!(deserialized, appointment);
}

#[test]
fn test_slot_label_crosses_noon() {
    let slot = Slot {
        start: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
        end: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
    };

    assert_eq!(slot.label(), "12:30 PM - 01:00 PM");
}
