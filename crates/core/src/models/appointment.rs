use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted booking. At most one exists per (`date`, `time`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub name: String,
    pub phone: u64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

/// A fully validated booking, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub name: String,
    pub phone: u64,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Raw booking input as submitted by the client.
///
/// Every field is an optional string: absent and empty values are both
/// treated as missing by validation, and any non-string value is rejected
/// when the body is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub message: String,
}

impl BookingConfirmation {
    pub const BOOKED: &'static str = "Appointment booked successfully.";

    pub fn booked() -> Self {
        Self {
            message: Self::BOOKED.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub date: String,
    pub available_slots: Vec<String>,
}
