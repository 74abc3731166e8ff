use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::errors::StoreError;
use crate::models::appointment::{Appointment, NewAppointment};

/// Persistence for appointments.
///
/// Implementations must enforce uniqueness of (`date`, `time`) atomically at
/// insert time and report a duplicate as [`StoreError::SlotTaken`].
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Whether an appointment already occupies `date` at `time`.
    async fn exists(&self, date: NaiveDate, time: NaiveTime) -> eyre::Result<bool>;

    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, StoreError>;

    /// Reachability check used by the health endpoint.
    async fn ping(&self) -> eyre::Result<()> {
        Ok(())
    }
}
