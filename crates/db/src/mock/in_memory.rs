use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::eyre;
use slotbook_core::{
    errors::StoreError,
    models::appointment::{Appointment, NewAppointment},
    store::AppointmentStore,
};
use uuid::Uuid;

/// Process-local store with the same (date, time) uniqueness guarantee as the
/// Postgres table. The check and the insert happen under one lock.
#[derive(Debug, Default)]
pub struct InMemoryAppointmentStore {
    appointments: Mutex<BTreeMap<(NaiveDate, NaiveTime), Appointment>>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored appointments ordered by date and time.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments
            .lock()
            .map(|appointments| appointments.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.appointments
            .lock()
            .map(|appointments| appointments.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn exists(&self, date: NaiveDate, time: NaiveTime) -> eyre::Result<bool> {
        let appointments = self
            .appointments
            .lock()
            .map_err(|e| eyre!("appointment store lock poisoned: {}", e))?;
        Ok(appointments.contains_key(&(date, time)))
    }

    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, StoreError> {
        let mut appointments = self
            .appointments
            .lock()
            .map_err(|e| eyre!("appointment store lock poisoned: {}", e))?;

        let key = (appointment.date, appointment.time);
        if appointments.contains_key(&key) {
            return Err(StoreError::SlotTaken {
                date: appointment.date,
                time: appointment.time,
            });
        }

        let stored = Appointment {
            id: Uuid::new_v4(),
            name: appointment.name.clone(),
            phone: appointment.phone,
            date: appointment.date,
            time: appointment.time,
            created_at: Utc::now(),
        };
        appointments.insert(key, stored.clone());

        Ok(stored)
    }
}
